//! Pure data types for minsh: directory entries, command results, tool schemas.
//!
//! This crate is a leaf dependency with no async runtime and no I/O, so the
//! listing logic and its tests can reason about entries without touching a
//! filesystem.

pub mod dir_entry;
pub mod result;
pub mod tool;

// Flat re-exports for convenience
pub use dir_entry::*;
pub use result::*;
pub use tool::*;
