//! Filesystem access for minsh.
//!
//! Every builtin reaches the filesystem through the `Filesystem` trait:
//!
//! - **LocalFs**: the real filesystem, absolute host paths
//! - **MemoryFs**: in-memory tree with controllable metadata (tests, demos)

mod local;
mod memory;
mod traits;

pub use local::LocalFs;
pub use memory::MemoryFs;
pub use traits::{base_name, Filesystem};
