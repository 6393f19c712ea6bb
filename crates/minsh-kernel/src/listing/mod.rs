//! The directory-listing subsystem behind `ls`.
//!
//! ```text
//! tokens ──▶ options (parse) ──▶ source (fetch) ──▶ sort ──▶ render ──▶ lines
//!                                   │
//!                                   └─ implied `.` / `..` prepended after sorting
//! ```

pub mod options;
pub mod render;
pub mod size;
pub mod sort;
pub mod source;

pub use options::{ListingOptions, SortMode};
pub use render::{render_lines, ListedEntry};
pub use size::format_size;
pub use sort::sort_entries;
pub use source::{collect_entries, implied_entries, ListError};
