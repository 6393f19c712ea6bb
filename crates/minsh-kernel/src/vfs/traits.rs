//! Core filesystem trait.

use async_trait::async_trait;
use std::io;
use std::path::Path;

use minsh_types::DirEntry;

/// Abstract filesystem interface.
///
/// Paths are absolute; callers resolve relative arguments against the
/// working directory before calling in.
#[async_trait]
pub trait Filesystem: Send + Sync {
    /// List the entries of a directory, in the backend's enumeration order.
    async fn list(&self, path: &Path) -> io::Result<Vec<DirEntry>>;

    /// Get metadata for a single path, following symlinks.
    ///
    /// The returned entry is named after the last path component.
    async fn stat(&self, path: &Path) -> io::Result<DirEntry>;
}

/// The name an entry for `path` carries: its last component, or the path
/// itself when there is none (`/`).
pub fn base_name(path: &Path) -> String {
    match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => path.to_string_lossy().into_owned(),
    }
}
