//! Local filesystem backend.

use async_trait::async_trait;
use std::fs::Metadata;
use std::io;
use std::path::Path;
use tokio::fs;

use minsh_types::{DirEntry, DirEntryKind};

use super::traits::{base_name, Filesystem};

/// Local filesystem backend over absolute host paths.
#[derive(Debug, Clone, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new local filesystem.
    pub fn new() -> Self {
        Self
    }
}

/// Build an entry from host metadata.
fn entry_from_metadata(name: String, meta: &Metadata) -> DirEntry {
    let kind = if meta.file_type().is_symlink() {
        DirEntryKind::Symlink
    } else if meta.is_dir() {
        DirEntryKind::Directory
    } else {
        DirEntryKind::File
    };

    DirEntry {
        name,
        kind,
        size: meta.len(),
        modified: meta.modified().ok(),
        permissions: permission_bits(meta),
    }
}

#[cfg(unix)]
fn permission_bits(meta: &Metadata) -> Option<u32> {
    use std::os::unix::fs::PermissionsExt;
    Some(meta.permissions().mode() & 0o777)
}

#[cfg(not(unix))]
fn permission_bits(meta: &Metadata) -> Option<u32> {
    Some(if meta.permissions().readonly() { 0o444 } else { 0o666 })
}

#[async_trait]
impl Filesystem for LocalFs {
    async fn list(&self, path: &Path) -> io::Result<Vec<DirEntry>> {
        let mut entries = Vec::new();
        let mut dir = fs::read_dir(path).await?;

        while let Some(entry) = dir.next_entry().await? {
            // DirEntry::metadata does not follow symlinks, so links list as links
            let meta = entry.metadata().await?;
            let name = entry.file_name().to_string_lossy().into_owned();
            entries.push(entry_from_metadata(name, &meta));
        }

        tracing::trace!(path = %path.display(), count = entries.len(), "listed directory");
        Ok(entries)
    }

    async fn stat(&self, path: &Path) -> io::Result<DirEntry> {
        let meta = fs::metadata(path).await?;
        Ok(entry_from_metadata(base_name(path), &meta))
    }
}
