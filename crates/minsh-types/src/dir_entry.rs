//! Directory entry types returned by filesystem listings and stats.

use std::time::SystemTime;

/// Kind of directory entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirEntryKind {
    File,
    Directory,
    Symlink,
}

impl DirEntryKind {
    /// The leading character of a mode string (`-`, `d`, `l`).
    pub fn type_char(self) -> char {
        match self {
            DirEntryKind::File => '-',
            DirEntryKind::Directory => 'd',
            DirEntryKind::Symlink => 'l',
        }
    }
}

/// A directory entry — the unified file metadata type.
///
/// Produced by `Filesystem::list` and `Filesystem::stat`. Immutable once read;
/// the only transformation the listing applies is a rename for the implied
/// `.` and `..` entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    /// Name of the entry (not full path).
    pub name: String,
    /// Kind of entry.
    pub kind: DirEntryKind,
    /// Size in bytes as reported by the filesystem.
    pub size: u64,
    /// Last modification time, if available.
    pub modified: Option<SystemTime>,
    /// Unix permission bits (e.g., 0o644), if available.
    pub permissions: Option<u32>,
}

impl DirEntry {
    /// Create a new directory entry.
    pub fn directory(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: DirEntryKind::Directory,
            size: 0,
            modified: None,
            permissions: None,
        }
    }

    /// Create a new file entry.
    pub fn file(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            kind: DirEntryKind::File,
            size,
            modified: None,
            permissions: None,
        }
    }

    /// Create a new symlink entry.
    pub fn symlink(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: DirEntryKind::Symlink,
            size: 0,
            modified: None,
            permissions: None,
        }
    }

    /// Set the modification time.
    pub fn with_modified(mut self, modified: SystemTime) -> Self {
        self.modified = Some(modified);
        self
    }

    /// Set the permission bits.
    pub fn with_permissions(mut self, permissions: u32) -> Self {
        self.permissions = Some(permissions);
        self
    }

    /// Returns true if this entry is a directory.
    pub fn is_dir(&self) -> bool {
        self.kind == DirEntryKind::Directory
    }

    /// Returns true if this entry is a regular file.
    pub fn is_file(&self) -> bool {
        self.kind == DirEntryKind::File
    }

    /// Returns true if the name starts with a dot.
    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }

    /// The extension of the name, including the leading dot.
    ///
    /// Everything from the last `.` onward, so `.bashrc` is its own
    /// extension and `archive.tar.gz` yields `.gz`. Empty when there is no dot.
    pub fn extension(&self) -> &str {
        match self.name.rfind('.') {
            Some(idx) => &self.name[idx..],
            None => "",
        }
    }

    /// Render the type and permission bits like `drwxr-xr-x`.
    ///
    /// Unknown permissions render as all dashes after the type character.
    pub fn mode_string(&self) -> String {
        const BITS: [(u32, char); 9] = [
            (0o400, 'r'),
            (0o200, 'w'),
            (0o100, 'x'),
            (0o040, 'r'),
            (0o020, 'w'),
            (0o010, 'x'),
            (0o004, 'r'),
            (0o002, 'w'),
            (0o001, 'x'),
        ];

        let perms = self.permissions.unwrap_or(0);
        let mut out = String::with_capacity(10);
        out.push(self.kind.type_char());
        for (mask, ch) in BITS {
            out.push(if perms & mask != 0 { ch } else { '-' });
        }
        out
    }
}
