//! Fetching entries for a listing.

use std::io;
use std::path::Path;

use minsh_types::DirEntry;
use thiserror::Error;

use crate::paths;
use crate::vfs::{base_name, Filesystem};

/// Errors while gathering entries.
#[derive(Debug, Error)]
pub enum ListError {
    #[error("cannot access '{path}': {source}")]
    Access {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl ListError {
    fn access(path: impl Into<String>, source: io::Error) -> Self {
        ListError::Access {
            path: path.into(),
            source,
        }
    }
}

/// Gather entries for `targets`, or for `cwd` when there are none.
///
/// Each target is listed as a directory, or else stat'ed as a single entry.
/// The first target that is neither aborts the whole call; later targets
/// are not attempted.
pub async fn collect_entries(
    fs: &dyn Filesystem,
    cwd: &Path,
    targets: &[String],
) -> Result<Vec<DirEntry>, ListError> {
    if targets.is_empty() {
        return fs
            .list(cwd)
            .await
            .map_err(|e| ListError::access(cwd.display().to_string(), e));
    }

    let mut entries = Vec::new();
    for target in targets {
        let path = paths::resolve(cwd, target);
        match fs.list(&path).await {
            Ok(listed) => entries.extend(listed),
            Err(list_err) => {
                tracing::trace!(target = %target, error = %list_err, "not a listable directory, trying stat");
                let entry = fs
                    .stat(&path)
                    .await
                    .map_err(|e| ListError::access(target.as_str(), e))?;
                entries.push(entry);
            }
        }
    }
    Ok(entries)
}

/// The implied entries for the working directory and its parent, in that order.
///
/// Their names are the real base names; the listing renders them as `.`
/// and `..`.
pub async fn implied_entries(
    fs: &dyn Filesystem,
    cwd: &Path,
) -> Result<(DirEntry, DirEntry), ListError> {
    let parent = cwd.parent().unwrap_or(cwd);
    let current = directory_info(fs, cwd).await?;
    let parent = directory_info(fs, parent).await?;
    Ok((current, parent))
}

/// Metadata for `dir` as its own parent lists it.
///
/// Falls back to a direct stat when the parent can't be read or has no
/// matching entry, which is always the case for the root.
async fn directory_info(fs: &dyn Filesystem, dir: &Path) -> Result<DirEntry, ListError> {
    if let Some(parent) = dir.parent() {
        let name = base_name(dir);
        if let Ok(siblings) = fs.list(parent).await
            && let Some(entry) = siblings.into_iter().find(|e| e.name == name)
        {
            return Ok(entry);
        }
    }

    fs.stat(dir)
        .await
        .map_err(|e| ListError::access(dir.display().to_string(), e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vfs::MemoryFs;
    use std::path::PathBuf;

    fn fixture() -> MemoryFs {
        let fs = MemoryFs::new();
        fs.write("/home/amy/a.txt", b"aa").unwrap();
        fs.write("/home/amy/b.txt", b"bbbb").unwrap();
        fs.write("/home/amy/docs/readme.md", b"# hi").unwrap();
        fs.write("/home/amy/docs/guide.md", b"# guide").unwrap();
        fs.set_permissions("/home", 0o700).unwrap();
        fs
    }

    fn names(entries: &[DirEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    fn targets(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn no_targets_lists_cwd() {
        let fs = fixture();
        let entries = collect_entries(&fs, Path::new("/home/amy"), &[]).await.unwrap();
        assert_eq!(names(&entries), vec!["a.txt", "b.txt", "docs"]);
    }

    #[tokio::test]
    async fn directory_target_lists_contents() {
        let fs = fixture();
        let entries = collect_entries(&fs, Path::new("/home/amy"), &targets(&["docs"]))
            .await
            .unwrap();
        assert_eq!(names(&entries), vec!["readme.md", "guide.md"]);
    }

    #[tokio::test]
    async fn file_target_yields_single_entry() {
        let fs = fixture();
        let entries = collect_entries(&fs, Path::new("/home/amy"), &targets(&["b.txt"]))
            .await
            .unwrap();
        assert_eq!(names(&entries), vec!["b.txt"]);
        assert_eq!(entries[0].size, 4);
    }

    #[tokio::test]
    async fn targets_are_concatenated_in_order() {
        let fs = fixture();
        let entries = collect_entries(&fs, Path::new("/home/amy"), &targets(&["b.txt", "docs", "a.txt"]))
            .await
            .unwrap();
        assert_eq!(names(&entries), vec!["b.txt", "readme.md", "guide.md", "a.txt"]);
    }

    #[tokio::test]
    async fn missing_target_aborts() {
        let fs = fixture();
        let err = collect_entries(&fs, Path::new("/home/amy"), &targets(&["a.txt", "nope", "docs"]))
            .await
            .unwrap_err();
        let ListError::Access { path, source } = err;
        assert_eq!(path, "nope");
        assert_eq!(source.kind(), io::ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn implied_entries_come_from_parent_listings() {
        let fs = fixture();
        let (current, parent) = implied_entries(&fs, Path::new("/home/amy")).await.unwrap();
        assert_eq!(current.name, "amy");
        assert!(current.is_dir());
        assert_eq!(parent.name, "home");
        assert_eq!(parent.permissions, Some(0o700));
    }

    #[tokio::test]
    async fn implied_entries_at_root() {
        let fs = fixture();
        let (current, parent) = implied_entries(&fs, &PathBuf::from("/")).await.unwrap();
        assert!(current.is_dir());
        assert!(parent.is_dir());
    }

    #[tokio::test]
    async fn implied_entries_for_missing_cwd_fail() {
        let fs = fixture();
        assert!(implied_entries(&fs, Path::new("/gone")).await.is_err());
    }
}
