//! Path helpers: home directory lookup and lexical path resolution.

use std::path::{Component, Path, PathBuf};

use directories::BaseDirs;

/// Get the user's home directory, if the platform can determine one.
pub fn home_dir() -> Option<PathBuf> {
    BaseDirs::new().map(|d| d.home_dir().to_path_buf())
}

/// Resolve `path` against `cwd` and normalize `.` and `..` lexically.
///
/// Absolute paths ignore `cwd`. `..` at the root stays at the root.
pub fn resolve(cwd: &Path, path: &str) -> PathBuf {
    let joined = if Path::new(path).is_absolute() {
        PathBuf::from(path)
    } else {
        cwd.join(path)
    };
    normalize(&joined)
}

/// Normalize `.` and `..` components without touching the filesystem.
pub fn normalize(path: &Path) -> PathBuf {
    let mut result = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // Never pop past the root or a prefix
                if matches!(result.components().next_back(), Some(Component::Normal(_))) {
                    result.pop();
                }
            }
            other => result.push(other),
        }
    }
    if result.as_os_str().is_empty() {
        result.push(".");
    }
    result
}
