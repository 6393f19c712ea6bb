//! In-memory filesystem implementation.
//!
//! Used for tests and demos. Entries enumerate in creation order, and
//! modification times and permissions can be set explicitly, so listings
//! are fully deterministic.

use async_trait::async_trait;
use std::collections::HashMap;
use std::io;
use std::path::{Component, Path, PathBuf};
use std::sync::RwLock;
use std::time::SystemTime;

use minsh_types::DirEntry;

use super::traits::{base_name, Filesystem};

const DEFAULT_FILE_MODE: u32 = 0o644;
const DEFAULT_DIR_MODE: u32 = 0o755;

/// Node in the memory filesystem.
#[derive(Debug, Clone)]
struct Node {
    /// `None` for directories.
    data: Option<Vec<u8>>,
    modified: SystemTime,
    permissions: u32,
    /// Creation sequence number, gives the enumeration order.
    seq: u64,
}

impl Node {
    fn is_dir(&self) -> bool {
        self.data.is_none()
    }
}

#[derive(Debug)]
struct Tree {
    nodes: HashMap<PathBuf, Node>,
    next_seq: u64,
}

impl Tree {
    fn insert(&mut self, path: PathBuf, data: Option<Vec<u8>>) {
        let permissions = if data.is_some() {
            DEFAULT_FILE_MODE
        } else {
            DEFAULT_DIR_MODE
        };
        let seq = self.next_seq;
        self.next_seq += 1;
        self.nodes.insert(
            path,
            Node {
                data,
                modified: SystemTime::now(),
                permissions,
                seq,
            },
        );
    }

    /// Create every missing ancestor directory of `path`.
    fn ensure_parents(&mut self, path: &Path) -> io::Result<()> {
        let mut current = PathBuf::new();
        for component in path.parent().into_iter().flat_map(|p| p.components()) {
            current.push(component);
            match self.nodes.get(&current) {
                Some(node) if !node.is_dir() => {
                    return Err(io::Error::new(
                        io::ErrorKind::NotADirectory,
                        format!("not a directory: {}", current.display()),
                    ));
                }
                Some(_) => {}
                None => self.insert(current.clone(), None),
            }
        }
        Ok(())
    }
}

/// In-memory filesystem.
///
/// Thread-safe via internal `RwLock`. All data is lost when dropped.
#[derive(Debug)]
pub struct MemoryFs {
    tree: RwLock<Tree>,
}

impl Default for MemoryFs {
    fn default() -> Self {
        Self::new()
    }
}

fn not_found(path: &Path) -> io::Error {
    io::Error::new(
        io::ErrorKind::NotFound,
        format!("not found: {}", path.display()),
    )
}

fn poisoned() -> io::Error {
    io::Error::other("lock poisoned")
}

impl MemoryFs {
    /// Create a new filesystem holding only the root directory.
    pub fn new() -> Self {
        let mut tree = Tree {
            nodes: HashMap::new(),
            next_seq: 0,
        };
        tree.insert(PathBuf::new(), None);
        Self {
            tree: RwLock::new(tree),
        }
    }

    /// Normalize a path: drop the root, resolve `.` and `..` lexically.
    fn normalize(path: &Path) -> PathBuf {
        let mut result = PathBuf::new();
        for component in path.components() {
            match component {
                Component::ParentDir => {
                    result.pop();
                }
                Component::Normal(s) => result.push(s),
                Component::RootDir | Component::CurDir | Component::Prefix(_) => {}
            }
        }
        result
    }

    /// Write a file, creating parent directories as needed.
    pub fn write(&self, path: impl AsRef<Path>, data: &[u8]) -> io::Result<()> {
        let path = path.as_ref();
        let normalized = Self::normalize(path);
        let mut tree = self.tree.write().map_err(|_| poisoned())?;

        if tree.nodes.get(&normalized).is_some_and(Node::is_dir) {
            return Err(io::Error::new(
                io::ErrorKind::IsADirectory,
                format!("is a directory: {}", path.display()),
            ));
        }

        tree.ensure_parents(&normalized)?;
        match tree.nodes.get_mut(&normalized) {
            Some(node) => {
                node.data = Some(data.to_vec());
                node.modified = SystemTime::now();
            }
            None => tree.insert(normalized, Some(data.to_vec())),
        }
        Ok(())
    }

    /// Create a directory and any missing parents.
    pub fn mkdir(&self, path: impl AsRef<Path>) -> io::Result<()> {
        let path = path.as_ref();
        let normalized = Self::normalize(path);
        let mut tree = self.tree.write().map_err(|_| poisoned())?;

        match tree.nodes.get(&normalized) {
            Some(node) if node.is_dir() => Ok(()),
            Some(_) => Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("file exists: {}", path.display()),
            )),
            None => {
                tree.ensure_parents(&normalized)?;
                tree.insert(normalized, None);
                Ok(())
            }
        }
    }

    /// Set the modification time of an existing entry.
    pub fn set_modified(&self, path: impl AsRef<Path>, modified: SystemTime) -> io::Result<()> {
        let path = path.as_ref();
        let mut tree = self.tree.write().map_err(|_| poisoned())?;
        let node = tree
            .nodes
            .get_mut(&Self::normalize(path))
            .ok_or_else(|| not_found(path))?;
        node.modified = modified;
        Ok(())
    }

    /// Set the permission bits of an existing entry.
    ///
    /// A directory without the owner read bit refuses to be listed.
    pub fn set_permissions(&self, path: impl AsRef<Path>, permissions: u32) -> io::Result<()> {
        let path = path.as_ref();
        let mut tree = self.tree.write().map_err(|_| poisoned())?;
        let node = tree
            .nodes
            .get_mut(&Self::normalize(path))
            .ok_or_else(|| not_found(path))?;
        node.permissions = permissions;
        Ok(())
    }

    fn to_entry(name: String, node: &Node) -> DirEntry {
        let entry = match &node.data {
            Some(data) => DirEntry::file(name, data.len() as u64),
            None => DirEntry::directory(name),
        };
        entry
            .with_modified(node.modified)
            .with_permissions(node.permissions)
    }
}

#[async_trait]
impl Filesystem for MemoryFs {
    async fn list(&self, path: &Path) -> io::Result<Vec<DirEntry>> {
        let normalized = Self::normalize(path);
        let tree = self.tree.read().map_err(|_| poisoned())?;

        match tree.nodes.get(&normalized) {
            Some(node) if !node.is_dir() => {
                return Err(io::Error::new(
                    io::ErrorKind::NotADirectory,
                    format!("not a directory: {}", path.display()),
                ));
            }
            Some(node) if node.permissions & 0o400 == 0 => {
                return Err(io::Error::new(
                    io::ErrorKind::PermissionDenied,
                    format!("permission denied: {}", path.display()),
                ));
            }
            Some(_) => {}
            None => return Err(not_found(path)),
        }

        let mut children: Vec<(&PathBuf, &Node)> = tree
            .nodes
            .iter()
            .filter(|(p, _)| !p.as_os_str().is_empty() && p.parent() == Some(normalized.as_path()))
            .collect();
        children.sort_by_key(|(_, node)| node.seq);

        Ok(children
            .into_iter()
            .map(|(p, node)| Self::to_entry(base_name(p), node))
            .collect())
    }

    async fn stat(&self, path: &Path) -> io::Result<DirEntry> {
        let tree = self.tree.read().map_err(|_| poisoned())?;
        let node = tree
            .nodes
            .get(&Self::normalize(path))
            .ok_or_else(|| not_found(path))?;
        Ok(Self::to_entry(base_name(path), node))
    }
}
