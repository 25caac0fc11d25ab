//! RAM-backed storage provider.
//!
//! The reference provider for tests and examples: a path-keyed store held
//! entirely in memory. Entries track existence and kind only — content is
//! a concern of richer providers.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::registry::Provider;
use crate::traits::{ChildIter, Node, NodeHandle};
use crate::{FsError, NodeKind, NodeName};

/// What occupies a path in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryKind {
    File,
    Folder,
}

#[derive(Debug)]
struct RamState {
    // BTreeMap keeps children in name order, so enumeration is
    // deterministic.
    entries: RwLock<BTreeMap<String, EntryKind>>,
}

/// In-memory filesystem exposing its entries as [`Node`]s.
///
/// # Thread Safety
///
/// Interior mutability behind an `RwLock`; all node handles share the same
/// store and observe each other's mutations immediately. Safe to use from
/// multiple threads.
///
/// # Examples
///
/// ```rust
/// use anyfs_select::{NodeKind, RamFs};
///
/// let fs = RamFs::new();
/// fs.node("/docs/guide.md").create_file().unwrap();
/// assert_eq!(fs.node("/docs").kind(), NodeKind::Folder);
/// assert_eq!(fs.node("/docs/guide.md").kind(), NodeKind::File);
/// assert_eq!(fs.node("/docs/missing.md").kind(), NodeKind::Imaginary);
/// ```
pub struct RamFs {
    state: Arc<RamState>,
}

impl RamFs {
    /// Create an empty filesystem containing only the root folder `/`.
    pub fn new() -> Self {
        let mut entries = BTreeMap::new();
        entries.insert("/".to_string(), EntryKind::Folder);
        Self {
            state: Arc::new(RamState {
                entries: RwLock::new(entries),
            }),
        }
    }

    /// Handle to the entry at `path`, which need not exist yet.
    ///
    /// The path is normalized (leading `/`, empty segments collapsed);
    /// a non-existent path yields an [`NodeKind::Imaginary`] node that can
    /// be materialized with [`Node::create_file`] / [`Node::create_folder`].
    pub fn node(&self, path: &str) -> NodeHandle {
        RamNode::handle(self.state.clone(), normalize(path))
    }
}

impl Default for RamFs {
    fn default() -> Self {
        Self::new()
    }
}

impl Provider for RamFs {
    fn root(&self) -> NodeHandle {
        self.node("/")
    }

    fn resolve(&self, path: &str) -> Result<NodeHandle, FsError> {
        Ok(self.node(path))
    }
}

/// One path-shaped view into a [`RamFs`] store.
struct RamNode {
    state: Arc<RamState>,
    path: String,
}

impl RamNode {
    fn handle(state: Arc<RamState>, path: String) -> NodeHandle {
        Arc::new(Self { state, path })
    }

    fn create(&self, kind: EntryKind, operation: &'static str) -> Result<(), FsError> {
        let mut entries = self.state.entries.write().unwrap();
        match entries.get(&self.path) {
            Some(existing) if *existing == kind => return Ok(()),
            Some(_) => {
                return Err(FsError::AlreadyExists {
                    path: self.path.clone(),
                    operation,
                });
            }
            None => {}
        }
        for ancestor in ancestors_of(&self.path) {
            match entries.get(&ancestor) {
                Some(EntryKind::Folder) => {}
                Some(EntryKind::File) => return Err(FsError::NotAFolder { path: ancestor }),
                None => {
                    entries.insert(ancestor, EntryKind::Folder);
                }
            }
        }
        entries.insert(self.path.clone(), kind);
        Ok(())
    }
}

impl Node for RamNode {
    fn name(&self) -> NodeName {
        NodeName::new(self.path.clone())
    }

    fn kind(&self) -> NodeKind {
        match self.state.entries.read().unwrap().get(&self.path) {
            Some(EntryKind::File) => NodeKind::File,
            Some(EntryKind::Folder) => NodeKind::Folder,
            None => NodeKind::Imaginary,
        }
    }

    fn children(&self) -> Result<ChildIter, FsError> {
        let entries = self.state.entries.read().unwrap();
        match entries.get(&self.path) {
            Some(EntryKind::File) => Err(FsError::NotAFolder {
                path: self.path.clone(),
            }),
            // A deleted node lists nothing.
            None => Ok(ChildIter::empty()),
            Some(EntryKind::Folder) => {
                let prefix = child_prefix(&self.path);
                let children: Vec<_> = entries
                    .range(prefix.clone()..)
                    .take_while(|(k, _)| k.starts_with(&prefix))
                    .filter(|(k, _)| k.len() > prefix.len() && !k[prefix.len()..].contains('/'))
                    .map(|(k, _)| Ok(RamNode::handle(self.state.clone(), k.clone())))
                    .collect();
                Ok(ChildIter::from_vec(children))
            }
        }
    }

    fn parent(&self) -> Option<NodeHandle> {
        if self.path == "/" {
            return None;
        }
        let parent = match self.path.rfind('/') {
            Some(0) => "/".to_string(),
            Some(idx) => self.path[..idx].to_string(),
            None => return None,
        };
        Some(RamNode::handle(self.state.clone(), parent))
    }

    fn create_file(&self) -> Result<(), FsError> {
        self.create(EntryKind::File, "create_file")
    }

    fn create_folder(&self) -> Result<(), FsError> {
        self.create(EntryKind::Folder, "create_folder")
    }

    fn delete(&self) -> Result<bool, FsError> {
        let mut entries = self.state.entries.write().unwrap();
        match entries.get(&self.path) {
            None => Ok(false),
            Some(EntryKind::Folder) => {
                let prefix = child_prefix(&self.path);
                let occupied = entries
                    .range(prefix.clone()..)
                    .take_while(|(k, _)| k.starts_with(&prefix))
                    .any(|(k, _)| k.len() > prefix.len());
                if occupied {
                    return Err(FsError::FolderNotEmpty {
                        path: self.path.clone(),
                    });
                }
                entries.remove(&self.path);
                Ok(true)
            }
            Some(EntryKind::File) => {
                entries.remove(&self.path);
                Ok(true)
            }
        }
    }
}

/// Prefix every child key of `path` starts with.
fn child_prefix(path: &str) -> String {
    if path == "/" {
        "/".to_string()
    } else {
        format!("{path}/")
    }
}

/// Ancestor paths of `path` from the root downwards, excluding `path`.
fn ancestors_of(path: &str) -> Vec<String> {
    if path == "/" {
        return Vec::new();
    }
    let mut out = vec!["/".to_string()];
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    let mut current = String::new();
    for segment in &segments[..segments.len() - 1] {
        current.push('/');
        current.push_str(segment);
        out.push(current.clone());
    }
    out
}

/// Collapse a path to the canonical store key: leading `/`, single
/// separators, no trailing `/`.
fn normalize(path: &str) -> String {
    let mut out = String::from("/");
    for segment in path.split('/').filter(|s| !s.is_empty()) {
        if out.len() > 1 {
            out.push('/');
        }
        out.push_str(segment);
    }
    out
}
