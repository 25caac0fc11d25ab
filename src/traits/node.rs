//! The node capability contract required from storage providers.

use std::sync::Arc;

use crate::{FsError, NodeKind, NodeName};

/// Shared handle to a provider node.
///
/// Nodes are cheap path-shaped views into a provider; handles are cloned
/// freely during traversal and returned in match results.
pub type NodeHandle = Arc<dyn Node>;

/// Minimal contract a namespace entry must satisfy for traversal and
/// selection to operate on it, independent of storage medium.
///
/// A parent exclusively owns its children's existence in backing storage;
/// a node's reference to its parent (via [`parent`](Node::parent)) is a
/// non-owning structural lookup only and is never used for lifetime
/// decisions.
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync`. Methods take `&self`;
/// providers use interior mutability for their own state.
///
/// # Object Safety
///
/// This trait is object-safe and is used as [`NodeHandle`]
/// (`Arc<dyn Node>`) throughout the engine.
pub trait Node: Send + Sync {
    /// Structured name of this node: full path, base name, extension.
    fn name(&self) -> NodeName;

    /// Kind of this node as backing storage reports it right now.
    ///
    /// Authoritative only while the node exists; an absent node reports
    /// [`NodeKind::Imaginary`]. No caching contract is implied here —
    /// caching is a provider concern.
    fn kind(&self) -> NodeKind;

    /// Direct children in provider order.
    ///
    /// The order is whatever the provider enumerates (not guaranteed
    /// stable across providers) but must be deterministic within one
    /// provider. An [`NodeKind::Imaginary`] node lists no children.
    ///
    /// # Errors
    ///
    /// - [`FsError::NotAFolder`] if invoked on a file
    /// - [`FsError::Io`] if the backing store cannot be read
    fn children(&self) -> Result<ChildIter, FsError>;

    /// The parent entry, or `None` at the namespace root.
    ///
    /// A structural lookup only; holding the returned handle does not keep
    /// the parent alive in backing storage.
    fn parent(&self) -> Option<NodeHandle>;

    /// Materialize this node as a file, creating missing ancestor folders.
    ///
    /// Idempotent if a file already exists here.
    ///
    /// # Errors
    ///
    /// - [`FsError::AlreadyExists`] if a folder occupies this path
    /// - [`FsError::NotAFolder`] if an ancestor exists as a file
    fn create_file(&self) -> Result<(), FsError>;

    /// Materialize this node as a folder, creating missing ancestor folders.
    ///
    /// Idempotent if a folder already exists here.
    ///
    /// # Errors
    ///
    /// - [`FsError::AlreadyExists`] if a file occupies this path
    /// - [`FsError::NotAFolder`] if an ancestor exists as a file
    fn create_folder(&self) -> Result<(), FsError>;

    /// Remove this node from backing storage.
    ///
    /// Returns `Ok(true)` if the node existed and was removed, `Ok(false)`
    /// if it was already absent (a no-op success — required so that
    /// repeated bulk deletes over partial trees succeed).
    ///
    /// # Errors
    ///
    /// - [`FsError::FolderNotEmpty`] if this is a folder with children and
    ///   the provider requires empty folders
    /// - [`FsError::PermissionDenied`] / [`FsError::Io`] if storage denies
    ///   the operation
    fn delete(&self) -> Result<bool, FsError>;
}

/// Iterator over a node's direct children.
///
/// Wraps a boxed iterator for flexibility across providers.
///
/// - Outer `Result` (from [`Node::children`]) = "can this node be listed?"
/// - Inner `Result` (per item) = "can this child be produced?"
pub struct ChildIter(Box<dyn Iterator<Item = Result<NodeHandle, FsError>> + Send + 'static>);

impl ChildIter {
    /// Create from any compatible iterator.
    pub fn new<I>(iter: I) -> Self
    where
        I: Iterator<Item = Result<NodeHandle, FsError>> + Send + 'static,
    {
        Self(Box::new(iter))
    }

    /// Create from a pre-collected vector.
    pub fn from_vec(children: Vec<Result<NodeHandle, FsError>>) -> Self {
        Self(Box::new(children.into_iter()))
    }

    /// Create an iterator over no children.
    pub fn empty() -> Self {
        Self::from_vec(Vec::new())
    }

    /// Collect all children, short-circuiting on the first error.
    pub fn collect_all(self) -> Result<Vec<NodeHandle>, FsError> {
        self.collect()
    }
}

impl Iterator for ChildIter {
    type Item = Result<NodeHandle, FsError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }
}

impl std::fmt::Debug for ChildIter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChildIter").finish_non_exhaustive()
    }
}

impl std::fmt::Debug for dyn Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Node")
            .field("name", &self.name())
            .field("kind", &self.kind())
            .finish()
    }
}
