//! Error types for the traversal and selection engine.

use crate::types::DeleteReport;

/// Error type covering traversal, selection, and provider node operations.
///
/// Engine-generated variants ([`Traversal`](FsError::Traversal),
/// [`CycleDetected`](FsError::CycleDetected), [`Cancelled`](FsError::Cancelled),
/// [`PartialDelete`](FsError::PartialDelete)) identify which node triggered the
/// failure. Provider-level variants ([`NotAFolder`](FsError::NotAFolder),
/// [`AlreadyExists`](FsError::AlreadyExists), [`FolderNotEmpty`](FsError::FolderNotEmpty),
/// [`PermissionDenied`](FsError::PermissionDenied), [`Io`](FsError::Io)) are
/// produced by [`Node`](crate::Node) implementations and passed through
/// unchanged. Uses `#[non_exhaustive]` for forward compatibility.
///
/// # Examples
///
/// ```rust
/// use anyfs_select::FsError;
///
/// let err = FsError::NotAFolder { path: "/data/readme.txt".into() };
/// assert!(err.to_string().contains("/data/readme.txt"));
/// ```
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum FsError {
    // Engine errors
    /// A provider failure was encountered mid-walk; the call is aborted and
    /// any partial results are discarded.
    #[error("traversal failed at {path}: {source}")]
    Traversal {
        /// The node whose children could not be enumerated.
        path: String,
        /// The underlying provider failure.
        #[source]
        source: Box<FsError>,
    },

    /// The recursion depth bound was exceeded, indicating a provider that
    /// violates the tree-shaped namespace contract.
    #[error("cycle detected at {path} (depth {depth})")]
    CycleDetected {
        /// The node at which the bound was hit.
        path: String,
        /// The depth reached when the walk was abandoned.
        depth: usize,
    },

    /// The caller requested an abort via a [`CancelToken`](crate::CancelToken).
    #[error("traversal cancelled at {path}")]
    Cancelled {
        /// The node being visited when cancellation was observed.
        path: String,
    },

    /// One or more deletions failed during [`delete_tree`](crate::delete_tree).
    ///
    /// Carries the full report: nodes not listed in
    /// [`DeleteReport::failures`] were deleted or were never selected.
    #[error("delete left {} node(s) undeleted ({} deleted)", report.failures.len(), report.deleted)]
    PartialDelete {
        /// Count of successful deletions plus every failure with its cause.
        report: DeleteReport,
    },

    // Provider node errors
    /// `children()` was invoked on a file.
    #[error("not a folder: {path}")]
    NotAFolder {
        /// The path that is not a folder.
        path: String,
    },

    /// A create operation conflicts with an existing node of a different kind.
    #[error("{operation}: already exists: {path}")]
    AlreadyExists {
        /// The path that already exists.
        path: String,
        /// The operation that failed.
        operation: &'static str,
    },

    /// A folder with children was deleted on a provider that requires
    /// folders to be empty.
    #[error("folder not empty: {path}")]
    FolderNotEmpty {
        /// The path to the non-empty folder.
        path: String,
    },

    /// Permission denied by the backing store.
    #[error("{operation}: permission denied: {path}")]
    PermissionDenied {
        /// The path where permission was denied.
        path: String,
        /// The operation that was denied.
        operation: &'static str,
    },

    /// I/O error from the backing store, with context.
    #[error("{operation} failed for {path}: {source}")]
    Io {
        /// The operation that failed.
        operation: &'static str,
        /// The path involved in the operation.
        path: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    // Registry errors
    /// No provider is registered for the requested scheme.
    #[error("no provider registered for scheme: {scheme}")]
    UnknownScheme {
        /// The scheme that could not be resolved.
        scheme: String,
    },

    /// The URI is not of the form `scheme://path`.
    #[error("invalid uri: {uri}")]
    InvalidUri {
        /// The malformed URI.
        uri: String,
    },
}
