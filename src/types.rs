//! Core types for the traversal and selection engine.

use std::fmt;

use crate::error::FsError;

/// Kind of a namespace entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeKind {
    /// Regular file.
    File,
    /// Folder that may contain children.
    Folder,
    /// Does not exist in backing storage (yet, or any more).
    Imaginary,
}

impl NodeKind {
    /// Returns `true` if this is [`NodeKind::File`].
    #[inline]
    pub fn is_file(self) -> bool {
        self == NodeKind::File
    }

    /// Returns `true` if this is [`NodeKind::Folder`].
    #[inline]
    pub fn is_folder(self) -> bool {
        self == NodeKind::Folder
    }

    /// Returns `true` if the entry exists in backing storage.
    #[inline]
    pub fn exists(self) -> bool {
        self != NodeKind::Imaginary
    }
}

/// Structured name of a namespace entry.
///
/// Wraps the full path from the namespace root (`/`-separated, leading `/`)
/// and derives the base name and extension from it on demand.
///
/// # Examples
///
/// ```rust
/// use anyfs_select::NodeName;
///
/// let name = NodeName::new("/reports/2024/summary.html");
/// assert_eq!(name.path(), "/reports/2024/summary.html");
/// assert_eq!(name.base(), "summary.html");
/// assert_eq!(name.extension(), "html");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeName {
    path: String,
}

impl NodeName {
    /// Create a name from a full path.
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// Full path from the namespace root.
    #[inline]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Base name: the final path segment. Empty for the namespace root.
    pub fn base(&self) -> &str {
        match self.path.rfind('/') {
            Some(idx) => &self.path[idx + 1..],
            None => &self.path,
        }
    }

    /// Extension: the substring after the last `.` of the base name.
    ///
    /// Empty if the base name contains no `.`. No leading separator is
    /// included: `"summary.html"` yields `"html"`.
    pub fn extension(&self) -> &str {
        let base = self.base();
        match base.rfind('.') {
            Some(idx) => &base[idx + 1..],
            None => "",
        }
    }

    /// Path of the parent entry, or `None` at the namespace root.
    pub fn parent_path(&self) -> Option<&str> {
        if self.path == "/" {
            return None;
        }
        match self.path.rfind('/') {
            Some(0) => Some("/"),
            Some(idx) => Some(&self.path[..idx]),
            None => None,
        }
    }
}

impl fmt::Display for NodeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

/// Outcome of a [`delete_tree`](crate::delete_tree) call.
///
/// Always produced, whether or not every deletion succeeded; when
/// `failures` is non-empty the report is surfaced inside
/// [`FsError::PartialDelete`] so the incompleteness cannot be missed.
#[derive(Debug)]
pub struct DeleteReport {
    /// Number of nodes actually removed from backing storage.
    ///
    /// Nodes that were already absent (a repeated call, or a provider that
    /// raced another deleter) succeed without counting here.
    pub deleted: usize,
    /// Every node whose deletion was attempted and failed, with the cause.
    pub failures: Vec<DeleteFailure>,
}

impl DeleteReport {
    /// Returns `true` if every attempted deletion succeeded.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// A single failed deletion inside a [`DeleteReport`].
#[derive(Debug)]
pub struct DeleteFailure {
    /// Path of the node that could not be deleted.
    pub path: String,
    /// The provider error that caused the failure.
    pub source: FsError,
}
