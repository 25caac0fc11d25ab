//! # Extension Traits
//!
//! Convenience methods layered over the core contracts.
//!
//! | Method | On | Description |
//! |--------|----|-------------|
//! | [`is_file`](NodeExt::is_file) | any [`Node`] | Kind check |
//! | [`is_folder`](NodeExt::is_folder) | any [`Node`] | Kind check |
//! | [`exists`](NodeExt::exists) | any [`Node`] | Backed by storage right now? |
//! | [`find_matching`](SearchExt::find_matching) | [`NodeHandle`] | Run a selector-driven search from here |
//! | [`delete_matching`](SearchExt::delete_matching) | [`NodeHandle`] | Bulk-delete what a selector matches |
//!
//! Everything here has a default or blanket implementation — providers
//! and callers get these for free.

use crate::types::DeleteReport;
use crate::walk::FindOptions;
use crate::{FsError, Node, NodeHandle, NodeKind, Selector};

/// Kind helpers available on every node.
///
/// # Example
///
/// ```rust
/// use anyfs_select::{NodeExt, RamFs};
///
/// let fs = RamFs::new();
/// fs.node("/notes.txt").create_file().unwrap();
///
/// assert!(fs.node("/notes.txt").is_file());
/// assert!(!fs.node("/notes.txt").is_folder());
/// assert!(!fs.node("/elsewhere").exists());
/// ```
pub trait NodeExt: Node {
    /// Returns `true` if this node currently exists as a file.
    fn is_file(&self) -> bool {
        self.kind() == NodeKind::File
    }

    /// Returns `true` if this node currently exists as a folder.
    fn is_folder(&self) -> bool {
        self.kind() == NodeKind::Folder
    }

    /// Returns `true` if this node exists in backing storage at all.
    fn exists(&self) -> bool {
        self.kind() != NodeKind::Imaginary
    }
}

// Blanket implementation - every node gets the helpers, trait objects included
impl<T: Node + ?Sized> NodeExt for T {}

/// Search and bulk-delete entry points in method position.
///
/// Thin sugar over [`find`](crate::find) and
/// [`delete_tree`](crate::delete_tree) for call sites that read better
/// as `root.find_matching(&selector)` than as a free function.
pub trait SearchExt {
    /// Find descendants matching `selector`. See [`find`](crate::find).
    ///
    /// # Errors
    ///
    /// As [`find`](crate::find).
    fn find_matching(&self, selector: &dyn Selector) -> Result<Vec<NodeHandle>, FsError>;

    /// [`find_matching`](SearchExt::find_matching) with explicit options.
    ///
    /// # Errors
    ///
    /// As [`find_with`](crate::find_with).
    fn find_matching_with(
        &self,
        selector: &dyn Selector,
        options: &FindOptions,
    ) -> Result<Vec<NodeHandle>, FsError>;

    /// Delete matching nodes under (and including) this one. See
    /// [`delete_tree`](crate::delete_tree).
    ///
    /// # Errors
    ///
    /// As [`delete_tree`](crate::delete_tree).
    fn delete_matching(&self, selector: &dyn Selector) -> Result<DeleteReport, FsError>;
}

impl SearchExt for NodeHandle {
    fn find_matching(&self, selector: &dyn Selector) -> Result<Vec<NodeHandle>, FsError> {
        crate::walk::find(self, selector)
    }

    fn find_matching_with(
        &self,
        selector: &dyn Selector,
        options: &FindOptions,
    ) -> Result<Vec<NodeHandle>, FsError> {
        crate::walk::find_with(self, selector, options)
    }

    fn delete_matching(&self, selector: &dyn Selector) -> Result<DeleteReport, FsError> {
        crate::delete::delete_tree(self, selector)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selectors::{SELECT_ALL, SELECT_FILES};
    use crate::{Provider, RamFs};

    #[test]
    fn kind_helpers() {
        let fs = RamFs::new();
        fs.node("/f.txt").create_file().unwrap();
        fs.node("/d").create_folder().unwrap();

        assert!(fs.node("/f.txt").is_file());
        assert!(fs.node("/d").is_folder());
        assert!(fs.node("/f.txt").exists());
        assert!(!fs.node("/nope").exists());
    }

    #[test]
    fn kind_helpers_work_on_trait_objects() {
        let fs = RamFs::new();
        fs.node("/f.txt").create_file().unwrap();
        let node: NodeHandle = fs.node("/f.txt");
        // NodeExt methods resolve through the dyn Node inside the handle.
        assert!(node.is_file());
    }

    #[test]
    fn find_matching_delegates() {
        let fs = RamFs::new();
        fs.node("/a/x.rs").create_file().unwrap();
        fs.node("/a/y.rs").create_file().unwrap();

        let root = fs.root();
        let found = root.find_matching(&SELECT_FILES).unwrap();
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn delete_matching_delegates() {
        let fs = RamFs::new();
        fs.node("/a/x.rs").create_file().unwrap();

        let target = fs.node("/a");
        let report = target.delete_matching(&SELECT_ALL).unwrap();
        assert_eq!(report.deleted, 2);
        assert!(!fs.node("/a").exists());
    }
}
