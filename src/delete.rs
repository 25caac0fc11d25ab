//! Bulk deletion driven by the same selection mechanism as [`find`].

use tracing::{debug, warn};

use crate::types::{DeleteFailure, DeleteReport};
use crate::walk::{FindOptions, find_with};
use crate::{FsError, NodeHandle, SelectContext, Selector};

/// Delete every node under `root` that the selector includes, children
/// before parents, and return a [`DeleteReport`].
///
/// Matches are gathered with the traversal engine and then deleted in
/// reverse visit order, so a folder is always emptied before its own
/// deletion is attempted — required on providers that refuse to remove
/// non-empty folders. After the descendants, the root itself is tested
/// against the selector (at depth 0) and deleted last when included:
/// `delete_tree(root, &SELECT_ALL)` removes the subtree *and* the root.
///
/// Nodes the selector excludes are never deleted directly; an excluded
/// folder whose children were all deleted is left standing, possibly now
/// empty.
///
/// The operation is best-effort: a failed deletion is recorded and the
/// remaining targets are still attempted. It is also idempotent — deleting
/// an already-absent node is a no-op success, so running the same call
/// twice succeeds the second time with [`DeleteReport::deleted`] of zero.
///
/// # Errors
///
/// - [`FsError::PartialDelete`] if one or more deletions failed; carries
///   the full report listing every failed node and its cause
/// - [`FsError::Traversal`] if the match-gathering walk itself fails
///   (nothing is deleted in that case)
///
/// # Examples
///
/// ```rust
/// use anyfs_select::{delete_tree, find, RamFs, SELECT_ALL};
///
/// let fs = RamFs::new();
/// fs.node("/tmp/a.txt").create_file().unwrap();
/// fs.node("/tmp/sub/b.txt").create_file().unwrap();
///
/// let scratch = fs.node("/tmp");
/// let report = delete_tree(&scratch, &SELECT_ALL).unwrap();
/// assert_eq!(report.deleted, 4); // a.txt, sub/b.txt, sub, /tmp
/// assert!(find(&scratch, &SELECT_ALL).unwrap().is_empty());
/// ```
pub fn delete_tree(root: &NodeHandle, selector: &dyn Selector) -> Result<DeleteReport, FsError> {
    delete_tree_with(root, selector, &FindOptions::default())
}

/// [`delete_tree`] with explicit [`FindOptions`] for the match-gathering
/// walk (depth bound, cancellation).
///
/// # Errors
///
/// As [`delete_tree`], plus [`FsError::Cancelled`] and
/// [`FsError::CycleDetected`] from the walk.
pub fn delete_tree_with(
    root: &NodeHandle,
    selector: &dyn Selector,
    options: &FindOptions,
) -> Result<DeleteReport, FsError> {
    // Pre-order from the walk; reversed, every descendant precedes its
    // ancestor, which is exactly the order deletion needs.
    let mut targets = find_with(root, selector, options)?;
    targets.reverse();

    let root_selected = {
        let ancestors: &[String] = &[];
        let ctx = SelectContext::new(root, root, 0, ancestors);
        selector.include(&ctx)
    };
    if root_selected {
        targets.push(root.clone());
    }

    debug!(root = %root.name(), targets = targets.len(), "deleting selected nodes");

    let mut deleted = 0;
    let mut failures = Vec::new();
    for node in targets {
        match node.delete() {
            Ok(true) => deleted += 1,
            Ok(false) => {} // already absent
            Err(source) => {
                let path = node.name().path().to_string();
                warn!(path = %path, error = %source, "delete failed");
                failures.push(DeleteFailure { path, source });
            }
        }
    }

    debug!(deleted, failed = failures.len(), "delete complete");
    let report = DeleteReport { deleted, failures };
    if report.is_complete() {
        Ok(report)
    } else {
        Err(FsError::PartialDelete { report })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selectors::{ExtensionSelector, SELECT_ALL};
    use crate::walk::find;
    use crate::RamFs;

    fn populated() -> RamFs {
        let fs = RamFs::new();
        fs.node("/base/a.htm").create_file().unwrap();
        fs.node("/base/a.html").create_file().unwrap();
        fs.node("/base/sub/b.htm").create_file().unwrap();
        fs.node("/base/sub/keep.txt").create_file().unwrap();
        fs
    }

    #[test]
    fn deletes_subtree_and_root() {
        let fs = populated();
        let base = fs.node("/base");
        let report = delete_tree(&base, &SELECT_ALL).unwrap();
        // 4 files + /base/sub + /base itself
        assert_eq!(report.deleted, 6);
        assert!(report.is_complete());
        assert!(!fs.node("/base").kind().exists());
        assert!(!fs.node("/base/sub/b.htm").kind().exists());
    }

    #[test]
    fn second_delete_is_a_noop() {
        let fs = populated();
        let base = fs.node("/base");
        delete_tree(&base, &SELECT_ALL).unwrap();
        let again = delete_tree(&base, &SELECT_ALL).unwrap();
        assert_eq!(again.deleted, 0);
        assert!(again.is_complete());
    }

    #[test]
    fn selective_delete_leaves_unselected_standing() {
        let fs = populated();
        let base = fs.node("/base");
        let htm_only = ExtensionSelector::single("htm");
        let report = delete_tree(&base, &htm_only).unwrap();
        assert_eq!(report.deleted, 2); // a.htm, sub/b.htm

        // Unselected nodes survive, including the now-emptier folder.
        assert!(fs.node("/base").kind().is_folder());
        assert!(fs.node("/base/sub").kind().is_folder());
        assert!(fs.node("/base/a.html").kind().is_file());
        assert!(fs.node("/base/sub/keep.txt").kind().is_file());
        assert!(!fs.node("/base/a.htm").kind().exists());
    }

    #[test]
    fn delete_then_find_is_empty() {
        let fs = populated();
        let base = fs.node("/base");
        delete_tree(&base, &SELECT_ALL).unwrap();
        assert!(find(&base, &SELECT_ALL).unwrap().is_empty());
    }

    #[test]
    fn unselected_root_survives_full_child_deletion() {
        /// Everything except the traversal root.
        struct ChildrenOnly;

        impl Selector for ChildrenOnly {
            fn include(&self, ctx: &SelectContext<'_>) -> bool {
                ctx.depth() > 0
            }

            fn descend(&self, _ctx: &SelectContext<'_>) -> bool {
                true
            }
        }

        let fs = populated();
        let base = fs.node("/base");
        let report = delete_tree(&base, &ChildrenOnly).unwrap();
        assert_eq!(report.deleted, 5);
        assert!(fs.node("/base").kind().is_folder());
        assert!(find(&base, &SELECT_ALL).unwrap().is_empty());
    }
}
