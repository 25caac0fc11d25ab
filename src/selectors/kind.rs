//! Kind-filtering selectors.

use crate::{NodeKind, SelectContext, Selector};

/// Selects files only. Traversal is unrestricted — folders are walked
/// through, just never included.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilesSelector;

impl Selector for FilesSelector {
    fn include(&self, ctx: &SelectContext<'_>) -> bool {
        ctx.node().kind() == NodeKind::File
    }

    fn descend(&self, _ctx: &SelectContext<'_>) -> bool {
        true
    }
}

/// Selects folders only. Traversal is unrestricted.
#[derive(Debug, Clone, Copy, Default)]
pub struct FoldersSelector;

impl Selector for FoldersSelector {
    fn include(&self, ctx: &SelectContext<'_>) -> bool {
        ctx.node().kind() == NodeKind::Folder
    }

    fn descend(&self, _ctx: &SelectContext<'_>) -> bool {
        true
    }
}
