//! Select everything.

use crate::{SelectContext, Selector};

/// Selects every visited node and descends unconditionally.
///
/// The usual companion of [`delete_tree`](crate::delete_tree): selecting
/// everything under (and including) the root deletes the whole subtree.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllSelector;

impl Selector for AllSelector {
    fn include(&self, _ctx: &SelectContext<'_>) -> bool {
        true
    }

    fn descend(&self, _ctx: &SelectContext<'_>) -> bool {
        true
    }
}
