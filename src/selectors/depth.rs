//! Depth-bounded selection.

use crate::{NodeKind, SelectContext, Selector};

/// Selects nodes whose depth below the traversal root lies in an inclusive
/// range.
///
/// Direct children of the root are at depth 1. Descent stops once no
/// deeper node could still fall inside the range, so a wide tree is not
/// walked past `max` for nothing.
///
/// # Examples
///
/// ```rust
/// use anyfs_select::DepthSelector;
///
/// // Direct children only.
/// let children = DepthSelector::new(1, 1);
/// // Anything up to three levels down.
/// let shallow = DepthSelector::at_most(3);
/// # let _ = (children, shallow);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DepthSelector {
    min: usize,
    max: usize,
}

impl DepthSelector {
    /// Select nodes with `min <= depth <= max`.
    pub fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    /// Select nodes no deeper than `max`.
    pub fn at_most(max: usize) -> Self {
        Self::new(1, max)
    }

    /// Lower bound of the selected range.
    pub fn min_depth(&self) -> usize {
        self.min
    }

    /// Upper bound of the selected range.
    pub fn max_depth(&self) -> usize {
        self.max
    }
}

impl Selector for DepthSelector {
    fn include(&self, ctx: &SelectContext<'_>) -> bool {
        (self.min..=self.max).contains(&ctx.depth())
    }

    fn descend(&self, ctx: &SelectContext<'_>) -> bool {
        ctx.node().kind() == NodeKind::Folder && ctx.depth() < self.max
    }
}
