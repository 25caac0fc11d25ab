//! The pluggable selection protocol driving traversal.

use crate::{NodeHandle, NodeKind};

/// Per-visit context handed to a [`Selector`].
///
/// Constructed fresh for every visited node and discarded after the
/// selector call returns; selectors must not retain references into it.
pub struct SelectContext<'a> {
    node: &'a NodeHandle,
    root: &'a NodeHandle,
    depth: usize,
    ancestors: &'a [String],
}

impl<'a> SelectContext<'a> {
    /// Build a context for one node visit.
    ///
    /// `depth` is 0 at the traversal root; `ancestors` holds the base names
    /// from the root down to (excluding) the candidate.
    pub fn new(
        node: &'a NodeHandle,
        root: &'a NodeHandle,
        depth: usize,
        ancestors: &'a [String],
    ) -> Self {
        Self {
            node,
            root,
            depth,
            ancestors,
        }
    }

    /// The candidate node being visited.
    #[inline]
    pub fn node(&self) -> &NodeHandle {
        self.node
    }

    /// The root node the traversal started from.
    #[inline]
    pub fn root(&self) -> &NodeHandle {
        self.root
    }

    /// Depth of the candidate below the root (root itself is 0, its direct
    /// children are 1).
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Base names of the candidate's ancestors, from the root downwards.
    #[inline]
    pub fn ancestors(&self) -> &[String] {
        self.ancestors
    }
}

/// Decides, per visited node, whether to include it in the result and
/// whether to walk into its children.
///
/// The two decisions are deliberately independent: a selector may recurse
/// through folders it excludes from the result (search inside hidden
/// folders without reporting them), or include a folder while refusing to
/// descend (treat a matched folder as a leaf).
///
/// Implementations must behave as pure functions of the context — the
/// engine assumes no side effects, though logging is fine.
///
/// # Example
///
/// ```rust
/// use anyfs_select::{SelectContext, Selector};
///
/// /// Matches entries whose base name starts with a prefix.
/// struct PrefixSelector {
///     prefix: String,
/// }
///
/// impl Selector for PrefixSelector {
///     fn include(&self, ctx: &SelectContext<'_>) -> bool {
///         ctx.node().name().base().starts_with(&self.prefix)
///     }
/// }
/// ```
pub trait Selector: Send + Sync {
    /// Whether the candidate belongs in the result set.
    fn include(&self, ctx: &SelectContext<'_>) -> bool;

    /// Whether the engine should visit the candidate's children.
    ///
    /// Defaults to `true` for folders and `false` otherwise. A `false`
    /// answer prunes the candidate's entire subtree, regardless of what
    /// its descendants would have matched.
    fn descend(&self, ctx: &SelectContext<'_>) -> bool {
        ctx.node().kind() == NodeKind::Folder
    }
}
