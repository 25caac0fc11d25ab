//! Extension-based file selection.

use std::collections::HashSet;

use crate::{NodeKind, SelectContext, Selector};

/// Selects files whose extension is a member of a configured set.
///
/// Comparison is a case-sensitive exact match against the stored strings
/// (no leading separator): `"htm"` and `"HTM"` are distinct entries unless
/// the caller normalizes them. Folders are never included, but traversal
/// descends unconditionally so files nested in subfolders are reachable.
///
/// An empty set selects nothing. An absent configuration
/// ([`from_optional`](ExtensionSelector::from_optional) with `None`)
/// normalizes to the empty set — zero matches, not "match all" and not an
/// error.
///
/// The set is fixed at construction; selectors are not mutated
/// mid-traversal.
///
/// # Examples
///
/// ```rust
/// use anyfs_select::ExtensionSelector;
///
/// let html = ExtensionSelector::new(["htm", "html", "xhtml"]);
/// assert_eq!(html.len(), 3);
///
/// let nothing = ExtensionSelector::from_optional(None::<Vec<String>>);
/// assert!(nothing.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ExtensionSelector {
    extensions: HashSet<String>,
}

impl ExtensionSelector {
    /// Build from any collection of extension strings.
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            extensions: extensions.into_iter().map(Into::into).collect(),
        }
    }

    /// Build from a single extension string.
    pub fn single(extension: impl Into<String>) -> Self {
        Self::new([extension.into()])
    }

    /// Build from an optional collection; `None` yields the empty set.
    pub fn from_optional<I, S>(extensions: Option<I>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        match extensions {
            Some(extensions) => Self::new(extensions),
            None => Self::default(),
        }
    }

    /// Number of configured extensions.
    pub fn len(&self) -> usize {
        self.extensions.len()
    }

    /// Returns `true` if no extensions are configured (selects nothing).
    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }

    /// Returns `true` if `extension` is a configured member.
    pub fn contains(&self, extension: &str) -> bool {
        self.extensions.contains(extension)
    }
}

impl<S: Into<String>> FromIterator<S> for ExtensionSelector {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl Selector for ExtensionSelector {
    fn include(&self, ctx: &SelectContext<'_>) -> bool {
        ctx.node().kind() == NodeKind::File
            && self.extensions.contains(ctx.node().name().extension())
    }

    fn descend(&self, _ctx: &SelectContext<'_>) -> bool {
        true
    }
}
