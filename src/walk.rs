//! Depth-first traversal over provider nodes, driven by a selector.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, trace};

use crate::{FsError, NodeHandle, NodeKind, SelectContext, Selector};

/// Default recursion bound for [`FindOptions::max_depth`].
///
/// Deep enough for any realistic namespace; a provider that leads the walk
/// past it is assumed to have introduced a cycle.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Cooperative cancellation flag for a running traversal.
///
/// Cheap to clone and share across threads; the engine checks it at every
/// node visit and aborts with [`FsError::Cancelled`] once set.
///
/// # Examples
///
/// ```rust
/// use anyfs_select::CancelToken;
///
/// let token = CancelToken::new();
/// let handle = token.clone();
/// assert!(!token.is_cancelled());
/// handle.cancel();
/// assert!(token.is_cancelled());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// Create a token in the not-cancelled state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Idempotent.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Returns `true` once [`cancel`](CancelToken::cancel) has been called.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Options controlling a traversal.
#[derive(Debug, Clone)]
pub struct FindOptions {
    /// Recursion bound; exceeding it fails with [`FsError::CycleDetected`].
    pub max_depth: usize,
    /// Cancellation signal checked at every node visit.
    pub cancel: Option<CancelToken>,
}

impl Default for FindOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            cancel: None,
        }
    }
}

/// Walk the descendants of `root` depth-first and return the nodes the
/// selector includes, in pre-order.
///
/// The root itself is never a candidate — this answers "find entries under
/// this folder," not "test this folder." Children are visited in provider
/// order; an included folder precedes its descendants' matches in the
/// result. The selector's descend decision is evaluated once per node,
/// independent of inclusion, and a `false` prunes that node's whole
/// subtree. A root that is a file (or does not exist) has no descendants
/// and yields an empty result.
///
/// The call is all-or-nothing: on any failure the partial result is
/// discarded.
///
/// # Errors
///
/// - [`FsError::Traversal`] if a provider fails to enumerate children
/// - [`FsError::CycleDetected`] — never for tree-shaped providers; guards
///   against cyclic ones via the default depth bound
///
/// # Examples
///
/// ```rust
/// use anyfs_select::{find, Provider, RamFs, SELECT_FILES};
///
/// let fs = RamFs::new();
/// fs.node("/srv/a.txt").create_file().unwrap();
/// fs.node("/srv/sub/b.txt").create_file().unwrap();
///
/// let files = find(&fs.root(), &SELECT_FILES).unwrap();
/// assert_eq!(files.len(), 2);
/// ```
pub fn find(root: &NodeHandle, selector: &dyn Selector) -> Result<Vec<NodeHandle>, FsError> {
    find_with(root, selector, &FindOptions::default())
}

/// [`find`] with explicit [`FindOptions`] (depth bound, cancellation).
///
/// # Errors
///
/// As [`find`], plus [`FsError::Cancelled`] if the options carry a token
/// that is cancelled mid-walk, and [`FsError::CycleDetected`] against the
/// configured `max_depth`.
pub fn find_with(
    root: &NodeHandle,
    selector: &dyn Selector,
    options: &FindOptions,
) -> Result<Vec<NodeHandle>, FsError> {
    let mut matches = Vec::new();
    let mut ancestors = vec![root.name().base().to_string()];
    visit_children(root, root, selector, options, 0, &mut ancestors, &mut matches)?;
    debug!(root = %root.name(), matched = matches.len(), "traversal complete");
    Ok(matches)
}

/// Visit the children of `parent` (which sits at `depth`), recursing where
/// the selector allows.
fn visit_children(
    parent: &NodeHandle,
    root: &NodeHandle,
    selector: &dyn Selector,
    options: &FindOptions,
    depth: usize,
    ancestors: &mut Vec<String>,
    matches: &mut Vec<NodeHandle>,
) -> Result<(), FsError> {
    if let Some(token) = &options.cancel {
        if token.is_cancelled() {
            return Err(FsError::Cancelled {
                path: parent.name().path().to_string(),
            });
        }
    }

    // Only folders can be listed; files and imaginary nodes have nothing
    // to enumerate.
    if parent.kind() != NodeKind::Folder {
        return Ok(());
    }

    if depth >= options.max_depth {
        return Err(FsError::CycleDetected {
            path: parent.name().path().to_string(),
            depth,
        });
    }

    let children = parent
        .children()
        .map_err(|source| traversal_error(parent, source))?;

    for child in children {
        let child = child.map_err(|source| traversal_error(parent, source))?;

        let (included, descend) = {
            let ctx = SelectContext::new(&child, root, depth + 1, ancestors);
            (selector.include(&ctx), selector.descend(&ctx))
        };
        trace!(path = %child.name(), depth = depth + 1, included, descend, "visit");

        if included {
            matches.push(child.clone());
        }

        if descend && child.kind() == NodeKind::Folder {
            ancestors.push(child.name().base().to_string());
            visit_children(&child, root, selector, options, depth + 1, ancestors, matches)?;
            ancestors.pop();
        }
    }

    Ok(())
}

fn traversal_error(parent: &NodeHandle, source: FsError) -> FsError {
    FsError::Traversal {
        path: parent.name().path().to_string(),
        source: Box::new(source),
    }
}
