//! # anyfs-select
//!
//! Traversal and selection engine for **AnyFS-style pluggable virtual
//! filesystems**.
//!
//! Given a root node in a hierarchical namespace, walk its descendants in
//! a well-defined order, ask a pluggable [`Selector`] whether each
//! candidate belongs in the result and whether its subtree should be
//! entered, and return the matched set. The same mechanism drives bulk
//! structural deletion.
//!
//! Storage is behind the [`Node`] contract: any provider — RAM, local
//! disk, archive, network — that can report a node's kind, list its
//! children, and create/delete entries plugs into the engine unchanged.
//! A RAM-backed provider ([`RamFs`]) ships in-crate as the reference.
//!
//! ---
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use anyfs_select::{
//!     delete_tree, find, ExtensionSelector, RamFs, SchemeRegistry, SELECT_ALL, SELECT_FILES,
//! };
//!
//! // Wire a provider into an explicit registry (no global state).
//! let registry = SchemeRegistry::new();
//! registry.register("ram", Arc::new(RamFs::new())).unwrap();
//!
//! // Populate a corner of the namespace.
//! let base = registry.resolve("ram://reports").unwrap();
//! for name in ["q1.html", "q2.html", "raw/q1.csv"] {
//!     registry
//!         .resolve(&format!("ram://reports/{name}"))
//!         .unwrap()
//!         .create_file()
//!         .unwrap();
//! }
//!
//! // Find by extension, anywhere below the base folder.
//! let html = find(&base, &ExtensionSelector::single("html")).unwrap();
//! assert_eq!(html.len(), 2);
//!
//! // Files of any kind.
//! let files = find(&base, &SELECT_FILES).unwrap();
//! assert_eq!(files.len(), 3);
//!
//! // Delete the whole subtree, children before parents.
//! let report = delete_tree(&base, &SELECT_ALL).unwrap();
//! assert_eq!(report.deleted, 5); // 3 files + raw/ + reports/
//! ```
//!
//! ---
//!
//! ## Core Types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`Node`] | Contract a provider entry implements — kind, children, create, delete |
//! | [`Selector`] | Per-visit include/descend decisions |
//! | [`SelectContext`] | What a selector sees at each visit: node, root, depth, ancestors |
//! | [`find`] / [`find_with`] | Depth-first pre-order search below a root |
//! | [`delete_tree`] | Selector-driven bulk delete, children before parents |
//! | [`DeleteReport`] | Count deleted + every failure with its cause |
//! | [`FsError`] | Engine and provider error taxonomy |
//! | [`SchemeRegistry`] | Explicit `scheme://path` to provider resolution |
//! | [`RamFs`] | In-memory reference provider |
//!
//! ---
//!
//! ## Selection Model
//!
//! A selector answers two independent questions per visited node:
//! *include this one?* and *enter its children?* Decoupling the two lets
//! a selector search inside folders it excludes from the result, or treat
//! a matched folder as a leaf. The root of a search is never itself a
//! candidate — `find` answers "what is under this folder."
//!
//! Built-ins cover the common cases ([`SELECT_ALL`], [`SELECT_FILES`],
//! [`SELECT_FOLDERS`], [`ExtensionSelector`], [`DepthSelector`]); anything
//! else is a small struct implementing [`Selector`].
//!
//! ---
//!
//! ## Error Handling
//!
//! All operations return `Result<T, FsError>`. `find` is all-or-nothing:
//! the first provider failure (or cycle, or cancellation) aborts the call
//! and partial results are discarded. `delete_tree` is best-effort: it
//! attempts every selected node and reports failures in aggregate through
//! [`FsError::PartialDelete`], which carries the full [`DeleteReport`].
//! No operation retries internally.
//!
//! ---
//!
//! ## Concurrency
//!
//! The engine is synchronous: one traversal runs to completion (or
//! failure) on the calling thread, issuing blocking provider calls. All
//! contracts require `Send + Sync`, so callers are free to run traversals
//! on worker threads; a [`CancelToken`] shared with another thread aborts
//! a walk promptly. The engine takes no locks and does not snapshot the
//! namespace — consistency under concurrent mutation is whatever the
//! provider offers.
//!
//! ---
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | Enable serialization for [`NodeKind`] and [`NodeName`] |

// Private modules
mod delete;
mod error;
mod ext;
mod ram;
mod registry;
mod selectors;
mod traits;
mod types;
mod walk;

// Public re-exports - error type
pub use error::FsError;

// Public re-exports - core types
pub use types::{DeleteFailure, DeleteReport, NodeKind, NodeName};

// Public re-exports - contracts
pub use traits::{ChildIter, Node, NodeHandle, SelectContext, Selector};

// Public re-exports - built-in selectors
pub use selectors::{
    AllSelector, DepthSelector, ExtensionSelector, FilesSelector, FoldersSelector, SELECT_ALL,
    SELECT_FILES, SELECT_FOLDERS,
};

// Public re-exports - traversal engine
pub use walk::{CancelToken, DEFAULT_MAX_DEPTH, FindOptions, find, find_with};

// Public re-exports - delete orchestrator
pub use delete::{delete_tree, delete_tree_with};

// Public re-exports - convenience
pub use ext::{NodeExt, SearchExt};

// Public re-exports - provider wiring
pub use ram::RamFs;
pub use registry::{Provider, SchemeRegistry};
