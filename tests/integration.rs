//! Integration tests exercising the whole engine end-to-end.
//!
//! These tests verify that:
//! 1. Registry resolution, the RAM provider, and the traversal engine
//!    compose into working searches
//! 2. Extension-based selection honors its contract (empty/None
//!    configurations, round-trips over observed extensions, symmetry)
//! 3. Bulk deletion is post-order, selective, idempotent, and reports
//!    partial failure without going silent
//! 4. Selector decisions (include vs descend) compose as designed

use std::collections::HashSet;
use std::sync::Arc;

use anyfs_select::{
    ChildIter, DepthSelector, ExtensionSelector, FsError, Node, NodeExt, NodeHandle, NodeKind,
    NodeName, RamFs, SchemeRegistry, SearchExt, SELECT_ALL, SELECT_FILES, SELECT_FOLDERS,
    delete_tree, find,
};

/// Build the canonical fixture: nine files spread evenly across three
/// extensions, resolved through a registry like any other namespace.
fn selector_fixture() -> (SchemeRegistry, NodeHandle) {
    let registry = SchemeRegistry::new();
    registry.register("ram", Arc::new(RamFs::new())).unwrap();

    for base in ["a", "b", "c"] {
        for ext in ["htm", "html", "xhtml"] {
            registry
                .resolve(&format!("ram://suite/{base}.{ext}"))
                .unwrap()
                .create_file()
                .unwrap();
        }
    }

    let base = registry.resolve("ram://suite").unwrap();
    (registry, base)
}

fn paths(nodes: &[NodeHandle]) -> Vec<String> {
    nodes.iter().map(|n| n.name().path().to_string()).collect()
}

// =============================================================================
// Extension selection
// =============================================================================

#[test]
fn empty_extension_selector_matches_nothing() {
    let (_registry, base) = selector_fixture();

    let empty = ExtensionSelector::default();
    assert!(find(&base, &empty).unwrap().is_empty());

    let from_empty_collection = ExtensionSelector::new(Vec::<String>::new());
    assert!(find(&base, &from_empty_collection).unwrap().is_empty());
}

#[test]
fn absent_configuration_matches_nothing() {
    let (_registry, base) = selector_fixture();

    let from_none = ExtensionSelector::from_optional(None::<Vec<String>>);
    assert!(find(&base, &from_none).unwrap().is_empty());
}

#[test]
fn observed_extensions_round_trip() {
    let (_registry, base) = selector_fixture();

    let files = find(&base, &SELECT_FILES).unwrap();
    assert_eq!(files.len(), 9);

    // Gather the extensions actually present, then select on exactly those.
    let observed: HashSet<String> = files
        .iter()
        .map(|f| f.name().extension().to_string())
        .collect();
    assert_eq!(observed.len(), 3);

    let selector = ExtensionSelector::new(observed);
    assert_eq!(find(&base, &selector).unwrap().len(), 9);
}

#[test]
fn single_extension_counts_are_symmetric() {
    let (_registry, base) = selector_fixture();

    let files = find(&base, &SELECT_FILES).unwrap();
    let observed: HashSet<String> = files
        .iter()
        .map(|f| f.name().extension().to_string())
        .collect();

    // Each distinct extension selects exactly its own third of the tree.
    for ext in &observed {
        let selector = ExtensionSelector::single(ext.clone());
        let matched = find(&base, &selector).unwrap();
        assert_eq!(matched.len(), 3, "extension {ext}");
        assert!(matched.iter().all(|f| f.name().extension() == ext));
    }

    // Building the selector from any individual file's extension gives the
    // same count.
    for file in &files {
        let selector = ExtensionSelector::single(file.name().extension());
        assert_eq!(find(&base, &selector).unwrap().len(), 3);
    }
}

#[test]
fn extension_match_is_case_sensitive() {
    let (registry, base) = selector_fixture();
    registry
        .resolve("ram://suite/shouty.HTM")
        .unwrap()
        .create_file()
        .unwrap();

    assert_eq!(find(&base, &ExtensionSelector::single("HTM")).unwrap().len(), 1);
    assert_eq!(find(&base, &ExtensionSelector::single("htm")).unwrap().len(), 3);
}

#[test]
fn extension_selection_reaches_nested_files() {
    let (registry, base) = selector_fixture();
    registry
        .resolve("ram://suite/nested/deep/d.htm")
        .unwrap()
        .create_file()
        .unwrap();

    let matched = find(&base, &ExtensionSelector::single("htm")).unwrap();
    assert_eq!(matched.len(), 4);
    assert!(paths(&matched).contains(&"/suite/nested/deep/d.htm".to_string()));
}

#[test]
fn folders_are_never_selected_by_extension() {
    let (registry, base) = selector_fixture();
    // A folder whose name carries a matching suffix is still excluded.
    registry
        .resolve("ram://suite/trap.htm/inner.htm")
        .unwrap()
        .create_file()
        .unwrap();

    let matched = find(&base, &ExtensionSelector::single("htm")).unwrap();
    assert_eq!(matched.len(), 4); // a/b/c.htm + trap.htm/inner.htm
    assert!(matched.iter().all(|n| n.kind() == NodeKind::File));
}

// =============================================================================
// Traversal semantics
// =============================================================================

#[test]
fn results_are_preorder_in_provider_order() {
    let fs = RamFs::new();
    fs.node("/tree/b.txt").create_file().unwrap();
    fs.node("/tree/d/n.txt").create_file().unwrap();
    fs.node("/tree/a.txt").create_file().unwrap();

    let found = find(&fs.node("/tree"), &SELECT_ALL).unwrap();
    assert_eq!(
        paths(&found),
        vec!["/tree/a.txt", "/tree/b.txt", "/tree/d", "/tree/d/n.txt"]
    );
}

#[test]
fn root_is_not_part_of_its_own_search() {
    let (_registry, base) = selector_fixture();
    let all = find(&base, &SELECT_ALL).unwrap();
    assert!(!paths(&all).contains(&"/suite".to_string()));
}

#[test]
fn folders_selector_sees_only_folders() {
    let (registry, base) = selector_fixture();
    registry
        .resolve("ram://suite/sub/leaf.htm")
        .unwrap()
        .create_file()
        .unwrap();

    let folders = find(&base, &SELECT_FOLDERS).unwrap();
    assert_eq!(paths(&folders), vec!["/suite/sub"]);
}

#[test]
fn refusing_descent_prunes_everything_below() {
    /// Includes every file but never enters `/vault/private`.
    struct SkipPrivate;

    impl anyfs_select::Selector for SkipPrivate {
        fn include(&self, ctx: &anyfs_select::SelectContext<'_>) -> bool {
            ctx.node().kind() == NodeKind::File
        }

        fn descend(&self, ctx: &anyfs_select::SelectContext<'_>) -> bool {
            ctx.node().name().path() != "/vault/private"
        }
    }

    let fs = RamFs::new();
    fs.node("/vault/open/a.txt").create_file().unwrap();
    fs.node("/vault/private/secret.txt").create_file().unwrap();

    let found = find(&fs.node("/vault"), &SkipPrivate).unwrap();
    assert_eq!(paths(&found), vec!["/vault/open/a.txt"]);
}

#[test]
fn depth_selector_limits_to_direct_children() {
    let (registry, base) = selector_fixture();
    registry
        .resolve("ram://suite/sub/deep.htm")
        .unwrap()
        .create_file()
        .unwrap();

    let direct = find(&base, &DepthSelector::new(1, 1)).unwrap();
    // 9 files + the sub folder, but not the nested file.
    assert_eq!(direct.len(), 10);
    assert!(!paths(&direct).contains(&"/suite/sub/deep.htm".to_string()));
}

// =============================================================================
// Bulk deletion
// =============================================================================

#[test]
fn delete_all_then_find_all_is_empty() {
    let (_registry, base) = selector_fixture();

    let report = delete_tree(&base, &SELECT_ALL).unwrap();
    assert_eq!(report.deleted, 10); // 9 files + the base folder
    assert!(report.is_complete());

    assert!(find(&base, &SELECT_ALL).unwrap().is_empty());
    assert!(!base.exists());
}

#[test]
fn delete_all_twice_is_idempotent() {
    let (_registry, base) = selector_fixture();

    delete_tree(&base, &SELECT_ALL).unwrap();
    let second = delete_tree(&base, &SELECT_ALL).unwrap();
    assert_eq!(second.deleted, 0);
    assert!(second.is_complete());
}

#[test]
fn selective_delete_does_not_cascade() {
    let (registry, base) = selector_fixture();
    registry
        .resolve("ram://suite/sub/nested.htm")
        .unwrap()
        .create_file()
        .unwrap();

    let report = delete_tree(&base, &ExtensionSelector::single("htm")).unwrap();
    assert_eq!(report.deleted, 4);

    // Unselected survives: the base, the emptied folder, other extensions.
    assert!(base.is_folder());
    assert!(registry.resolve("ram://suite/sub").unwrap().is_folder());
    assert!(registry.resolve("ram://suite/a.html").unwrap().is_file());
    assert!(!registry.resolve("ram://suite/a.htm").unwrap().exists());
}

#[test]
fn method_position_search_and_delete() {
    let (_registry, base) = selector_fixture();

    assert_eq!(base.find_matching(&SELECT_FILES).unwrap().len(), 9);
    let report = base.delete_matching(&SELECT_ALL).unwrap();
    assert_eq!(report.deleted, 10);
}

// =============================================================================
// Partial failure reporting
// =============================================================================

/// Wrapper provider node that denies deletion of configured paths —
/// stands in for a backend with permission enforcement.
struct DenyDelete {
    inner: NodeHandle,
    denied: Arc<HashSet<String>>,
}

impl DenyDelete {
    fn wrap(inner: NodeHandle, denied: Arc<HashSet<String>>) -> NodeHandle {
        Arc::new(Self { inner, denied })
    }
}

impl Node for DenyDelete {
    fn name(&self) -> NodeName {
        self.inner.name()
    }

    fn kind(&self) -> NodeKind {
        self.inner.kind()
    }

    fn children(&self) -> Result<ChildIter, FsError> {
        let denied = self.denied.clone();
        let children = self.inner.children()?;
        Ok(ChildIter::new(children.map(move |child| {
            child.map(|c| DenyDelete::wrap(c, denied.clone()))
        })))
    }

    fn parent(&self) -> Option<NodeHandle> {
        self.inner
            .parent()
            .map(|p| DenyDelete::wrap(p, self.denied.clone()))
    }

    fn create_file(&self) -> Result<(), FsError> {
        self.inner.create_file()
    }

    fn create_folder(&self) -> Result<(), FsError> {
        self.inner.create_folder()
    }

    fn delete(&self) -> Result<bool, FsError> {
        if self.denied.contains(self.inner.name().path()) {
            return Err(FsError::PermissionDenied {
                path: self.inner.name().path().to_string(),
                operation: "delete",
            });
        }
        self.inner.delete()
    }
}

#[test]
fn failed_deletions_are_reported_and_the_rest_proceed() {
    let fs = RamFs::new();
    fs.node("/base/locked.txt").create_file().unwrap();
    fs.node("/base/free.txt").create_file().unwrap();
    fs.node("/base/sub/other.txt").create_file().unwrap();

    let denied: Arc<HashSet<String>> = Arc::new(["/base/locked.txt".to_string()].into());
    let root = DenyDelete::wrap(fs.node("/base"), denied);

    let err = delete_tree(&root, &SELECT_ALL).unwrap_err();
    let FsError::PartialDelete { report } = err else {
        panic!("expected PartialDelete, got another error");
    };

    // Everything deletable went away.
    assert_eq!(report.deleted, 3); // free.txt, sub/other.txt, sub
    assert!(!fs.node("/base/free.txt").exists());
    assert!(!fs.node("/base/sub").exists());

    // The denied file failed outright; its parent then failed as non-empty.
    let failed: HashSet<&str> = report.failures.iter().map(|f| f.path.as_str()).collect();
    assert_eq!(failed, HashSet::from(["/base/locked.txt", "/base"]));
    assert!(report
        .failures
        .iter()
        .any(|f| matches!(f.source, FsError::PermissionDenied { .. })));
    assert!(report
        .failures
        .iter()
        .any(|f| matches!(f.source, FsError::FolderNotEmpty { .. })));

    // Survivors are exactly the denied file and its ancestor.
    assert!(fs.node("/base/locked.txt").is_file());
    assert!(fs.node("/base").is_folder());
}

// =============================================================================
// Provider contract
// =============================================================================

#[test]
fn listing_a_file_fails_with_not_a_folder() {
    let fs = RamFs::new();
    fs.node("/plain.txt").create_file().unwrap();
    let err = fs.node("/plain.txt").children().unwrap_err();
    assert!(matches!(err, FsError::NotAFolder { ref path } if path == "/plain.txt"));
}

#[test]
fn kind_tracks_backing_storage() {
    let fs = RamFs::new();
    let node = fs.node("/phantom");
    assert_eq!(node.kind(), NodeKind::Imaginary);

    node.create_folder().unwrap();
    assert_eq!(node.kind(), NodeKind::Folder);

    node.delete().unwrap();
    assert_eq!(node.kind(), NodeKind::Imaginary);
}

#[test]
fn registry_rejects_unknown_and_malformed() {
    let registry = SchemeRegistry::new();
    registry.register("ram", Arc::new(RamFs::new())).unwrap();

    assert!(matches!(
        registry.resolve("tar://archive/entry").unwrap_err(),
        FsError::UnknownScheme { .. }
    ));
    assert!(matches!(
        registry.resolve("not a uri").unwrap_err(),
        FsError::InvalidUri { .. }
    ));
}
