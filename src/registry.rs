//! Scheme-to-provider resolution.
//!
//! An explicit registry object maps URI schemes to storage providers.
//! There is no global state: callers construct a [`SchemeRegistry`], hand
//! it the providers they want, and pass it to whatever resolves root
//! nodes. The traversal engine itself only ever sees already-resolved
//! [`NodeHandle`]s.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::{FsError, NodeHandle};

/// A storage provider that can hand out nodes of its namespace.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; registries share providers
/// across threads behind `Arc`.
pub trait Provider: Send + Sync {
    /// The root node of this provider's namespace.
    fn root(&self) -> NodeHandle;

    /// Resolve a provider-relative path to a node, which need not exist.
    ///
    /// # Errors
    ///
    /// Provider-specific; e.g. [`FsError::Io`] for backends that must
    /// contact remote storage to resolve.
    fn resolve(&self, path: &str) -> Result<NodeHandle, FsError>;
}

/// Maps `scheme://path` URIs to registered providers.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use anyfs_select::{NodeKind, RamFs, SchemeRegistry};
///
/// let registry = SchemeRegistry::new();
/// registry.register("ram", Arc::new(RamFs::new())).unwrap();
///
/// let node = registry.resolve("ram://scratch/notes.txt").unwrap();
/// assert_eq!(node.kind(), NodeKind::Imaginary);
/// node.create_file().unwrap();
/// assert_eq!(node.kind(), NodeKind::File);
/// ```
pub struct SchemeRegistry {
    providers: RwLock<HashMap<String, Arc<dyn Provider>>>,
}

impl SchemeRegistry {
    /// Create a registry with no providers.
    pub fn new() -> Self {
        Self {
            providers: RwLock::new(HashMap::new()),
        }
    }

    /// Register a provider for `scheme`.
    ///
    /// # Errors
    ///
    /// [`FsError::AlreadyExists`] if the scheme is taken; registrations
    /// are not silently replaced.
    pub fn register(
        &self,
        scheme: impl Into<String>,
        provider: Arc<dyn Provider>,
    ) -> Result<(), FsError> {
        let scheme = scheme.into();
        let mut providers = self.providers.write().unwrap();
        if providers.contains_key(&scheme) {
            return Err(FsError::AlreadyExists {
                path: scheme,
                operation: "register",
            });
        }
        providers.insert(scheme, provider);
        Ok(())
    }

    /// Returns `true` if a provider is registered for `scheme`.
    pub fn is_registered(&self, scheme: &str) -> bool {
        self.providers.read().unwrap().contains_key(scheme)
    }

    /// Resolve a `scheme://path` URI to a node of the matching provider.
    ///
    /// # Errors
    ///
    /// - [`FsError::InvalidUri`] if the URI has no `scheme://` prefix
    /// - [`FsError::UnknownScheme`] if no provider is registered
    /// - Whatever the provider's own `resolve` reports
    pub fn resolve(&self, uri: &str) -> Result<NodeHandle, FsError> {
        let (scheme, path) = uri.split_once("://").ok_or_else(|| FsError::InvalidUri {
            uri: uri.to_string(),
        })?;
        if scheme.is_empty() {
            return Err(FsError::InvalidUri {
                uri: uri.to_string(),
            });
        }
        let provider = self
            .providers
            .read()
            .unwrap()
            .get(scheme)
            .cloned()
            .ok_or_else(|| FsError::UnknownScheme {
                scheme: scheme.to_string(),
            })?;
        provider.resolve(path)
    }
}

impl Default for SchemeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
