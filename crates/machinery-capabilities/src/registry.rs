//! Process-wide capability registry.
//!
//! The registry has exactly two states, Uninitialized and Ready, with a single
//! one-way transition driven by [`CapabilityRegistry::initialize`]. Once Ready
//! its contents are frozen, so every query is a lock-free read that is safe
//! from any number of threads.
//!
//! The registry is an explicit object: hosts construct one at process entry
//! and pass it to consumers, rather than reaching for a hidden global.

use crate::error::{CapabilityError, Result};
use crate::manifest::Manifest;
use semver::Version;
use std::collections::HashSet;
use std::sync::OnceLock;
use tracing::debug;

/// Frozen contents of a Ready registry.
#[derive(Debug)]
struct RegistryState {
    version: Version,
    features: HashSet<String>,
    modules: HashSet<String>,
}

impl RegistryState {
    /// Validate a manifest into frozen state. Fails without side effects, so
    /// a rejected manifest leaves the owning registry untouched.
    fn try_from_manifest(manifest: &Manifest) -> Result<Self> {
        let version = Version::parse(&manifest.version).map_err(|e| {
            CapabilityError::MalformedManifest {
                message: format!("invalid version {:?}: {}", manifest.version, e),
            }
        })?;

        Ok(Self {
            version,
            features: manifest.features.iter().cloned().collect(),
            modules: manifest.modules.iter().cloned().collect(),
        })
    }
}

/// Read-mostly table mapping symbolic names to boolean-presence facts, plus an
/// immutable version identifier.
///
/// Names are compared by exact byte equality. No case-folding, no trimming:
/// callers canonicalize symbol-like identifiers into plain strings before
/// querying. An unknown name is the "not supported" answer, never an error.
#[derive(Debug, Default)]
pub struct CapabilityRegistry {
    state: OnceLock<RegistryState>,
}

impl CapabilityRegistry {
    /// Create an uninitialized registry.
    pub fn new() -> Self {
        Self {
            state: OnceLock::new(),
        }
    }

    /// Create a registry and initialize it from `manifest` in one step.
    ///
    /// Convenience for hosts with a compiled-in manifest (see
    /// [`crate::builtin::manifest`]).
    pub fn with_manifest(manifest: &Manifest) -> Result<Self> {
        let registry = Self::new();
        registry.initialize(manifest)?;
        Ok(registry)
    }

    /// One-time setup from a manifest.
    ///
    /// The manifest is validated in full before anything is published: on
    /// `MalformedManifest` the registry remains Uninitialized and a corrected
    /// call may still succeed. Concurrent calls serialize; exactly one caller
    /// succeeds and every other observes `AlreadyInitialized`.
    pub fn initialize(&self, manifest: &Manifest) -> Result<()> {
        let state = RegistryState::try_from_manifest(manifest)?;
        let version = state.version.to_string();
        let feature_count = state.features.len();
        let module_count = state.modules.len();

        if self.state.set(state).is_err() {
            // The cell is guaranteed full after a failed set.
            let installed = self
                .state
                .get()
                .map(|s| s.version.to_string())
                .unwrap_or_default();
            return Err(CapabilityError::AlreadyInitialized { version: installed });
        }

        debug!(
            "Capability registry initialized: version {}, {} feature(s), {} module(s)",
            version, feature_count, module_count
        );

        Ok(())
    }

    /// Returns true once `initialize` has completed.
    pub fn is_initialized(&self) -> bool {
        self.state.get().is_some()
    }

    fn ready(&self) -> Result<&RegistryState> {
        self.state.get().ok_or(CapabilityError::NotInitialized)
    }

    /// The immutable version identifier. Never fails once Ready.
    pub fn version(&self) -> Result<&Version> {
        Ok(&self.ready()?.version)
    }

    /// Whether `name` is a member of the feature set.
    ///
    /// Total over strings once Ready: empty and previously-unseen names yield
    /// `Ok(false)`. Fails only with `NotInitialized` before setup, never a
    /// silent "unsupported".
    pub fn has_feature(&self, name: &str) -> Result<bool> {
        Ok(self.ready()?.features.contains(name))
    }

    /// Whether `name` is a member of the module set. Same contract as
    /// [`Self::has_feature`].
    pub fn has_module(&self, name: &str) -> Result<bool> {
        Ok(self.ready()?.modules.contains(name))
    }
}
