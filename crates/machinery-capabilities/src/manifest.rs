//! The host-supplied capability manifest.
//!
//! A manifest is the opaque input structure handed to the registry at
//! initialization: a version string plus two name collections. How it reaches
//! the process is the host's business — a compiled-in constant (see
//! [`crate::builtin`]), a JSON document, or a file on disk. The registry never
//! goes looking for one on its own.

use crate::error::{CapabilityError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Declares the capabilities of one build: a version plus the feature and
/// module names that are present. Absence is expressed by omission; a manifest
/// never lists a name as "false".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Semantic version string in "x.y.z" form.
    pub version: String,
    /// Names of optional capabilities present in this build (e.g. "unicode").
    #[serde(default)]
    pub features: Vec<String>,
    /// Names of subsystems or targets present in this build (e.g. "x86").
    #[serde(default)]
    pub modules: Vec<String>,
}

impl Manifest {
    /// Build a manifest from in-process values.
    pub fn new<V, I, J>(version: V, features: I, modules: J) -> Self
    where
        V: Into<String>,
        I: IntoIterator,
        I::Item: Into<String>,
        J: IntoIterator,
        J::Item: Into<String>,
    {
        Self {
            version: version.into(),
            features: features.into_iter().map(Into::into).collect(),
            modules: modules.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse a manifest from a JSON document.
    ///
    /// Returns `MalformedManifest` if the document does not decompose into a
    /// version string and two name lists. Version validity is checked later,
    /// at `initialize` time.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a manifest from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| CapabilityError::io_with_path(e, path))?;
        Self::from_json_str(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_str_full_document() {
        let manifest = Manifest::from_json_str(
            r#"{"version": "1.2.0", "features": ["ascii", "unicode"], "modules": ["x86", "arm"]}"#,
        )
        .unwrap();
        assert_eq!(manifest.version, "1.2.0");
        assert_eq!(manifest.features, vec!["ascii", "unicode"]);
        assert_eq!(manifest.modules, vec!["x86", "arm"]);
    }

    #[test]
    fn test_from_json_str_lists_default_to_empty() {
        let manifest = Manifest::from_json_str(r#"{"version": "0.1.0"}"#).unwrap();
        assert!(manifest.features.is_empty());
        assert!(manifest.modules.is_empty());
    }

    #[test]
    fn test_from_json_str_missing_version_is_malformed() {
        let err = Manifest::from_json_str(r#"{"features": ["ascii"]}"#).unwrap_err();
        assert!(matches!(err, CapabilityError::MalformedManifest { .. }));
    }

    #[test]
    fn test_from_json_str_invalid_json_is_malformed() {
        let err = Manifest::from_json_str("not json").unwrap_err();
        assert!(matches!(err, CapabilityError::MalformedManifest { .. }));
    }

    #[test]
    fn test_from_path_missing_file_is_io() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let err = Manifest::from_path(&temp_dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, CapabilityError::Io { .. }));
    }

    #[test]
    fn test_new_accepts_mixed_string_kinds() {
        let manifest = Manifest::new("1.0.0", ["ascii"], vec!["x86".to_string()]);
        assert_eq!(manifest.features, vec!["ascii"]);
        assert_eq!(manifest.modules, vec!["x86"]);
    }
}
