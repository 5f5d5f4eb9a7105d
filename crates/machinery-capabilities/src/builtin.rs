//! The compiled-in capability manifest.
//!
//! The entries of this manifest are fixed at build time by Cargo features:
//! "ascii" is always present, "debug" requires the `debug-capability` feature,
//! and "unicode" plus the four modules ("arm", "ir", "jit", "x86") are
//! default-on and individually removable with `--no-default-features`.

use crate::manifest::Manifest;

/// Feature names compiled into this build.
pub fn feature_names() -> Vec<String> {
    let mut names = vec!["ascii".to_string()];
    if cfg!(feature = "debug-capability") {
        names.push("debug".to_string());
    }
    if cfg!(feature = "unicode") {
        names.push("unicode".to_string());
    }
    names
}

/// Module names compiled into this build.
pub fn module_names() -> Vec<String> {
    let mut names = Vec::new();
    if cfg!(feature = "arm") {
        names.push("arm".to_string());
    }
    if cfg!(feature = "ir") {
        names.push("ir".to_string());
    }
    if cfg!(feature = "jit") {
        names.push("jit".to_string());
    }
    if cfg!(feature = "x86") {
        names.push("x86".to_string());
    }
    names
}

/// The manifest describing this build, versioned by the crate itself.
pub fn manifest() -> Manifest {
    Manifest::new(env!("CARGO_PKG_VERSION"), feature_names(), module_names())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_is_unconditional() {
        assert!(feature_names().contains(&"ascii".to_string()));
    }

    #[test]
    fn test_debug_tracks_its_feature_gate() {
        let has_debug = feature_names().contains(&"debug".to_string());
        assert_eq!(has_debug, cfg!(feature = "debug-capability"));
    }

    #[test]
    fn test_manifest_version_is_crate_version() {
        assert_eq!(manifest().version, env!("CARGO_PKG_VERSION"));
    }

    #[cfg(feature = "x86")]
    #[test]
    fn test_x86_present_when_enabled() {
        assert!(module_names().contains(&"x86".to_string()));
    }
}
