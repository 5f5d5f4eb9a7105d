//! Capability registry for a native runtime library.
//!
//! This crate answers three questions about one build of a runtime: what
//! version is this, is a named feature present, and is a named module present.
//! The answers come from a [`Manifest`] supplied once at process start —
//! either the compiled-in one from [`builtin::manifest`] or a host-provided
//! document — and are frozen for the life of the process.
//!
//! A binding or CLI layer sits on top of this crate and is responsible for
//! marshaling calling conventions and converting symbol-like identifiers to
//! plain strings; the registry itself only ever sees `&str`.
//!
//! # Example
//!
//! ```rust
//! use machinery_capabilities::{builtin, CapabilityRegistry};
//!
//! fn main() -> machinery_capabilities::Result<()> {
//!     let registry = CapabilityRegistry::with_manifest(&builtin::manifest())?;
//!
//!     assert!(registry.has_feature("ascii")?);
//!     assert!(!registry.has_module("mips")?);
//!     println!("runtime version: {}", registry.version()?);
//!
//!     Ok(())
//! }
//! ```

pub mod builtin;
pub mod error;
pub mod manifest;
pub mod registry;

// Re-export commonly used types
pub use error::{CapabilityError, Result};
pub use manifest::Manifest;
pub use registry::CapabilityRegistry;
