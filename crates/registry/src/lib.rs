//! Registry of map features for externally-identified UAVs.
//!
//! One feature per UAV id, mirrored into at most one vector source for the
//! lifetime of the registry.
//!
//! # Invariants
//! - At most one feature exists per id; creating over an existing id
//!   replaces it, detaching the old feature from the source first.
//! - The vector source binding is one-shot: once bound, binding a different
//!   source is an error, re-binding the same source is a no-op.
//! - After binding, registry entries and source membership correspond
//!   one-to-one on every mutation path.
//! - The base style of a feature depends on its id alone.

pub mod registry;
pub mod style;

pub use registry::{FeatureRegistry, RegistryError, RegistryEvent};
pub use style::style_for_id;

pub fn crate_info() -> &'static str {
    "airshow-registry v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("registry"));
    }
}
