//! UAV map layer: model-to-map glue.
//!
//! Consumes flock events and drives the feature registry so the layer's
//! vector source always shows the current flock. Label colors come from
//! configured id-pattern rules; an explicit selection overrides them.
//!
//! # Invariants
//! - Registry membership equals the set of UAV ids seen and not removed.
//! - Color rules are ordered; the first matching rule wins.
//! - Selection never changes geometry, only label color.

pub mod color;
pub mod config;
pub mod source;

pub use color::{ColorRule, IdPattern};
pub use config::{LayerConfig, LayerError};
pub use source::UavLayerSource;

pub fn crate_info() -> &'static str {
    "airshow-layer v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("layer"));
    }
}
