//! Vector-graphics scene model: the backing store a map layer renders from.
//!
//! Features are point markers with a style; a vector source aggregates the
//! features of one layer. Handles are shared, single-threaded references:
//! whoever holds a handle can move or restyle the feature in place.
//!
//! # Invariants
//! - Every feature has a unique uid for the lifetime of the process.
//! - Source membership is keyed by uid; adding a handle twice is idempotent.
//! - Iteration order over a source is deterministic (BTreeMap).

pub mod feature;
pub mod source;
pub mod style;

pub use feature::{FeatureHandle, FeatureId};
pub use source::{SharedVectorSource, VectorSource};
pub use style::{Color, Glyph, Icon, Style, TextAlign, TextLabel};

pub fn crate_info() -> &'static str {
    "airshow-scene v0.1.0"
}
