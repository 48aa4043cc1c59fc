//! Rendering adapter: renderer-agnostic interface over a vector source.
//!
//! # Invariants
//! - Renderers never mutate the source they draw from.
//! - Output derives from source content and the view alone.
//!
//! The text renderer stands in for a GPU map canvas; the trait is stable,
//! so a real canvas backend can replace it without changing consumers.

mod renderer;

pub use renderer::{MapView, Renderer, TextRenderer};

pub fn crate_info() -> &'static str {
    "airshow-render v0.1.0"
}
