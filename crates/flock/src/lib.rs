//! Authoritative UAV model state.
//!
//! The flock owns the last known state of every UAV; map layers and other
//! views derive from it through the event stream.
//!
//! # Invariants
//! - All mutations produce events.
//! - Iteration order is deterministic (BTreeMap).

pub mod model;

pub use model::{Flock, FlockEvent, Uav};

pub fn crate_info() -> &'static str {
    "airshow-flock v0.1.0"
}
