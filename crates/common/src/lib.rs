//! Shared geometry: map-plane coordinates, geodetic coordinates, and the
//! web-mercator projection between them.
//!
//! # Invariants
//! - Map-plane coordinates are meters in EPSG:3857.
//! - Projection is pure; the same geodetic input always yields the same
//!   map coordinate.

pub mod coords;

pub use coords::{GeoCoord, MapCoord, geo_from_map, map_from_geo};

pub fn crate_info() -> &'static str {
    "airshow-common v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("common"));
    }
}
