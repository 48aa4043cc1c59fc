use glam::DVec2;
use serde::{Deserialize, Serialize};

/// WGS84 equatorial radius in meters, as used by the spherical mercator grid.
const EARTH_RADIUS_M: f64 = 6_378_137.0;

/// Latitude limit of the square web-mercator plane, in degrees.
const MERCATOR_MAX_LAT_DEG: f64 = 85.051_128_779_806_59;

/// A position on the map plane, in web-mercator (EPSG:3857) meters.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MapCoord(pub DVec2);

impl MapCoord {
    pub fn new(x: f64, y: f64) -> Self {
        Self(DVec2::new(x, y))
    }

    pub fn x(&self) -> f64 {
        self.0.x
    }

    pub fn y(&self) -> f64 {
        self.0.y
    }
}

/// A geodetic position: longitude and latitude in degrees, WGS84.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoCoord {
    pub lon: f64,
    pub lat: f64,
}

impl GeoCoord {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }
}

/// Project a geodetic coordinate onto the web-mercator map plane.
///
/// Latitude is clamped to the mercator limit so poles do not produce
/// infinities.
pub fn map_from_geo(geo: GeoCoord) -> MapCoord {
    let lat = geo.lat.clamp(-MERCATOR_MAX_LAT_DEG, MERCATOR_MAX_LAT_DEG);
    let x = geo.lon.to_radians() * EARTH_RADIUS_M;
    let y = (std::f64::consts::FRAC_PI_4 + lat.to_radians() / 2.0)
        .tan()
        .ln()
        * EARTH_RADIUS_M;
    MapCoord::new(x, y)
}

/// Inverse of [`map_from_geo`].
pub fn geo_from_map(map: MapCoord) -> GeoCoord {
    let lon = (map.x() / EARTH_RADIUS_M).to_degrees();
    let lat = ((map.y() / EARTH_RADIUS_M).exp().atan() * 2.0
        - std::f64::consts::FRAC_PI_2)
        .to_degrees();
    GeoCoord::new(lon, lat)
}
