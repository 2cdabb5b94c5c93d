//! Great-circle geometry on latitude/longitude pairs.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Mean Earth radius in statute miles.
pub const EARTH_RADIUS_MILES: f64 = 3963.1;

/// Geographic position in signed decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Great-circle distance to `other` in miles.
    pub fn distance_to(&self, other: &Self) -> f64 {
        distance_miles(*self, *other)
    }

    /// Point halfway along the great circle to `other`.
    pub fn midpoint_with(&self, other: &Self) -> Self {
        midpoint(*self, *other)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lat, self.lon)
    }
}

/// Haversine distance between two coordinates in miles.
///
/// Symmetric in its arguments and exactly zero for identical points.
pub fn distance_miles(a: Coordinate, b: Coordinate) -> f64 {
    let lat_a = a.lat.to_radians();
    let lat_b = b.lat.to_radians();
    let half_dlat = (b.lat - a.lat).to_radians() / 2.0;
    let half_dlon = (b.lon - a.lon).to_radians() / 2.0;

    let h = half_dlat.sin().powi(2) + lat_a.cos() * lat_b.cos() * half_dlon.sin().powi(2);
    // Rounding can push h marginally past 1 for antipodal points.
    let h = h.clamp(0.0, 1.0);

    2.0 * EARTH_RADIUS_MILES * h.sqrt().asin()
}

/// Spherical midpoint of the great-circle segment between `a` and `b`.
pub fn midpoint(a: Coordinate, b: Coordinate) -> Coordinate {
    let lat_a = a.lat.to_radians();
    let lon_a = a.lon.to_radians();
    let lat_b = b.lat.to_radians();
    let dlon = (b.lon - a.lon).to_radians();

    let bx = lat_b.cos() * dlon.cos();
    let by = lat_b.cos() * dlon.sin();

    let lat = (lat_a.sin() + lat_b.sin()).atan2(((lat_a.cos() + bx).powi(2) + by * by).sqrt());
    let lon = lon_a + by.atan2(lat_a.cos() + bx);

    Coordinate {
        lat: lat.to_degrees(),
        lon: lon.to_degrees(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEO: Coordinate = Coordinate::new(41.870_05, -87.650_05);
    const SCE: Coordinate = Coordinate::new(41.871_05, -87.648_05);

    #[test]
    fn distance_to_self_is_zero() {
        assert_eq!(distance_miles(SEO, SEO), 0.0);
        assert_eq!(distance_miles(SCE, SCE), 0.0);
    }

    #[test]
    fn distance_is_symmetric() {
        assert_eq!(distance_miles(SEO, SCE), distance_miles(SCE, SEO));
        let far = Coordinate::new(-33.8688, 151.2093);
        assert_eq!(distance_miles(SEO, far), distance_miles(far, SEO));
    }

    #[test]
    fn one_degree_of_latitude_is_about_69_miles() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(1.0, 0.0);
        let d = distance_miles(a, b);
        assert!((d - 69.17).abs() < 0.05, "got {d}");
    }

    #[test]
    fn antipodal_points_are_half_circumference_apart() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(0.0, 180.0);
        let d = distance_miles(a, b);
        assert!(d.is_finite());
        assert!((d - std::f64::consts::PI * EARTH_RADIUS_MILES).abs() < 1e-6);
    }

    #[test]
    fn midpoint_on_equator() {
        let mid = midpoint(Coordinate::new(0.0, 10.0), Coordinate::new(0.0, 20.0));
        assert!(mid.lat.abs() < 1e-9);
        assert!((mid.lon - 15.0).abs() < 1e-9);
    }

    #[test]
    fn midpoint_is_equidistant() {
        let mid = midpoint(SEO, SCE);
        let to_a = distance_miles(mid, SEO);
        let to_b = distance_miles(mid, SCE);
        assert!((to_a - to_b).abs() < 1e-9);
        assert!((to_a + to_b - distance_miles(SEO, SCE)).abs() < 1e-9);
    }

    #[test]
    fn midpoint_of_identical_points_is_the_point() {
        let mid = SEO.midpoint_with(&SEO);
        assert!((mid.lat - SEO.lat).abs() < 1e-9);
        assert!((mid.lon - SEO.lon).abs() < 1e-9);
    }

    #[test]
    fn midpoint_bends_towards_the_pole() {
        // The great circle between two points on the same parallel bulges poleward.
        let mid = midpoint(Coordinate::new(60.0, 0.0), Coordinate::new(60.0, 90.0));
        assert!(mid.lat > 60.0);
        assert!((mid.lon - 45.0).abs() < 1e-9);
    }
}
