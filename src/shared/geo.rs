use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{}, {}", self.latitude, self.longitude))
    }
}

impl From<Coordinate> for (f64, f64) {
    fn from(value: Coordinate) -> Self {
        (value.latitude, value.longitude)
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self { latitude, longitude }
    }
}

impl Coordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Flat-plane distance in raw coordinate degrees.
    /// Only ever used to order stations by closeness against one origin,
    /// never as a real-world length.
    pub fn planar_distance(&self, coord: &Self) -> f64 {
        let dist_lat = coord.latitude - self.latitude;
        let dist_lon = coord.longitude - self.longitude;
        f64::sqrt(dist_lat * dist_lat + dist_lon * dist_lon)
    }
}

#[test]
fn planar_distance_test() {
    let coord_a = Coordinate::new(0.0, 0.0);
    let coord_b = Coordinate::new(3.0, 4.0);
    let d = coord_a.planar_distance(&coord_b);
    assert!((d - 5.0).abs() < f64::EPSILON);
}

#[test]
fn planar_distance_zero_test() {
    let coord = Coordinate::new(53.349805, -6.26031);
    assert_eq!(coord.planar_distance(&coord), 0.0);
}

#[test]
fn planar_distance_symmetry_test() {
    let coord_a = Coordinate::new(53.3441, -6.2503);
    let coord_b = Coordinate::new(52.9815, -6.0442);
    assert_eq!(
        coord_a.planar_distance(&coord_b),
        coord_b.planar_distance(&coord_a)
    );
}
