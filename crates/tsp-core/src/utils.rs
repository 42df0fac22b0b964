use crate::models::Point;
use crate::oracle::DistanceOracle;
use std::f64::consts::PI;

const EARTH_RADIUS_KM: f64 = 6371.0;

#[inline(always)]
fn to_radians(degrees: f64) -> f64 {
    degrees * (PI / 180.0)
}

#[inline(always)]
pub fn euclidean_distance(from: &Point, to: &Point) -> f64 {
    (from.x - to.x).hypot(from.y - to.y)
}

/// Spherical law of cosines with `y` as latitude and `x` as longitude, in km.
#[inline(always)]
pub fn great_circle_distance(from: &Point, to: &Point) -> f64 {
    let lat1 = to_radians(from.y);
    let lon1 = to_radians(from.x);
    let lat2 = to_radians(to.y);
    let lon2 = to_radians(to.x);

    let val = (lat1.sin() * lat2.sin()) + (lat1.cos() * lat2.cos() * (lon1 - lon2).cos());

    val.clamp(-1.0, 1.0).acos() * EARTH_RADIUS_KM
}

/// Recomputes the cost of a path straight from the oracle, summing every
/// consecutive pair. Pass a closed path to include the return edge.
pub fn tour_cost<O: DistanceOracle>(oracle: &O, path: &[O::Node]) -> f64 {
    path.windows(2)
        .map(|pair| oracle.distance(&pair[0], &pair[1]))
        .sum()
}
