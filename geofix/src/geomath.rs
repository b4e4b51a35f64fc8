//! Geometry primitives: great-circle distance and circle fusion.
//!
//! The search and ranking code never does coordinate math inline; it
//! consumes these two functions as its geometry boundary.

/// Mean Earth radius in meters (IUGG).
pub const EARTH_RADIUS_M: f64 = 6_371_008.8;

/// A position estimate with an uncertainty radius, all in degrees/meters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub lat: f64,
    pub lon: f64,
    pub radius: f64,
}

/// Great-circle distance in meters between two lat/lon points, via the
/// haversine formula on a spherical Earth.
pub fn distance_meters(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let dphi = (lat2 - lat1).to_radians();
    let dlambda = (lon2 - lon1).to_radians();

    let a = (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);
    // Clamp guards against rounding pushing a marginally above 1.0 for
    // antipodal points.
    2.0 * EARTH_RADIUS_M * a.sqrt().min(1.0).asin()
}

/// Fuse a set of circles into one position estimate.
///
/// The fused point is the centroid weighted by precision (weight is the
/// inverse of the radius, floored at one meter), so tighter circles pull
/// the estimate harder. The fused accuracy is the largest distance from
/// the fused point to any input center, floored at `minimum_accuracy`.
///
/// Returns `None` only for empty input; a single circle passes through
/// with its radius floored.
pub fn aggregate_position(circles: &[Circle], minimum_accuracy: f64) -> Option<(f64, f64, f64)> {
    match circles {
        [] => None,
        [only] => Some((only.lat, only.lon, only.radius.max(minimum_accuracy))),
        _ => {
            let mut weight_sum = 0.0;
            let mut lat_sum = 0.0;
            let mut lon_sum = 0.0;
            for circle in circles {
                let weight = 1.0 / circle.radius.max(1.0);
                weight_sum += weight;
                lat_sum += circle.lat * weight;
                lon_sum += circle.lon * weight;
            }
            let lat = lat_sum / weight_sum;
            let lon = lon_sum / weight_sum;

            let spread = circles
                .iter()
                .map(|c| distance_meters(lat, lon, c.lat, c.lon))
                .fold(0.0, f64::max);
            Some((lat, lon, spread.max(minimum_accuracy)))
        }
    }
}
