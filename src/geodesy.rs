//! Flat-earth conversions between ground distances and angular offsets
//!
//! These approximations are only valid for short distances (tens to low
//! hundreds of meters) away from the poles and the antimeridian.

use geo::Coord;

/// Approximate number of meters per degree at the given latitude
///
/// Second-order Fourier approximation of the WGS-84 meridian arc length per
/// degree. The same value is used for both axes, so longitudinal distances
/// are not corrected for the convergence of the meridians.
pub fn meters_per_degree(latitude: f64) -> f64 {
    let radians = latitude.to_radians();
    111_132.92 - 559.82 * (2.0 * radians).cos() + 1.175 * (4.0 * radians).cos()
}

/// Convert a ground distance in meters to degrees at the given latitude
pub fn meters_to_degrees(meters: f64, latitude: f64) -> f64 {
    meters / meters_per_degree(latitude)
}

/// Compute the point `distance_m` meters away from `origin` along `bearing`
///
/// `origin` is `(longitude, latitude)` in degrees and `bearing` a compass
/// bearing in degrees (0° = north, clockwise).
pub fn project(origin: Coord<f64>, bearing: f64, distance_m: f64) -> Coord<f64> {
    let distance = meters_to_degrees(distance_m, origin.y);

    // Reduce each quadrant to a right triangle along the x axis
    let (angle, xsign, ysign) = if (0.0..=90.0).contains(&bearing) {
        (90.0 - bearing, 1.0, 1.0)
    } else if bearing > 90.0 && bearing <= 180.0 {
        (bearing - 90.0, 1.0, -1.0)
    } else if bearing > 180.0 && bearing <= 270.0 {
        (270.0 - bearing, -1.0, -1.0)
    } else {
        (bearing - 270.0, -1.0, 1.0)
    };

    let angle: f64 = angle.to_radians();
    let opposite = ysign * distance * angle.sin();
    let adjacent = xsign * distance * angle.cos();

    Coord {
        x: origin.x + adjacent,
        y: origin.y + opposite,
    }
}
