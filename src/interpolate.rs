use crate::track::Track;
use crate::types::{InterpolatedSample, TrackPoint};

/// Fraction of the way from `previous` to `next` at `time`
///
/// A zero-duration bracket (both points share a timestamp, or `time` lies at
/// or beyond the last point) yields `0.0`, collapsing onto `previous`.
pub fn interpolation_factor(previous: &TrackPoint, next: &TrackPoint, time: f64) -> f64 {
    let range = next.timestamp - previous.timestamp;
    if range == 0.0 {
        log::trace!("zero-duration bracket at t={time}");
        return 0.0;
    }
    (time - previous.timestamp) / range
}

/// Interpolate between two compass headings along the shorter arc
///
/// The result is normalized into [0, 360).
pub fn interpolate_heading(previous: f64, next: f64, factor: f64) -> f64 {
    let mut diff = next - previous;

    if diff.abs() > 180.0 {
        diff = if next > previous {
            // counterclockwise across 0°
            -previous - (360.0 - next)
        } else {
            // clockwise across 0°
            (360.0 - previous) + next
        };
    }

    normalize_heading(previous + diff * factor)
}

/// Wrap a heading in degrees into [0, 360)
pub fn normalize_heading(heading: f64) -> f64 {
    let normalized = heading.rem_euclid(360.0);
    // tiny negative inputs round up to exactly 360
    if normalized >= 360.0 { 0.0 } else { normalized }
}

fn lerp(from: f64, to: f64, factor: f64) -> f64 {
    from + (to - from) * factor
}

impl Track {
    /// Interpolate position and heading at `time`
    ///
    /// Times outside of the track are clamped to its first and last point.
    pub fn sample_at(&self, time: f64) -> InterpolatedSample {
        let time = time.clamp(self.start_time(), self.end_time());
        let (previous, next) = self.locate(time);
        let factor = interpolation_factor(previous, next, time);

        InterpolatedSample {
            latitude: lerp(previous.latitude, next.latitude, factor),
            longitude: lerp(previous.longitude, next.longitude, factor),
            heading: interpolate_heading(previous.heading, next.heading, factor),
        }
    }
}
