use crate::error::{Error, Result};
use geo::algorithm::buffer::{Buffer, BufferStyle, LineCap, LineJoin};
use geo::{LineString, MultiPolygon};
use std::f64::consts::FRAC_PI_2;

/// Number of segments used to approximate a quarter circle
pub const DEFAULT_QUADRANT_SEGMENTS: u32 = 4;

/// Geometry engine capability used to turn the offset line into a polygon
///
/// Coordinates are planar, in degrees. Implementations must be
/// deterministic; failures are reported to the caller and never retried.
pub trait BufferEngine {
    /// Buffer `line` by `distance`, approximating each quarter circle of
    /// the rounded joins and caps with `quadrant_segments` segments
    fn buffer(
        &self,
        line: &LineString<f64>,
        distance: f64,
        quadrant_segments: u32,
    ) -> Result<MultiPolygon<f64>>;
}

impl<E: BufferEngine + ?Sized> BufferEngine for &E {
    fn buffer(
        &self,
        line: &LineString<f64>,
        distance: f64,
        quadrant_segments: u32,
    ) -> Result<MultiPolygon<f64>> {
        (**self).buffer(line, distance, quadrant_segments)
    }
}

/// `BufferEngine` backed by the `geo` crate
///
/// Stateless, so a single value can be shared freely between computations.
#[derive(Debug, Default, Clone, Copy)]
pub struct GeoBuffer;

impl BufferEngine for GeoBuffer {
    fn buffer(
        &self,
        line: &LineString<f64>,
        distance: f64,
        quadrant_segments: u32,
    ) -> Result<MultiPolygon<f64>> {
        if line.0.len() < 2 {
            return Err(Error::BufferFailed(format!(
                "line has {} vertices, at least 2 are required",
                line.0.len()
            )));
        }
        if !distance.is_finite() || distance <= 0.0 {
            return Err(Error::BufferFailed(format!(
                "distance must be positive, got {distance}"
            )));
        }
        if quadrant_segments == 0 {
            return Err(Error::InvalidQuadrantSegments(quadrant_segments));
        }

        // arc step angle in radians
        let step = FRAC_PI_2 / quadrant_segments as f64;
        let style = BufferStyle::new(distance)
            .line_join(LineJoin::Round(step))
            .line_cap(LineCap::Round(step));

        let polygon = line.buffer_with_style(style);
        if polygon.0.is_empty() {
            return Err(Error::BufferFailed(
                "buffer produced an empty polygon".to_string(),
            ));
        }

        log::trace!(
            "buffered {} vertices by {distance}° into {} polygon(s)",
            line.0.len(),
            polygon.0.len()
        );
        Ok(polygon)
    }
}
