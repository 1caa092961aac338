use crate::error::{Error, Result};
use crate::interpolate::normalize_heading;
use crate::types::TrackPoint;

/// Time-ordered sequence of recorded GPS fixes
///
/// Answers "which two recorded points bracket this instant" queries for the
/// interpolation step. The point sequence is never mutated after
/// construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    points: Vec<TrackPoint>,
}

impl Track {
    /// Create a track from points sorted ascending by timestamp
    ///
    /// Headings are wrapped into [0, 360).
    ///
    /// # Errors
    ///
    /// - `Error::EmptyTrack` if `points` is empty
    /// - `Error::NonFiniteValue` if any coordinate, heading or timestamp is NaN or infinite
    /// - `Error::OutOfOrder` if a timestamp is lower than its predecessor
    pub fn new(mut points: Vec<TrackPoint>) -> Result<Self> {
        if points.is_empty() {
            return Err(Error::EmptyTrack);
        }

        for (index, point) in points.iter().enumerate() {
            let fields = [
                ("timestamp", point.timestamp),
                ("latitude", point.latitude),
                ("longitude", point.longitude),
                ("heading", point.heading),
            ];
            if let Some(&(field, _)) = fields.iter().find(|(_, value)| !value.is_finite()) {
                return Err(Error::NonFiniteValue { index, field });
            }
        }

        for (index, pair) in points.windows(2).enumerate() {
            if pair[1].timestamp < pair[0].timestamp {
                return Err(Error::OutOfOrder {
                    index: index + 1,
                    previous: pair[0].timestamp,
                    timestamp: pair[1].timestamp,
                });
            }
        }

        for point in &mut points {
            point.heading = normalize_heading(point.heading);
        }

        Ok(Self { points })
    }

    pub fn points(&self) -> &[TrackPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the track has no points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> &TrackPoint {
        &self.points[0]
    }

    pub fn last(&self) -> &TrackPoint {
        &self.points[self.points.len() - 1]
    }

    pub fn start_time(&self) -> f64 {
        self.first().timestamp
    }

    pub fn end_time(&self) -> f64 {
        self.last().timestamp
    }

    /// Elapsed time between the first and the last point
    pub fn duration(&self) -> f64 {
        self.end_time() - self.start_time()
    }

    /// Index of the last point recorded at or before `time`
    ///
    /// Clamped to `0` when `time` precedes the first point.
    pub fn previous_index(&self, time: f64) -> usize {
        // first point strictly after `time`
        let after = self.points.partition_point(|point| point.timestamp <= time);
        after.saturating_sub(1)
    }

    /// Find the pair of recorded points bracketing `time`
    ///
    /// Returns `(previous, next)`. When `time` lies at or beyond the last
    /// point both refer to the last point, leaving a zero-duration bracket.
    pub fn locate(&self, time: f64) -> (&TrackPoint, &TrackPoint) {
        let previous = self.previous_index(time);
        let next = (previous + 1).min(self.points.len() - 1);
        (&self.points[previous], &self.points[next])
    }
}
