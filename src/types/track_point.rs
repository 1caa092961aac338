use geo::Coord;
use serde::{Deserialize, Serialize};

/// A single recorded GPS fix
///
/// Coordinates and heading are in degrees. The heading is a compass bearing
/// (0° = north, clockwise) in [0, 360). Timestamps are in milliseconds and
/// only need to be consistent within a track.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackPoint {
    /// Milliseconds, monotonic within a track
    pub timestamp: f64,
    /// Latitude in degrees
    #[serde(alias = "lat")]
    pub latitude: f64,
    /// Longitude in degrees
    #[serde(alias = "lon", alias = "lng")]
    pub longitude: f64,
    /// Compass heading in degrees
    pub heading: f64,
}

impl TrackPoint {
    pub fn new(timestamp: f64, latitude: f64, longitude: f64, heading: f64) -> Self {
        Self {
            timestamp,
            latitude,
            longitude,
            heading,
        }
    }

    /// Position as a planar coordinate (`x` = longitude, `y` = latitude)
    pub fn coord(&self) -> Coord<f64> {
        Coord {
            x: self.longitude,
            y: self.latitude,
        }
    }
}

/// Position and heading of the platform at an arbitrary instant
///
/// Produced by interpolating between the two recorded points that bracket
/// the instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InterpolatedSample {
    pub latitude: f64,
    pub longitude: f64,
    /// Compass heading in degrees, normalized into [0, 360)
    pub heading: f64,
}

impl InterpolatedSample {
    pub fn coord(&self) -> Coord<f64> {
        Coord {
            x: self.longitude,
            y: self.latitude,
        }
    }
}
