//! Coverage footprint reconstruction
//!
//! Walks a track at a fixed frame rate, interpolating position and heading
//! at each frame, projects every sample outward along its heading to build
//! an offset line, and buffers that line into the coverage polygon.

use crate::engine::{BufferEngine, DEFAULT_QUADRANT_SEGMENTS, GeoBuffer};
use crate::error::{Error, Result};
use crate::feature::{decode_line, line_feature, polygon_feature};
use crate::geodesy::{meters_to_degrees, project};
use crate::track::Track;
use crate::types::{Coverage, CoverageGeometry, InterpolatedSample};
use geo::{Coord, LineString, MultiPolygon};
use geojson::Feature;
use serde::{Deserialize, Serialize};

pub const DEFAULT_DISTANCE_IN_METERS: f64 = 65.0;

/// Samples per second
pub const DEFAULT_FRAME_RATE: f64 = 1.0;

/// Shrinks the buffer distance, since the offset line already sits one
/// sensor distance away from the track. Chosen empirically.
pub const BUFFER_COEFFICIENT: f64 = 0.8;

/// Upper bound on the number of frames sampled along one track
///
/// Every frame keeps two coordinates in memory and adds a vertex to the
/// buffered line, so a long track at a high frame rate is rejected instead
/// of sampled.
pub const MAX_SAMPLES: u64 = 1_000_000;

/// Parameters of a coverage computation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceOptions {
    /// Ground distance between the platform and the swept edge, in meters
    pub distance_m: f64,
    /// Samples per second
    pub frame_rate: f64,
    /// Multiplier applied to the buffer distance
    pub buffer_coefficient: f64,
    /// Segments per quarter circle of the buffered outline
    pub quadrant_segments: u32,
}

impl Default for SurfaceOptions {
    fn default() -> Self {
        Self {
            distance_m: DEFAULT_DISTANCE_IN_METERS,
            frame_rate: DEFAULT_FRAME_RATE,
            buffer_coefficient: BUFFER_COEFFICIENT,
            quadrant_segments: DEFAULT_QUADRANT_SEGMENTS,
        }
    }
}

impl SurfaceOptions {
    /// Check that the options describe a terminating, well-defined computation
    pub fn validate(&self) -> Result<()> {
        if !self.frame_rate.is_finite() || self.frame_rate <= 0.0 {
            return Err(Error::InvalidFrameRate(self.frame_rate));
        }
        if !self.distance_m.is_finite() || self.distance_m <= 0.0 {
            return Err(Error::InvalidDistance(self.distance_m));
        }
        if !self.buffer_coefficient.is_finite() || self.buffer_coefficient <= 0.0 {
            return Err(Error::InvalidBufferCoefficient(self.buffer_coefficient));
        }
        if self.quadrant_segments == 0 {
            return Err(Error::InvalidQuadrantSegments(self.quadrant_segments));
        }
        Ok(())
    }

    /// Time between two samples, in milliseconds
    pub fn frame_duration(&self) -> f64 {
        1000.0 / self.frame_rate
    }

    /// Number of frames sampled over `duration` milliseconds
    pub fn sample_count(&self, duration: f64) -> u64 {
        ((duration / self.frame_duration()).floor() as u64).saturating_add(1)
    }
}

/// Accumulated output of the sampling loop
#[derive(Debug, Default)]
struct Swath {
    track: Vec<Coord<f64>>,
    offsets: Vec<Coord<f64>>,
    last_latitude: Option<f64>,
}

impl Swath {
    fn push(mut self, sample: InterpolatedSample, distance_m: f64) -> Self {
        let position = sample.coord();
        self.offsets.push(project(position, sample.heading, distance_m));
        self.track.push(position);
        self.last_latitude = Some(sample.latitude);
        self
    }
}

/// Reconstructs the coverage footprint of a sensor moving along a track
///
/// # Example
///
/// ```
/// use track_coverage::{Surface, Track, TrackPoint};
///
/// let track = Track::new(vec![
///     TrackPoint::new(0.0, 0.0, 0.0, 90.0),
///     TrackPoint::new(2000.0, 0.0, 0.001, 90.0),
/// ])?;
///
/// let coverage = Surface::new(&track).compute()?.expect("track long enough");
/// assert_eq!(coverage.into_feature_collection().features.len(), 3);
/// # Ok::<(), track_coverage::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Surface<'a, E = GeoBuffer> {
    track: &'a Track,
    options: SurfaceOptions,
    engine: E,
}

impl<'a> Surface<'a> {
    /// Create a reconstructor with default options, buffering with `geo`
    pub fn new(track: &'a Track) -> Self {
        Self::with_engine(track, GeoBuffer)
    }
}

impl<'a, E: BufferEngine> Surface<'a, E> {
    pub fn with_engine(track: &'a Track, engine: E) -> Self {
        Self {
            track,
            options: SurfaceOptions::default(),
            engine,
        }
    }

    pub fn with_options(mut self, options: SurfaceOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &SurfaceOptions {
        &self.options
    }

    pub fn track(&self) -> &Track {
        self.track
    }

    /// Compute the coverage as GeoJSON features
    ///
    /// Returns `None` if the track spans too little time to produce at least
    /// two samples at the configured frame rate.
    pub fn compute(&self) -> Result<Option<Coverage>> {
        let Some(geometry) = self.compute_geometry()? else {
            return Ok(None);
        };

        Ok(Some(Coverage {
            track_line: line_feature(&geometry.track_line),
            offset_line: line_feature(&geometry.offset_line),
            polygon: polygon_feature(&geometry.polygon),
        }))
    }

    /// Compute the coverage as raw geometries
    ///
    /// Returns `None` if the track spans too little time to produce at least
    /// two samples at the configured frame rate.
    ///
    /// # Errors
    ///
    /// - `Error::TooManySamples` if the track would produce more than
    ///   [`MAX_SAMPLES`] frames
    /// - any error of [`SurfaceOptions::validate`] or of the buffer engine
    pub fn compute_geometry(&self) -> Result<Option<CoverageGeometry>> {
        self.options.validate()?;

        if self.track.len() < 2 {
            log::debug!("track has a single point, no coverage");
            return Ok(None);
        }

        let samples = self.options.sample_count(self.track.duration());
        if samples > MAX_SAMPLES {
            return Err(Error::TooManySamples {
                samples,
                limit: MAX_SAMPLES,
            });
        }

        let swath = self.sample();
        let Some(latitude) = swath.last_latitude.filter(|_| swath.offsets.len() > 1) else {
            log::debug!(
                "{} sample(s) over {} ms, no coverage",
                swath.offsets.len(),
                self.track.duration()
            );
            return Ok(None);
        };

        let offset_line = LineString::new(swath.offsets);
        let polygon = self.buffer_line(latitude, &offset_line)?;

        Ok(Some(CoverageGeometry {
            track_line: LineString::new(swath.track),
            offset_line,
            polygon,
        }))
    }

    /// Buffer a GeoJSON `LineString` feature into a coverage polygon feature
    ///
    /// `latitude` selects the meters-per-degree factor used for the whole
    /// line.
    pub fn buffered_line(&self, latitude: f64, line: &Feature) -> Result<Feature> {
        let line = decode_line(line)?;
        let polygon = self.buffer_line(latitude, &line)?;
        Ok(polygon_feature(&polygon))
    }

    /// Buffer distance in degrees at `latitude`, after applying the coefficient
    pub fn buffer_distance(&self, latitude: f64) -> f64 {
        meters_to_degrees(self.options.distance_m, latitude) * self.options.buffer_coefficient
    }

    fn buffer_line(&self, latitude: f64, line: &LineString<f64>) -> Result<MultiPolygon<f64>> {
        let distance = self.buffer_distance(latitude);
        log::debug!(
            "buffering {} offset points by {distance}° (latitude {latitude})",
            line.0.len()
        );
        self.engine.buffer(line, distance, self.options.quadrant_segments)
    }

    fn sample(&self) -> Swath {
        let frame_duration = self.options.frame_duration();
        let start = self.track.start_time();
        let end = self.track.end_time();
        let distance_m = self.options.distance_m;

        let swath = (0u64..)
            .map(|frame| start + frame as f64 * frame_duration)
            .take_while(|&time| time <= end)
            .map(|time| {
                let sample = self.track.sample_at(time);
                log::trace!(
                    "t={time}: {}, {} heading {}",
                    sample.latitude,
                    sample.longitude,
                    sample.heading
                );
                sample
            })
            .fold(Swath::default(), |swath, sample| swath.push(sample, distance_m));

        log::debug!(
            "sampled {} frame(s) every {frame_duration} ms",
            swath.track.len()
        );
        swath
    }
}
