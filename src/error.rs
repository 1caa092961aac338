use std::io;

/// Unrecoverable errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Track contains no points")]
    EmptyTrack,

    #[error("Track point {index} is out of order: timestamp {timestamp} follows {previous}")]
    OutOfOrder {
        index: usize,
        previous: f64,
        timestamp: f64,
    },

    #[error("Track point {index} has a non-finite {field}")]
    NonFiniteValue { index: usize, field: &'static str },

    #[error("Invalid track record {index}: {reason}")]
    InvalidRecord { index: usize, reason: String },

    #[error("Invalid frame rate: {0} (expected a positive, finite number of samples per second)")]
    InvalidFrameRate(f64),

    #[error("Invalid distance: {0} meters")]
    InvalidDistance(f64),

    #[error("Invalid buffer coefficient: {0}")]
    InvalidBufferCoefficient(f64),

    #[error("Invalid quadrant segment count: {0}")]
    InvalidQuadrantSegments(u32),

    #[error("Track would produce {samples} samples, more than the limit of {limit}")]
    TooManySamples { samples: u64, limit: u64 },

    #[error("Buffer operation failed: {0}")]
    BufferFailed(String),

    #[error("Feature has no geometry")]
    MissingGeometry,

    #[error("Expected a LineString geometry, found {0}")]
    UnexpectedGeometry(String),

    #[error("Invalid position: {0:?}")]
    InvalidPosition(Vec<f64>),
}

/// Non-fatal issues encountered during lenient parsing
#[derive(Debug, Clone, PartialEq)]
pub enum Warning {
    /// Heading outside of [0, 360) degrees, wrapped into range
    HeadingNormalized {
        index: usize,
        heading: f64,
        normalized: f64,
    },

    /// Record shares its timestamp with the previous record, which leaves a
    /// zero-duration interpolation bracket
    DuplicateTimestamp { index: usize, timestamp: f64 },
}

pub type Result<T> = std::result::Result<T, Error>;
