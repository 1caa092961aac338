#![doc = include_str!("../README.md")]

pub use crate::engine::{BufferEngine, DEFAULT_QUADRANT_SEGMENTS, GeoBuffer};
pub use crate::error::{Error, Result, Warning};
pub use crate::feature::COVERAGE_FILL;
pub use crate::interpolate::{interpolate_heading, interpolation_factor, normalize_heading};
pub use crate::reader::{parse_track, read_track, read_track_file};
pub use crate::surface::{
    BUFFER_COEFFICIENT, DEFAULT_DISTANCE_IN_METERS, DEFAULT_FRAME_RATE, MAX_SAMPLES, Surface,
    SurfaceOptions,
};
pub use crate::track::Track;
pub use crate::types::*;

mod engine;
mod error;
pub mod feature;
pub mod geodesy;
mod interpolate;
pub mod reader;
mod surface;
mod track;
mod types;
