//! JSON track reader
//!
//! Accepts a JSON array of records. Each record is either a row array in the
//! recorder layout (see the `*_COLUMN` constants, other columns are ignored)
//! or an object with `timestamp`, `latitude`, `longitude` and `heading`
//! fields.

use crate::error::{Error, Result, Warning};
use crate::interpolate::normalize_heading;
use crate::track::Track;
use crate::types::TrackPoint;
use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

pub const TIMESTAMP_COLUMN: usize = 0;
pub const LATITUDE_COLUMN: usize = 1;
pub const LONGITUDE_COLUMN: usize = 2;
pub const HEADING_COLUMN: usize = 8;

/// Read a track from any JSON source
///
/// Issues that were recovered from are pushed to `warnings`.
pub fn read_track<R: Read>(reader: R, warnings: &mut Vec<Warning>) -> Result<Track> {
    let records: Vec<Value> = serde_json::from_reader(reader)?;
    track_from_records(records, warnings)
}

/// Read a track from a JSON string
pub fn parse_track(json: &str, warnings: &mut Vec<Warning>) -> Result<Track> {
    let records: Vec<Value> = serde_json::from_str(json)?;
    track_from_records(records, warnings)
}

/// Read a track from a JSON file
pub fn read_track_file<P: AsRef<Path>>(path: P, warnings: &mut Vec<Warning>) -> Result<Track> {
    let file = File::open(path)?;
    read_track(BufReader::new(file), warnings)
}

fn track_from_records(records: Vec<Value>, warnings: &mut Vec<Warning>) -> Result<Track> {
    let mut points: Vec<TrackPoint> = Vec::with_capacity(records.len());

    for (index, record) in records.into_iter().enumerate() {
        let mut point = parse_record(index, record)?;

        let normalized = normalize_heading(point.heading);
        if normalized != point.heading {
            warnings.push(Warning::HeadingNormalized {
                index,
                heading: point.heading,
                normalized,
            });
            point.heading = normalized;
        }

        if let Some(previous) = points.last() {
            if previous.timestamp == point.timestamp {
                warnings.push(Warning::DuplicateTimestamp {
                    index,
                    timestamp: point.timestamp,
                });
            }
        }

        points.push(point);
    }

    Track::new(points)
}

fn parse_record(index: usize, record: Value) -> Result<TrackPoint> {
    match record {
        Value::Array(row) => {
            let column = |column: usize, name: &str| {
                row.get(column)
                    .and_then(Value::as_f64)
                    .ok_or_else(|| Error::InvalidRecord {
                        index,
                        reason: format!("missing or non-numeric {name} in column {column}"),
                    })
            };

            Ok(TrackPoint {
                timestamp: column(TIMESTAMP_COLUMN, "timestamp")?,
                latitude: column(LATITUDE_COLUMN, "latitude")?,
                longitude: column(LONGITUDE_COLUMN, "longitude")?,
                heading: column(HEADING_COLUMN, "heading")?,
            })
        }
        Value::Object(_) => serde_json::from_value(record).map_err(|err| Error::InvalidRecord {
            index,
            reason: err.to_string(),
        }),
        other => Err(Error::InvalidRecord {
            index,
            reason: format!("expected an array or an object, found {other}"),
        }),
    }
}
