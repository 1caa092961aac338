//! GeoJSON encoding of coverage geometries

use crate::error::{Error, Result};
use geo::{Coord, LineString, MultiPolygon};
use geojson::{Feature, Geometry, JsonObject, JsonValue, Value};

/// Fill color attached to coverage polygons
pub const COVERAGE_FILL: &str = "#0000ff";

/// Encode a line as a GeoJSON `LineString` feature with empty properties
pub fn line_feature(line: &LineString<f64>) -> Feature {
    feature(Geometry::new(Value::from(line)), JsonObject::new())
}

/// Encode a coverage polygon as a GeoJSON feature carrying the fill color
///
/// A single-part polygon is encoded as `Polygon`, anything else as
/// `MultiPolygon`.
pub fn polygon_feature(polygon: &MultiPolygon<f64>) -> Feature {
    let value = match polygon.0.as_slice() {
        [single] => Value::from(single),
        _ => Value::from(polygon),
    };

    let mut properties = JsonObject::new();
    properties.insert("fill".to_string(), JsonValue::from(COVERAGE_FILL));
    feature(Geometry::new(value), properties)
}

fn feature(geometry: Geometry, properties: JsonObject) -> Feature {
    Feature {
        bbox: None,
        geometry: Some(geometry),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

/// Decode the `LineString` geometry of a GeoJSON feature
///
/// # Errors
///
/// - `Error::MissingGeometry` if the feature has no geometry
/// - `Error::UnexpectedGeometry` if the geometry is not a `LineString`
/// - `Error::InvalidPosition` if a position has fewer than two ordinates
pub fn decode_line(feature: &Feature) -> Result<LineString<f64>> {
    let geometry = feature.geometry.as_ref().ok_or(Error::MissingGeometry)?;

    let Value::LineString(positions) = &geometry.value else {
        return Err(Error::UnexpectedGeometry(
            geometry_type(&geometry.value).to_string(),
        ));
    };

    positions
        .iter()
        .map(|position| match position.as_slice() {
            [x, y, ..] => Ok(Coord { x: *x, y: *y }),
            _ => Err(Error::InvalidPosition(position.clone())),
        })
        .collect::<Result<Vec<_>>>()
        .map(LineString::new)
}

fn geometry_type(value: &Value) -> &'static str {
    match value {
        Value::Point(_) => "Point",
        Value::MultiPoint(_) => "MultiPoint",
        Value::LineString(_) => "LineString",
        Value::MultiLineString(_) => "MultiLineString",
        Value::Polygon(_) => "Polygon",
        Value::MultiPolygon(_) => "MultiPolygon",
        Value::GeometryCollection(_) => "GeometryCollection",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_matches, assert_ok};
    use geo::{LineString, Polygon};
    use insta::assert_snapshot;

    fn line() -> LineString<f64> {
        LineString::from(vec![(1.0, 2.0), (3.0, 4.0)])
    }

    #[test]
    fn line_feature_has_empty_properties() {
        let feature = line_feature(&line());
        assert_eq!(feature.properties, Some(JsonObject::new()));
        assert_matches!(
            feature.geometry.map(|geometry| geometry.value),
            Some(Value::LineString(_))
        );
    }

    #[test]
    fn line_round_trip() {
        let feature = line_feature(&line());
        let decoded = assert_ok!(decode_line(&feature));
        assert_eq!(decoded, line());
    }

    #[test]
    fn polygon_feature_single_part() {
        let square = Polygon::new(
            LineString::from(vec![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 0.0)]),
            vec![],
        );
        let feature = polygon_feature(&MultiPolygon::new(vec![square]));
        let properties = feature.properties.clone().unwrap();
        assert_eq!(properties["fill"], JsonValue::from("#0000ff"));
        assert_matches!(
            feature.geometry.map(|geometry| geometry.value),
            Some(Value::Polygon(_))
        );
    }

    #[test]
    fn polygon_feature_multiple_parts() {
        let square = |offset: f64| {
            Polygon::new(
                LineString::from(vec![
                    (offset, 0.0),
                    (offset + 1.0, 0.0),
                    (offset + 1.0, 1.0),
                    (offset, 0.0),
                ]),
                vec![],
            )
        };
        let feature = polygon_feature(&MultiPolygon::new(vec![square(0.0), square(5.0)]));
        assert_matches!(
            feature.geometry.map(|geometry| geometry.value),
            Some(Value::MultiPolygon(_))
        );
    }

    #[test]
    fn decode_missing_geometry() {
        let feature = Feature {
            bbox: None,
            geometry: None,
            id: None,
            properties: None,
            foreign_members: None,
        };
        assert_matches!(decode_line(&feature), Err(Error::MissingGeometry));
    }

    #[test]
    fn decode_unexpected_geometry() {
        let feature = feature(
            Geometry::new(Value::Point(vec![1.0, 2.0])),
            JsonObject::new(),
        );
        let err = decode_line(&feature).unwrap_err();
        assert_snapshot!(err.to_string(), @"Expected a LineString geometry, found Point");
    }

    #[test]
    fn decode_short_position() {
        let feature = feature(
            Geometry::new(Value::LineString(vec![vec![1.0, 2.0], vec![3.0]])),
            JsonObject::new(),
        );
        assert_matches!(decode_line(&feature), Err(Error::InvalidPosition(_)));
    }
}
