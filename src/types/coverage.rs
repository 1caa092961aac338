use geo::{LineString, MultiPolygon};
use geojson::{Feature, FeatureCollection};

/// Raw geometries of a coverage computation
///
/// All coordinates are `(longitude, latitude)` in degrees.
#[derive(Debug, Clone, PartialEq)]
pub struct CoverageGeometry {
    /// Track resampled at the frame rate
    pub track_line: LineString<f64>,
    /// Track samples projected outward along their heading
    pub offset_line: LineString<f64>,
    /// Buffered offset line, approximating the swept sensor footprint
    pub polygon: MultiPolygon<f64>,
}

/// Coverage computation result encoded as GeoJSON features
#[derive(Debug, Clone, PartialEq)]
pub struct Coverage {
    pub track_line: Feature,
    pub offset_line: Feature,
    pub polygon: Feature,
}

impl Coverage {
    /// Collect the features in the order track line, offset line, polygon
    pub fn into_feature_collection(self) -> FeatureCollection {
        FeatureCollection {
            bbox: None,
            features: vec![self.track_line, self.offset_line, self.polygon],
            foreign_members: None,
        }
    }
}

impl From<Coverage> for FeatureCollection {
    fn from(coverage: Coverage) -> Self {
        coverage.into_feature_collection()
    }
}
