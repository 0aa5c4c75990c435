//! The administrative region boundary used to geofence candidates.
//!
//! Loaded once at startup from a GeoJSON file and passed by reference into
//! every containment check — there is deliberately no global region state.

use std::path::Path;

use geo::{Intersects, MultiPolygon, Point};
use thiserror::Error;

use crate::types::Coordinate;

/// Errors raised while loading a region boundary. These are fatal at
/// startup: the pipeline cannot classify anything without a boundary.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("cannot read region file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("region file is not valid GeoJSON: {0}")]
    Parse(#[from] geojson::Error),

    #[error("region file {path} contains no polygon feature")]
    NoPolygon { path: String },
}

/// An immutable region boundary supporting boundary-inclusive
/// point-in-polygon queries.
#[derive(Debug, Clone)]
pub struct Region {
    boundary: MultiPolygon<f64>,
}

impl Region {
    /// Loads the region from a GeoJSON file, taking the first feature that
    /// carries a `Polygon` or `MultiPolygon` geometry.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError`] when the file is missing, malformed, or
    /// holds no polygon feature.
    pub fn from_geojson_file(path: &Path) -> Result<Self, GeometryError> {
        let contents = std::fs::read_to_string(path).map_err(|e| GeometryError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::from_geojson_str(&contents).map_err(|err| match err {
            GeometryError::NoPolygon { .. } => GeometryError::NoPolygon {
                path: path.display().to_string(),
            },
            other => other,
        })
    }

    /// Parses the region from GeoJSON text. Accepts a `FeatureCollection`,
    /// a bare `Feature`, or a bare `Geometry`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Parse`] on malformed GeoJSON and
    /// [`GeometryError::NoPolygon`] when no polygonal geometry is present.
    pub fn from_geojson_str(contents: &str) -> Result<Self, GeometryError> {
        let geojson: geojson::GeoJson = contents.parse()?;

        let geometry = match geojson {
            geojson::GeoJson::FeatureCollection(fc) => {
                fc.features.into_iter().find_map(|f| f.geometry)
            }
            geojson::GeoJson::Feature(feature) => feature.geometry,
            geojson::GeoJson::Geometry(geometry) => Some(geometry),
        }
        .ok_or(GeometryError::NoPolygon {
            path: String::new(),
        })?;

        let boundary = match geo::Geometry::<f64>::try_from(geometry.value)? {
            geo::Geometry::Polygon(polygon) => MultiPolygon(vec![polygon]),
            geo::Geometry::MultiPolygon(multi) => multi,
            _ => {
                return Err(GeometryError::NoPolygon {
                    path: String::new(),
                })
            }
        };

        Ok(Self { boundary })
    }

    /// Boundary-inclusive containment: points exactly on the edge count as
    /// inside. The test point is built longitude-first — swapping the axes
    /// is the classic silent geofencing bug.
    #[must_use]
    pub fn covers(&self, coordinate: Coordinate) -> bool {
        self.boundary
            .intersects(&Point::new(coordinate.lon, coordinate.lat))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Unit square from (100.0, 0.0) to (101.0, 1.0) in lon/lat order.
    const SQUARE: &str = r#"{
        "type": "FeatureCollection",
        "features": [{
            "type": "Feature",
            "properties": {},
            "geometry": {
                "type": "Polygon",
                "coordinates": [[
                    [100.0, 0.0], [101.0, 0.0], [101.0, 1.0], [100.0, 1.0], [100.0, 0.0]
                ]]
            }
        }]
    }"#;

    fn square() -> Region {
        Region::from_geojson_str(SQUARE).expect("valid region fixture")
    }

    #[test]
    fn covers_interior_point() {
        assert!(square().covers(Coordinate { lat: 0.5, lon: 100.5 }));
    }

    #[test]
    fn rejects_exterior_point() {
        assert!(!square().covers(Coordinate { lat: 2.0, lon: 100.5 }));
    }

    #[test]
    fn covers_point_exactly_on_boundary_edge() {
        assert!(square().covers(Coordinate { lat: 0.0, lon: 100.5 }));
    }

    #[test]
    fn covers_point_exactly_on_boundary_vertex() {
        assert!(square().covers(Coordinate { lat: 0.0, lon: 100.0 }));
    }

    #[test]
    fn axes_are_not_swapped() {
        // (lat 100.5, lon 0.5) is far outside; only a lon/lat swap would
        // put it inside the square.
        assert!(!square().covers(Coordinate { lat: 100.5, lon: 0.5 }));
    }

    #[test]
    fn accepts_bare_geometry_document() {
        let region = Region::from_geojson_str(
            r#"{"type": "Polygon", "coordinates": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]]}"#,
        )
        .expect("bare geometry should parse");
        assert!(region.covers(Coordinate { lat: 0.2, lon: 0.5 }));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = Region::from_geojson_str("not geojson").unwrap_err();
        assert!(matches!(err, GeometryError::Parse(_)));
    }

    #[test]
    fn non_polygon_geometry_is_rejected() {
        let err = Region::from_geojson_str(
            r#"{"type": "Point", "coordinates": [100.0, 0.0]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, GeometryError::NoPolygon { .. }));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err =
            Region::from_geojson_file(Path::new("/nonexistent/region.geojson")).unwrap_err();
        assert!(matches!(err, GeometryError::Io { .. }));
    }
}
