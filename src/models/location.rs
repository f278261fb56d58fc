//! Location model for geographic coordinates

use serde::{Deserialize, Serialize};

/// GeoJSON point as returned by the API
///
/// Coordinates follow GeoJSON order: `[longitude, latitude]`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Location {
    /// Geometry type, `Point` in practice
    #[serde(rename = "type")]
    pub kind: String,
    /// `[longitude, latitude]` in decimal degrees
    pub coordinates: Vec<f64>,
}

impl Location {
    /// Create a point location
    #[must_use]
    pub fn point(longitude: f64, latitude: f64) -> Self {
        Self {
            kind: "Point".to_string(),
            coordinates: vec![longitude, latitude],
        }
    }

    /// Longitude in decimal degrees, if present
    #[must_use]
    pub fn longitude(&self) -> Option<f64> {
        self.coordinates.first().copied()
    }

    /// Latitude in decimal degrees, if present
    #[must_use]
    pub fn latitude(&self) -> Option<f64> {
        self.coordinates.get(1).copied()
    }

    /// Format location as `lat, lon`
    #[must_use]
    pub fn format_coordinates(&self) -> String {
        match (self.latitude(), self.longitude()) {
            (Some(lat), Some(lon)) => format!("{lat:.4}, {lon:.4}"),
            _ => "unknown".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geojson_order() {
        let location: Location =
            serde_json::from_str(r#"{"type":"Point","coordinates":[-118.2417,34.0669]}"#)
                .unwrap();
        assert_eq!(location, Location::point(-118.2417, 34.0669));
        assert_eq!(location.longitude(), Some(-118.2417));
        assert_eq!(location.latitude(), Some(34.0669));
        assert_eq!(location.format_coordinates(), "34.0669, -118.2417");
    }

    #[test]
    fn test_missing_coordinates() {
        let location = Location {
            kind: "Point".to_string(),
            coordinates: vec![],
        };
        assert_eq!(location.latitude(), None);
        assert_eq!(location.format_coordinates(), "unknown");
    }
}
