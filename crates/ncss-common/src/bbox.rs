//! Latitude/longitude bounding box used for spatial station selection.

use serde::{Deserialize, Serialize};

use crate::geo::lon_normal;

/// A geographic bounding box in degrees.
///
/// Longitudes are not required to be ordered: a box whose `min_lon` is greater
/// than its `max_lon` crosses the antimeridian (e.g. `170,-10,-170,10`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
}

impl BoundingBox {
    /// Create a new bounding box from corner coordinates.
    pub fn new(min_lon: f64, min_lat: f64, max_lon: f64, max_lat: f64) -> Self {
        Self {
            min_lon,
            min_lat,
            max_lon,
            max_lat,
        }
    }

    /// Build a box from the four NCSS edge parameters.
    pub fn from_edges(north: f64, south: f64, east: f64, west: f64) -> Self {
        Self::new(west, south, east, north)
    }

    /// Parse a `west,south,east,north` string.
    pub fn from_query_string(s: &str) -> Result<Self, BboxParseError> {
        let parts: Vec<&str> = s.split(',').collect();
        if parts.len() != 4 {
            return Err(BboxParseError::InvalidFormat(s.to_string()));
        }

        let parse = |p: &str| {
            p.trim()
                .parse::<f64>()
                .map_err(|_| BboxParseError::InvalidNumber(p.to_string()))
        };

        let bbox = Self::new(
            parse(parts[0])?,
            parse(parts[1])?,
            parse(parts[2])?,
            parse(parts[3])?,
        );
        bbox.validate()?;
        Ok(bbox)
    }

    /// Check latitude ranges and ordering.
    pub fn validate(&self) -> Result<(), BboxParseError> {
        for lat in [self.min_lat, self.max_lat] {
            if !(-90.0..=90.0).contains(&lat) {
                return Err(BboxParseError::OutOfRange(format!(
                    "Latitude {} is out of range [-90, 90]",
                    lat
                )));
            }
        }
        if self.min_lat > self.max_lat {
            return Err(BboxParseError::OutOfRange(format!(
                "South edge {} is north of north edge {}",
                self.min_lat, self.max_lat
            )));
        }
        if !self.min_lon.is_finite() || !self.max_lon.is_finite() {
            return Err(BboxParseError::InvalidNumber(format!(
                "{},{}",
                self.min_lon, self.max_lon
            )));
        }
        Ok(())
    }

    /// True when the box wraps across the 180° meridian.
    pub fn crosses_antimeridian(&self) -> bool {
        self.min_lon > self.max_lon
    }

    /// Longitude extent in degrees, accounting for antimeridian crossing.
    pub fn width(&self) -> f64 {
        if self.crosses_antimeridian() {
            self.max_lon + 360.0 - self.min_lon
        } else {
            self.max_lon - self.min_lon
        }
    }

    /// Latitude extent in degrees.
    pub fn height(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    /// Center point as (lon, lat).
    pub fn center(&self) -> (f64, f64) {
        let lon = lon_normal(self.min_lon + self.width() / 2.0, 0.0);
        (lon, (self.min_lat + self.max_lat) / 2.0)
    }

    /// Check if a point lies inside the box. Edges and corners are inside.
    ///
    /// Longitudes are compared against the stored edges, shifting the point
    /// by whole turns only when needed, so a station at `190` is found in a
    /// box spanning `-175..-165`.
    pub fn contains_point(&self, lon: f64, lat: f64) -> bool {
        if lat < self.min_lat || lat > self.max_lat {
            return false;
        }

        if self.crosses_antimeridian() {
            lon_within(lon, self.min_lon, self.max_lon + 360.0)
                || lon_within(lon, self.min_lon - 360.0, self.max_lon)
        } else {
            lon_within(lon, self.min_lon, self.max_lon)
        }
    }
}

/// True when `lon`, or `lon` moved by a whole number of turns, lies in
/// `[west, east]`.
fn lon_within(lon: f64, west: f64, east: f64) -> bool {
    if lon >= west && lon <= east {
        return true;
    }
    let turns = ((west - lon) / 360.0).ceil();
    let shifted = lon + 360.0 * turns;
    shifted >= west && shifted <= east
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum BboxParseError {
    #[error("Invalid bounding box format: {0}. Expected 'west,south,east,north'")]
    InvalidFormat(String),

    #[error("Invalid number in bounding box: {0}")]
    InvalidNumber(String),

    #[error("Bounding box out of range: {0}")]
    OutOfRange(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_query_bbox() {
        let bbox = BoundingBox::from_query_string("-125.0,24.0,-66.0,50.0").unwrap();
        assert_eq!(bbox.min_lon, -125.0);
        assert_eq!(bbox.min_lat, 24.0);
        assert_eq!(bbox.max_lon, -66.0);
        assert_eq!(bbox.max_lat, 50.0);
    }

    #[test]
    fn test_from_edges_matches_corner_order() {
        let bbox = BoundingBox::from_edges(50.0, 24.0, -66.0, -125.0);
        assert_eq!(bbox, BoundingBox::new(-125.0, 24.0, -66.0, 50.0));
    }

    #[test]
    fn test_contains_boundary_inclusive() {
        let bbox = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        assert!(bbox.contains_point(0.0, 0.0));
        assert!(bbox.contains_point(10.0, 10.0));
        assert!(bbox.contains_point(10.0, 0.0));
        assert!(!bbox.contains_point(10.000001, 5.0));
    }

    #[test]
    fn test_antimeridian_box() {
        let bbox = BoundingBox::new(170.0, -10.0, -170.0, 10.0);
        assert!(bbox.crosses_antimeridian());
        assert_eq!(bbox.width(), 20.0);
        assert!(bbox.contains_point(175.0, 0.0));
        assert!(bbox.contains_point(-175.0, 0.0));
        assert!(bbox.contains_point(180.0, 0.0));
        assert!(!bbox.contains_point(0.0, 0.0));
        assert!(!bbox.contains_point(160.0, 0.0));
    }

    #[test]
    fn test_contains_unnormalized_longitude() {
        let bbox = BoundingBox::new(-175.0, 0.0, -165.0, 10.0);
        assert!(bbox.contains_point(190.0, 5.0));
    }

    #[test]
    fn test_fractional_edges_inclusive() {
        let bbox = BoundingBox::new(-17.95, 0.0, -7.96, 10.0);
        assert!(bbox.contains_point(-17.95, 5.0));
        assert!(bbox.contains_point(-7.96, 5.0));
        assert!(!bbox.contains_point(-7.959, 5.0));
        assert!(!bbox.contains_point(-17.951, 5.0));
    }

    #[test]
    fn test_fractional_edges_across_antimeridian() {
        let bbox = BoundingBox::new(172.37, -3.1, -168.41, 3.1);
        assert!(bbox.contains_point(172.37, 0.0));
        assert!(bbox.contains_point(-168.41, 0.0));
        assert!(bbox.contains_point(180.0, 0.0));
        assert!(!bbox.contains_point(172.36, 0.0));
        assert!(!bbox.contains_point(-168.4, 0.0));
    }

    #[test]
    fn test_reject_inverted_latitudes() {
        let result = BoundingBox::from_query_string("0,20,10,10");
        assert!(matches!(result, Err(BboxParseError::OutOfRange(_))));
    }
}
