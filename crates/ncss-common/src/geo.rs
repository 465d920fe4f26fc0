//! Geographic point and longitude normalization.

use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLonPoint {
    pub lat: f64,
    pub lon: f64,
}

impl LatLonPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Check the point lies on the globe.
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && self.lon.is_finite()
    }
}

/// Normalize `lon` into the 360° window centered on `center`.
///
/// The result differs from `lon` by a multiple of 360 and lies in
/// `[center - 180, center + 180]`.
pub fn lon_normal(lon: f64, center: f64) -> f64 {
    let delta = lon - center;
    center + (delta - 360.0 * (delta / 360.0).round_ties_even())
}
