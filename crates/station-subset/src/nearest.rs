//! Nearest-station search.

use ncss_common::{lon_normal, LatLonPoint};

use crate::station::Station;

/// Squared angular distance from `target` to a station, in radians².
///
/// Uses an equirectangular approximation: the longitude difference is scaled
/// by the cosine of the target latitude, and the station longitude is first
/// brought within 180° of the target's.
pub fn distance_metric(target: &LatLonPoint, station: &Station) -> f64 {
    let cos_lat = target.lat.to_radians().cos();
    let dy = (station.lat - target.lat).to_radians();
    let dx = cos_lat * (lon_normal(station.lon, target.lon) - target.lon).to_radians();
    dy * dy + dx * dx
}

/// The candidate closest to `target`. Ties go to the earliest candidate.
///
/// Returns `None` only when `candidates` is empty.
pub fn find_closest<'a, T: AsRef<Station>>(
    candidates: impl IntoIterator<Item = &'a T>,
    target: &LatLonPoint,
) -> Option<&'a T>
where
    T: 'a,
{
    let mut best: Option<(&'a T, f64)> = None;
    for candidate in candidates {
        let d = distance_metric(target, candidate.as_ref());
        match best {
            Some((_, best_d)) if d >= best_d => {}
            _ => best = Some((candidate, d)),
        }
    }
    best.map(|(candidate, _)| candidate)
}
