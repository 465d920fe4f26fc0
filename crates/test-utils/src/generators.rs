//! Synthetic data generators.
//!
//! Values follow simple, predictable patterns so tests can check results
//! without storing expected arrays.

use chrono::{DateTime, Duration, TimeZone, Utc};

/// `count` timestamps spaced `step_minutes` apart, starting at `start`.
pub fn time_series(start: DateTime<Utc>, step_minutes: i64, count: usize) -> Vec<DateTime<Utc>> {
    (0..count)
        .map(|i| start + Duration::minutes(step_minutes * i as i64))
        .collect()
}

/// Hourly timestamps starting at midnight UTC on the given day.
pub fn hourly_times(year: i32, month: u32, day: u32, count: usize) -> Vec<DateTime<Utc>> {
    match Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).single() {
        Some(start) => time_series(start, 60, count),
        None => Vec::new(),
    }
}

/// Values for a (time, level, y, x) cube in row-major order.
///
/// Each value is `t * 1000 + z * 100 + y * 10 + x`, so a slice can be
/// verified from its indices alone.
pub fn indexed_cube(nt: usize, nz: usize, ny: usize, nx: usize) -> Vec<f64> {
    let mut data = Vec::with_capacity(nt * nz * ny * nx);
    for t in 0..nt {
        for z in 0..nz {
            for y in 0..ny {
                for x in 0..nx {
                    data.push((t * 1000 + z * 100 + y * 10 + x) as f64);
                }
            }
        }
    }
    data
}

/// A regular grid of (name, lat, lon) stations.
pub fn station_grid(rows: usize, cols: usize, spacing_deg: f64) -> Vec<(String, f64, f64)> {
    let mut stations = Vec::with_capacity(rows * cols);
    for r in 0..rows {
        for c in 0..cols {
            stations.push((
                format!("STN{:03}{:03}", r, c),
                r as f64 * spacing_deg,
                c as f64 * spacing_deg,
            ));
        }
    }
    stations
}
