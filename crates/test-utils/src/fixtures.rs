//! Fixed test data shared across crates.

/// Stations as (name, latitude, longitude).
pub mod stations {
    /// A small Colorado network.
    pub const COLORADO: [(&str, f64, f64); 4] = [
        ("KDEN", 39.85, -104.66),
        ("KBJC", 39.91, -105.12),
        ("KCOS", 38.81, -104.70),
        ("KGJT", 39.12, -108.53),
    ];

    /// Unit triangle used by nearest-station checks.
    pub const TRIANGLE: [(&str, f64, f64); 3] = [
        ("origin", 0.0, 0.0),
        ("east", 0.0, 10.0),
        ("north", 10.0, 0.0),
    ];

    /// Two stations either side of the antimeridian.
    pub const DATELINE: [(&str, f64, f64); 2] = [("west_of_line", 0.0, 179.0), ("east_of_line", 0.0, -179.0)];
}

/// Bounding boxes as (west, south, east, north).
pub mod bbox {
    pub const GLOBAL: (f64, f64, f64, f64) = (-180.0, -90.0, 180.0, 90.0);

    /// Front Range, covers KDEN, KBJC and KCOS but not KGJT.
    pub const FRONT_RANGE: (f64, f64, f64, f64) = (-106.0, 38.5, -104.0, 40.5);

    /// Crosses the antimeridian.
    pub const PACIFIC: (f64, f64, f64, f64) = (160.0, -50.0, -140.0, 50.0);

    pub const POINT: (f64, f64, f64, f64) = (0.0, 0.0, 0.0, 0.0);
}

/// Vertical coordinate values.
pub mod levels {
    /// Mandatory pressure levels in hPa, surface first.
    pub const PRESSURE_HPA: [f64; 8] = [1000.0, 925.0, 850.0, 700.0, 500.0, 300.0, 250.0, 200.0];

    /// Ocean depths in meters, increasing downward.
    pub const DEPTH_M: [f64; 6] = [0.0, 10.0, 20.0, 50.0, 100.0, 200.0];
}
