//! Axis classification, value layout and index lookup.

use grid_coverage::{AxisType, CoordAxis, RawAxis, Spacing};
use test_utils::{assert_approx_eq, assert_slice_approx_eq, levels};

fn axis(raw: RawAxis) -> CoordAxis {
    CoordAxis::from_raw(&raw).expect("valid axis")
}

// ============================================================================
// Regular axes
// ============================================================================

#[test]
fn test_regular_lookup_interior() {
    let lon = axis(RawAxis::points("lon", AxisType::Lon, vec![255.0, 255.5, 256.0]));
    assert_eq!(lon.spacing(), Spacing::Regular);
    assert_eq!(lon.find_index_for_value(255.2), 0);
    assert_eq!(lon.find_index_for_value(255.3), 1);
    assert_eq!(lon.find_index_for_value(256.0), 2);
}

#[test]
fn test_regular_lookup_clamps_both_ends() {
    let lon = axis(RawAxis::points("lon", AxisType::Lon, vec![255.0, 255.5, 256.0]));
    assert_eq!(lon.find_index_for_value(-1.0e9), 0);
    assert_eq!(lon.find_index_for_value(1.0e9), 2);
}

#[test]
fn test_regular_descending() {
    let lat = axis(RawAxis::points("lat", AxisType::Lat, vec![40.0, 39.5, 39.0]));
    assert_eq!(lat.spacing(), Spacing::Regular);
    assert!(!lat.is_ascending());
    assert_approx_eq!(lat.resolution().unwrap(), -0.5, 1e-12);
    assert_eq!(lat.find_index_for_value(39.8), 0);
    assert_eq!(lat.find_index_for_value(39.6), 1);
    assert_eq!(lat.find_index_for_value(45.0), 0);
    assert_eq!(lat.find_index_for_value(30.0), 2);
}

#[test]
fn test_regular_tolerates_rounding_noise() {
    let values: Vec<f64> = (0..10).map(|i| 0.1 * i as f64).collect();
    let raw = RawAxis::points("x", AxisType::GeoX, values);
    assert_eq!(axis(raw).spacing(), Spacing::Regular);
}

#[test]
fn test_regular_edges() {
    let lon = axis(RawAxis::points("lon", AxisType::Lon, vec![0.0, 1.0, 2.0]));
    assert_slice_approx_eq!(lon.coord_edges().unwrap(), vec![-0.5, 0.5, 1.5, 2.5], 1e-12);
}

// ============================================================================
// Irregular point axes
// ============================================================================

#[test]
fn test_pressure_levels() {
    let isobaric = axis(
        RawAxis::points("isobaric", AxisType::Pressure, levels::PRESSURE_HPA.to_vec()).with_units("hPa"),
    );
    assert_eq!(isobaric.spacing(), Spacing::IrregularPoint);
    assert_eq!(isobaric.read_values().unwrap().count(), isobaric.n_values());
    assert_eq!(isobaric.find_index_for_value(500.0), 4);
    assert_eq!(isobaric.find_index_for_value(260.0), 6);
    assert_eq!(isobaric.find_index_for_value(0.0), 7);
    assert_eq!(isobaric.units(), "hPa");
}

#[test]
fn test_depth_levels() {
    let depth = axis(RawAxis::points("depth", AxisType::GeoZ, levels::DEPTH_M.to_vec()));
    assert_eq!(depth.spacing(), Spacing::IrregularPoint);
    assert_eq!(depth.find_index_for_value(14.0), 1);
    assert_eq!(depth.find_index_for_value(140.0), 4);
    assert_eq!(depth.find_index_for_value(151.0), 5);
}

// ============================================================================
// Interval axes
// ============================================================================

#[test]
fn test_contiguous_four_cells_yield_five_edges() {
    let raw = RawAxis::points("time1", AxisType::Time, vec![1.0, 2.0, 4.0, 8.0])
        .with_bounds(vec![0.0, 1.5, 3.0, 6.0], vec![1.5, 3.0, 6.0, 10.0]);
    let time = axis(raw);

    assert_eq!(time.spacing(), Spacing::ContiguousInterval);
    let edges: Vec<f64> = time.read_values().unwrap().collect();
    assert_eq!(edges, vec![0.0, 1.5, 3.0, 6.0, 10.0]);
    assert_eq!(time.spacing().value_count(time.n_values()), edges.len());
}

#[test]
fn test_contiguous_lookup() {
    let raw = RawAxis::points("time1", AxisType::Time, vec![1.0, 2.0, 4.0, 8.0])
        .with_bounds(vec![0.0, 1.5, 3.0, 6.0], vec![1.5, 3.0, 6.0, 10.0]);
    let time = axis(raw);

    assert_eq!(time.find_index_for_value(2.0), 1);
    // shared edge goes to the lower cell
    assert_eq!(time.find_index_for_value(3.0), 1);
    assert_eq!(time.find_index_for_value(-5.0), 0);
    assert_eq!(time.find_index_for_value(50.0), 3);
    assert_eq!(time.coord_value(3), Some(8.0));
}

#[test]
fn test_discontiguous_three_cells_yield_six_values() {
    let raw = RawAxis::points("time2", AxisType::Time, vec![1.0, 5.0, 9.0])
        .with_bounds(vec![0.0, 4.0, 8.0], vec![2.0, 6.0, 10.0]);
    let time = axis(raw);

    assert_eq!(time.spacing(), Spacing::DiscontiguousInterval);
    let bounds: Vec<f64> = time.read_values().unwrap().collect();
    assert_eq!(bounds, vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
    assert!(time.coord_edges().is_none());
}

#[test]
fn test_discontiguous_lookup() {
    let raw = RawAxis::points("time2", AxisType::Time, vec![1.0, 5.0, 9.0])
        .with_bounds(vec![0.0, 4.0, 8.0], vec![2.0, 6.0, 10.0]);
    let time = axis(raw);

    assert_eq!(time.find_index_for_value(5.5), 1);
    // equidistant from the first two midpoints
    assert_eq!(time.find_index_for_value(3.0), 0);
    assert_eq!(time.find_index_for_value(7.5), 2);
    assert_eq!(time.find_index_for_value(100.0), 2);
    assert_eq!(time.coord_values(), vec![1.0, 5.0, 9.0]);
}
