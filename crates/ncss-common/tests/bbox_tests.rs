//! Bounding box behaviour relied on by station selection.

use ncss_common::bbox::{BboxParseError, BoundingBox};

// ============================================================================
// Parsing
// ============================================================================

#[test]
fn test_parse_integer_edges() {
    let bbox = BoundingBox::from_query_string("0,0,100,80").unwrap();
    assert_eq!(bbox, BoundingBox::new(0.0, 0.0, 100.0, 80.0));
}

#[test]
fn test_parse_tolerates_whitespace() {
    let bbox = BoundingBox::from_query_string(" -105.5, 39.0, -104.0 , 41.25 ").unwrap();
    assert!((bbox.min_lon - (-105.5)).abs() < 1e-9);
    assert!((bbox.max_lat - 41.25).abs() < 1e-9);
}

#[test]
fn test_parse_too_few_parts() {
    let result = BoundingBox::from_query_string("0,0,100");
    assert!(matches!(result, Err(BboxParseError::InvalidFormat(_))));
}

#[test]
fn test_parse_too_many_parts() {
    let result = BoundingBox::from_query_string("0,0,100,80,5");
    assert!(matches!(result, Err(BboxParseError::InvalidFormat(_))));
}

#[test]
fn test_parse_invalid_number() {
    let result = BoundingBox::from_query_string("abc,0,100,80");
    assert!(matches!(result, Err(BboxParseError::InvalidNumber(_))));
}

#[test]
fn test_parse_latitude_out_of_range() {
    let result = BoundingBox::from_query_string("0,-95,10,10");
    assert!(matches!(result, Err(BboxParseError::OutOfRange(_))));
}

// ============================================================================
// Containment
// ============================================================================

#[test]
fn test_contains_inside() {
    let bbox = BoundingBox::new(-110.0, 35.0, -100.0, 45.0);
    assert!(bbox.contains_point(-105.0, 40.0));
}

#[test]
fn test_contains_every_edge() {
    let bbox = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
    assert!(bbox.contains_point(0.0, 5.0));
    assert!(bbox.contains_point(10.0, 5.0));
    assert!(bbox.contains_point(5.0, 0.0));
    assert!(bbox.contains_point(5.0, 10.0));
}

#[test]
fn test_contains_every_corner() {
    let bbox = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
    assert!(bbox.contains_point(0.0, 0.0));
    assert!(bbox.contains_point(10.0, 0.0));
    assert!(bbox.contains_point(0.0, 10.0));
    assert!(bbox.contains_point(10.0, 10.0));
}

#[test]
fn test_contains_outside() {
    let bbox = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
    assert!(!bbox.contains_point(-1.0, 5.0));
    assert!(!bbox.contains_point(11.0, 5.0));
    assert!(!bbox.contains_point(5.0, -1.0));
    assert!(!bbox.contains_point(5.0, 11.0));
}

#[test]
fn test_degenerate_point_box() {
    let bbox = BoundingBox::new(5.0, 5.0, 5.0, 5.0);
    assert_eq!(bbox.width(), 0.0);
    assert_eq!(bbox.height(), 0.0);
    assert!(bbox.contains_point(5.0, 5.0));
    assert!(!bbox.contains_point(5.0, 5.0001));
}

#[test]
fn test_global_box_contains_dateline() {
    let bbox = BoundingBox::new(-180.0, -90.0, 180.0, 90.0);
    assert!(bbox.contains_point(180.0, 0.0));
    assert!(bbox.contains_point(-180.0, 0.0));
    assert!(bbox.contains_point(0.0, 90.0));
}

#[test]
fn test_center_of_antimeridian_box() {
    let bbox = BoundingBox::new(170.0, -10.0, -170.0, 10.0);
    let (lon, lat) = bbox.center();
    assert!((lon.abs() - 180.0).abs() < 1e-9);
    assert_eq!(lat, 0.0);
}

#[test]
fn test_serde_roundtrip_field_names() {
    let bbox = BoundingBox::new(1.0, 2.0, 3.0, 4.0);
    let json = serde_json::to_string(&bbox).unwrap();
    assert!(json.contains("\"min_lon\":1.0"));
    assert!(json.contains("\"max_lat\":4.0"));
}

// ============================================================================
// Shared fixtures
// ============================================================================

fn fixture((west, south, east, north): (f64, f64, f64, f64)) -> BoundingBox {
    BoundingBox::new(west, south, east, north)
}

#[test]
fn test_global_fixture_contains_both_datelines() {
    let global = fixture(test_utils::bbox::GLOBAL);
    assert!(global.validate().is_ok());
    assert!(global.contains_point(-180.0, 0.0));
    assert!(global.contains_point(180.0, 0.0));
    assert!(global.contains_point(0.0, 90.0));
}

#[test]
fn test_pacific_fixture_wraps() {
    let pacific = fixture(test_utils::bbox::PACIFIC);
    assert!(pacific.crosses_antimeridian());
    test_utils::assert_approx_eq!(pacific.width(), 60.0, 1e-9);
    assert!(pacific.contains_point(175.0, 0.0));
    assert!(pacific.contains_point(-150.0, 0.0));
    assert!(!pacific.contains_point(0.0, 0.0));
}

#[test]
fn test_point_fixture_contains_only_itself() {
    let point = fixture(test_utils::bbox::POINT);
    assert!(point.contains_point(0.0, 0.0));
    assert!(!point.contains_point(0.001, 0.0));
}

// ============================================================================
// Edges entered with two decimals
// ============================================================================

fn hundredths(v: i32) -> f64 {
    v as f64 / 100.0
}

#[test]
fn test_stations_on_decimal_edges_are_inside() {
    let bbox = BoundingBox::new(-17.95, 0.0, -7.96, 10.0);
    assert!(bbox.contains_point(-17.95, 5.0));
    assert!(bbox.contains_point(-7.96, 5.0));
}

#[test]
fn test_decimal_edge_sweep() {
    let mut misses = Vec::new();
    for w in (-18000..=18000).step_by(7) {
        for e in (w..=18000).step_by(13) {
            let (west, east) = (hundredths(w), hundredths(e));
            let bbox = BoundingBox::new(west, -1.0, east, 1.0);
            if !bbox.contains_point(west, 0.0) || !bbox.contains_point(east, 0.0) {
                misses.push((west, east));
            }
        }
    }
    assert!(misses.is_empty(), "edge stations dropped for {:?}", &misses[..misses.len().min(5)]);
}

#[test]
fn test_decimal_edge_sweep_across_antimeridian() {
    let mut misses = Vec::new();
    for w in (15000..=18000).step_by(3) {
        for e in (-18000..-15000).step_by(7) {
            let (west, east) = (hundredths(w), hundredths(e));
            let bbox = BoundingBox::new(west, -1.0, east, 1.0);
            if !bbox.contains_point(west, 0.0) || !bbox.contains_point(east, 0.0) {
                misses.push((west, east));
            }
        }
    }
    assert!(misses.is_empty(), "edge stations dropped for {:?}", &misses[..misses.len().min(5)]);
}
