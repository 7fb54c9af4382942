//! Unit tests for the coordinate codec

use super::*;
use proptest::prelude::*;

fn assert_format_error(result: Result<impl std::fmt::Debug>, expected_shape: &str) {
    match result {
        Err(VolleyError::Format { shape, .. }) => assert_eq!(shape, expected_shape),
        other => panic!("Expected Format error, got {:?}", other),
    }
}

#[test]
fn test_pack_point_format() {
    assert_eq!(pack_point(12.5, 30.0), "12.5|30.0");
    assert_eq!(pack_point(-1.25, 0.0), "-1.25|0.0");
}

#[test]
fn test_pack_line_format() {
    assert_eq!(pack_line(0.0, 0.0, 9.0, 9.0), "0.0|0.0|9.0|9.0");
    assert_eq!(pack_line(1.5, 2.0, 3.25, 4.0), "1.5|2.0|3.25|4.0");
}

#[test]
fn test_unpack_point() {
    assert_eq!(unpack_point("12.5|30.0").unwrap(), (12.5, 30.0));
    // Integer-looking fields are still valid floats
    assert_eq!(unpack_point("3|4").unwrap(), (3.0, 4.0));
}

#[test]
fn test_unpack_line() {
    assert_eq!(
        unpack_line("0.0|0.0|9.0|9.0").unwrap(),
        ((0.0, 0.0), (9.0, 9.0))
    );
}

#[test]
fn test_unpack_tolerates_whitespace_around_fields() {
    assert_eq!(unpack_point(" 1.5 | 2.5 ").unwrap(), (1.5, 2.5));
}

#[test]
fn test_unpack_point_wrong_field_count() {
    assert_format_error(unpack_point("1.0"), "point");
    assert_format_error(unpack_point("1.0|2.0|3.0"), "point");
    assert_format_error(unpack_point(""), "point");
}

#[test]
fn test_unpack_line_wrong_field_count() {
    assert_format_error(unpack_line("1|2|3"), "line");
    assert_format_error(unpack_line("1|2|3|4|5"), "line");
}

#[test]
fn test_unpack_non_numeric_field() {
    assert_format_error(unpack_point("1.0|north"), "point");
    assert_format_error(unpack_line("0.0|0.0|x|9.0"), "line");
    // An empty field is a parse failure, not a missing field
    assert_format_error(unpack_point("1.0|"), "point");
}

#[test]
fn test_format_error_names_offending_input() {
    let err = unpack_line("0.0|0.0|x|9.0").unwrap_err();
    let message = err.to_string();
    assert!(message.contains("0.0|0.0|x|9.0"));
    assert!(message.contains("field 3"));
}

#[test]
fn test_point_display_and_from_str() {
    let point = Point::new(4.5, 2.0);
    assert_eq!(point.to_string(), "4.5|2.0");
    assert_eq!("4.5|2.0".parse::<Point>().unwrap(), point);
    assert!("4.5".parse::<Point>().is_err());
}

#[test]
fn test_line_display_and_from_str() {
    let line = Line::new(Point::new(0.0, 0.0), Point::new(9.0, 9.0));
    assert_eq!(line.to_string(), "0.0|0.0|9.0|9.0");
    assert_eq!("0.0|0.0|9.0|9.0".parse::<Line>().unwrap(), line);
    assert!("0|0|9".parse::<Line>().is_err());
}

#[test]
fn test_tuple_conversions() {
    let line: Line = ((1.0, 2.0), (3.0, 4.0)).into();
    assert_eq!(line.start, Point::new(1.0, 2.0));
    assert_eq!(line.end, Point::new(3.0, 4.0));

    let tuples: ((f64, f64), (f64, f64)) = line.into();
    assert_eq!(tuples, ((1.0, 2.0), (3.0, 4.0)));
}

#[test]
fn test_line_length() {
    let line = Line::new(Point::new(0.0, 0.0), Point::new(3.0, 4.0));
    assert!((line.length() - 5.0).abs() < f64::EPSILON);
}

#[test]
fn test_point_serializes_as_struct() {
    let json = serde_json::to_string(&Point::new(1.5, 2.0)).unwrap();
    assert_eq!(json, r#"{"x":1.5,"y":2.0}"#);
}

fn finite() -> impl Strategy<Value = f64> {
    any::<f64>().prop_filter("finite", |v| v.is_finite())
}

proptest! {
    #[test]
    fn prop_point_round_trip(x in finite(), y in finite()) {
        prop_assert_eq!(unpack_point(&pack_point(x, y)).unwrap(), (x, y));
    }

    #[test]
    fn prop_line_round_trip(x0 in finite(), y0 in finite(), x1 in finite(), y1 in finite()) {
        prop_assert_eq!(
            unpack_line(&pack_line(x0, y0, x1, y1)).unwrap(),
            ((x0, y0), (x1, y1))
        );
    }
}
