#![cfg(test)]

use crate::geometry::{GeometryError, ShapeFormat, decode_shape, encode_shape};
use crate::{DirectionsError, MissingContext};

use approx::assert_relative_eq;
use geo::{LineString, wkt};
use serde_json::{Value, json};

const LINE_5: &str = "_p~iF~ps|U_ulLnnqC_mqNvxq`@";
const LINE_6: &str = "_izlhA~rlgdF_{geC~ywl@_kwzCn`{nI";

fn expected_line() -> LineString<f64> {
    wkt! { LINESTRING(-120.2 38.5,-120.95 40.7,-126.453 43.252) }
}

fn assert_lines_eq(actual: &LineString<f64>, expected: &LineString<f64>) {
    assert_eq!(actual.0.len(), expected.0.len());
    for (a, b) in actual.coords().zip(expected.coords()) {
        assert_relative_eq!(a.x, b.x, epsilon = 1e-6);
        assert_relative_eq!(a.y, b.y, epsilon = 1e-6);
    }
}

#[test]
fn decodes_polyline_at_each_precision() {
    let five = ShapeFormat::Polyline
        .decode(&Value::from(LINE_5))
        .expect("must decode successfully");
    let six = ShapeFormat::Polyline6
        .decode(&Value::from(LINE_6))
        .expect("must decode successfully");

    assert_lines_eq(&five, &expected_line());
    assert_lines_eq(&six, &expected_line());
}

#[test]
fn same_precision_round_trip_is_exact() {
    for (format, encoded) in [(ShapeFormat::Polyline, LINE_5), (ShapeFormat::Polyline6, LINE_6)] {
        let line = format.decode(&Value::from(encoded)).expect("must decode");
        let reencoded = format.encode(&line).expect("must encode");

        assert_eq!(reencoded, Value::from(encoded));
    }
}

#[test]
fn cross_precision_encoding_differs() {
    let line = ShapeFormat::Polyline
        .decode(&Value::from(LINE_5))
        .expect("must decode");
    let reencoded = ShapeFormat::Polyline6.encode(&line).expect("must encode");

    assert_ne!(reencoded, Value::from(LINE_5));
    assert_eq!(reencoded, Value::from(LINE_6));
}

#[test]
fn decodes_geojson_line_and_point() {
    let line = ShapeFormat::GeoJson
        .decode(&json!({
            "type": "LineString",
            "coordinates": [[-120.2, 38.5], [-120.95, 40.7], [-126.453, 43.252]]
        }))
        .expect("must decode line");
    assert_lines_eq(&line, &expected_line());

    let point = ShapeFormat::GeoJson
        .decode(&json!({ "type": "Point", "coordinates": [-77.03, 38.9] }))
        .expect("must decode point");
    assert_lines_eq(&point, &wkt! { LINESTRING(-77.03 38.9) });
}

#[test]
fn geojson_round_trip() {
    let encoded = ShapeFormat::GeoJson
        .encode(&expected_line())
        .expect("must encode");

    assert_eq!(encoded["type"], "LineString");

    let decoded = ShapeFormat::GeoJson.decode(&encoded).expect("must decode");
    assert_eq!(decoded, expected_line());
}

#[test]
fn rejects_other_geojson_types() {
    let failure = ShapeFormat::GeoJson.decode(&json!({
        "type": "MultiPoint",
        "coordinates": [[0.0, 0.0]]
    }));

    assert_eq!(
        failure,
        Err(GeometryError::UnsupportedGeometry("MultiPoint".to_string()))
    );
}

#[test]
fn rejects_mismatched_encoding() {
    let failure = ShapeFormat::GeoJson.decode(&Value::from(LINE_5));
    assert_eq!(
        failure,
        Err(GeometryError::Encoding {
            format: ShapeFormat::GeoJson,
            found: "string"
        })
    );

    let failure = ShapeFormat::Polyline6.decode(&json!({ "type": "Point" }));
    assert!(matches!(failure, Err(GeometryError::Encoding { .. })));
}

#[test]
fn malformed_polyline_fails() {
    let failure = ShapeFormat::Polyline.decode(&Value::from("!!"));

    assert!(matches!(failure, Err(GeometryError::Polyline(_))));
}

#[test]
fn absent_geometry_is_none() {
    assert!(matches!(decode_shape(None, None), Ok(None)));
    assert!(matches!(
        decode_shape(Some(&Value::Null), Some(ShapeFormat::Polyline)),
        Ok(None)
    ));
    assert!(matches!(
        encode_shape(None, ShapeFormat::Polyline6),
        Ok(None)
    ));
}

#[test]
fn degenerate_line_is_not_absent() {
    let point = json!({ "type": "Point", "coordinates": [1.0, 2.0] });
    let decoded = decode_shape(Some(&point), Some(ShapeFormat::GeoJson))
        .expect("must decode")
        .expect("must be present");

    assert_eq!(decoded.0.len(), 1);
}

#[test]
fn present_geometry_requires_format() {
    let failure = decode_shape(Some(&Value::from(LINE_5)), None);

    assert!(matches!(
        failure,
        Err(DirectionsError::MissingContext(MissingContext::ShapeFormat))
    ));
}

#[test]
fn shape_format_tokens() {
    assert_eq!("polyline6".parse::<ShapeFormat>(), Ok(ShapeFormat::Polyline6));
    assert_eq!(ShapeFormat::GeoJson.to_string(), "geojson");
    assert_eq!(ShapeFormat::default(), ShapeFormat::Polyline);
}
