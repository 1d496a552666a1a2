//! Shapes of routes, legs, steps and matches.
//!
//! Geometry on the wire carries no marker of its own encoding. The
//! request decides it, so every decode and encode is driven by a
//! [`ShapeFormat`] handed in from the request context. Whatever the format,
//! a shape is held in memory as a `geo::LineString` of `(lon, lat)`
//! coordinates.

use std::error::Error;
use std::fmt::{Display, Formatter};

use geo::{Coord, LineString, coord};
use serde_json::Value;
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString};

use crate::error::MissingContext;
use crate::{DirectionsError, impl_token_serde};

#[cfg(test)]
mod test;

/// The encoding of every geometry within a response.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, StrumDisplay, EnumString, EnumIter, AsRefStr,
)]
pub enum ShapeFormat {
    /// A GeoJSON `LineString` (or `Point`) object.
    #[strum(serialize = "geojson")]
    GeoJson,
    /// A polyline string at a precision of 1e-5 degrees.
    #[default]
    #[strum(serialize = "polyline")]
    Polyline,
    /// A polyline string at a precision of 1e-6 degrees.
    #[strum(serialize = "polyline6")]
    Polyline6,
}

impl_token_serde!(ShapeFormat);

#[derive(Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// The polyline string could not be delta-decoded, or the
    /// coordinates could not be encoded at the requested precision.
    Polyline(String),
    /// The GeoJSON object is malformed.
    GeoJson(String),
    /// The GeoJSON object is neither a `LineString` nor a `Point`.
    UnsupportedGeometry(String),
    /// A GeoJSON position held fewer than two ordinates.
    Position(usize),
    /// The value is not of the JSON kind the format expects.
    Encoding {
        format: ShapeFormat,
        found: &'static str,
    },
}

impl Display for GeometryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            GeometryError::Polyline(err) => write!(f, "polyline: {err}"),
            GeometryError::GeoJson(err) => write!(f, "geojson: {err}"),
            GeometryError::UnsupportedGeometry(kind) => {
                write!(f, "unsupported geometry type {kind}")
            }
            GeometryError::Position(length) => {
                write!(f, "position of {length} ordinates, expected at least 2")
            }
            GeometryError::Encoding { format, found } => {
                write!(f, "expected a {format} geometry, found a JSON {found}")
            }
        }
    }
}

impl Error for GeometryError {}

impl ShapeFormat {
    /// Number of decimal digits retained by a polyline format.
    pub const fn precision(&self) -> Option<u32> {
        match self {
            ShapeFormat::GeoJson => None,
            ShapeFormat::Polyline => Some(5),
            ShapeFormat::Polyline6 => Some(6),
        }
    }

    pub fn decode(&self, value: &Value) -> Result<LineString<f64>, GeometryError> {
        match (self.precision(), value) {
            (Some(precision), Value::String(encoded)) => {
                polyline::decode_polyline(encoded, precision)
                    .map_err(|err| GeometryError::Polyline(err.to_string()))
            }
            (None, Value::Object(_)) => decode_geojson(value),
            (_, other) => Err(GeometryError::Encoding {
                format: *self,
                found: json_kind(other),
            }),
        }
    }

    pub fn encode(&self, shape: &LineString<f64>) -> Result<Value, GeometryError> {
        match self.precision() {
            Some(precision) => polyline::encode_coordinates(shape.coords().copied(), precision)
                .map(Value::String)
                .map_err(|err| GeometryError::Polyline(err.to_string())),
            None => encode_geojson(shape),
        }
    }
}

fn decode_geojson(value: &Value) -> Result<LineString<f64>, GeometryError> {
    let geometry = serde_json::from_value::<geojson::Geometry>(value.clone())
        .map_err(|err| GeometryError::GeoJson(err.to_string()))?;

    let positions = match geometry.value {
        geojson::Value::LineString(positions) => positions,
        geojson::Value::Point(position) => vec![position],
        _ => {
            let kind = value.get("type").and_then(Value::as_str).unwrap_or_default();
            return Err(GeometryError::UnsupportedGeometry(kind.to_string()));
        }
    };

    positions
        .iter()
        .map(|position| match position.as_slice() {
            [x, y, ..] => Ok(coord! { x: *x, y: *y }),
            short => Err(GeometryError::Position(short.len())),
        })
        .collect::<Result<Vec<Coord<f64>>, _>>()
        .map(LineString::new)
}

fn encode_geojson(shape: &LineString<f64>) -> Result<Value, GeometryError> {
    let positions = shape.coords().map(|c| vec![c.x, c.y]).collect();
    let geometry = geojson::Geometry::new(geojson::Value::LineString(positions));

    serde_json::to_value(&geometry).map_err(|err| GeometryError::GeoJson(err.to_string()))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Decodes an optional wire geometry.
///
/// An absent geometry is `None` without needing a format. A present one
/// requires `format`, and fails with a missing context error without it.
pub fn decode_shape(
    value: Option<&Value>,
    format: Option<ShapeFormat>,
) -> Result<Option<LineString<f64>>, DirectionsError> {
    let Some(value) = value.filter(|value| !value.is_null()) else {
        return Ok(None);
    };

    let format = format.ok_or(MissingContext::ShapeFormat)?;
    Ok(Some(format.decode(value)?))
}

/// Encodes an optional shape, the inverse of [`decode_shape`].
pub fn encode_shape(
    shape: Option<&LineString<f64>>,
    format: ShapeFormat,
) -> Result<Option<Value>, GeometryError> {
    shape.map(|shape| format.encode(shape)).transpose()
}
