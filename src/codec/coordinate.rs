//! `[lon, lat]` pairs, for use with `#[serde(with = "...")]`.

use geo::{Coord, coord};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub fn serialize<S: Serializer>(value: &Coord<f64>, serializer: S) -> Result<S::Ok, S::Error> {
    [value.x, value.y].serialize(serializer)
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Coord<f64>, D::Error> {
    let [x, y] = <[f64; 2]>::deserialize(deserializer)?;
    Ok(coord! { x: x, y: y })
}

/// The same encoding for an optional coordinate.
pub mod optional {
    use geo::{Coord, coord};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Option<Coord<f64>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        value.map(|value| [value.x, value.y]).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Coord<f64>>, D::Error> {
        let pair = Option::<[f64; 2]>::deserialize(deserializer)?;
        Ok(pair.map(|[x, y]| coord! { x: x, y: y }))
    }
}
