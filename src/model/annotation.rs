use log::debug;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::impl_token_serde;

/// Traffic congestion along a segment.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter, AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum CongestionLevel {
    #[default]
    Unknown,
    Low,
    Moderate,
    Heavy,
    Severe,
}

impl_token_serde!(CongestionLevel, fallback = CongestionLevel::Unknown);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter, AsRefStr)]
pub enum SpeedUnit {
    #[default]
    #[strum(serialize = "km/h")]
    KilometresPerHour,
    #[strum(serialize = "mph")]
    MilesPerHour,
}

impl_token_serde!(SpeedUnit);

/// The posted speed limit of a segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "SpeedLimitWire", into = "SpeedLimitWire")]
pub enum SpeedLimit {
    Known { speed: f64, unit: SpeedUnit },
    /// The limit exists but is not known.
    Unknown,
    /// No limit applies.
    Unregulated,
}

/// `{"speed": 50, "unit": "km/h"}`, `{"unknown": true}` or `{"none": true}`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
struct SpeedLimitWire {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    speed: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    unit: Option<SpeedUnit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    unknown: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    none: Option<bool>,
}

impl From<SpeedLimitWire> for SpeedLimit {
    fn from(value: SpeedLimitWire) -> Self {
        match value {
            SpeedLimitWire {
                none: Some(true), ..
            } => SpeedLimit::Unregulated,
            SpeedLimitWire {
                speed: Some(speed),
                unit,
                ..
            } => SpeedLimit::Known {
                speed,
                unit: unit.unwrap_or_default(),
            },
            _ => SpeedLimit::Unknown,
        }
    }
}

impl From<SpeedLimit> for SpeedLimitWire {
    fn from(value: SpeedLimit) -> Self {
        match value {
            SpeedLimit::Known { speed, unit } => SpeedLimitWire {
                speed: Some(speed),
                unit: Some(unit),
                ..Default::default()
            },
            SpeedLimit::Unknown => SpeedLimitWire {
                unknown: Some(true),
                ..Default::default()
            },
            SpeedLimit::Unregulated => SpeedLimitWire {
                none: Some(true),
                ..Default::default()
            },
        }
    }
}

/// Per-segment annotations of a leg, each parallel to the segments of
/// the leg's full geometry when present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Attributes {
    #[serde(rename = "distance", default, skip_serializing_if = "Option::is_none")]
    pub segment_distances: Option<Vec<f64>>,
    #[serde(rename = "duration", default, skip_serializing_if = "Option::is_none")]
    pub expected_segment_travel_times: Option<Vec<f64>>,
    #[serde(rename = "speed", default, skip_serializing_if = "Option::is_none")]
    pub segment_speeds: Option<Vec<f64>>,
    #[serde(rename = "congestion", default, skip_serializing_if = "Option::is_none")]
    pub segment_congestion_levels: Option<Vec<CongestionLevel>>,
    #[serde(rename = "maxspeed", default, skip_serializing_if = "Option::is_none")]
    pub segment_maximum_speed_limits: Option<Vec<SpeedLimit>>,
    /// Congestion from 0 to 100, absent where unknown.
    #[serde(
        rename = "congestion_numeric",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub segment_numeric_congestion_levels: Option<Vec<Option<u8>>>,
}

impl Attributes {
    pub fn is_empty(&self) -> bool {
        self == &Attributes::default()
    }

    /// Overlays `other` onto `self`, starting at segment `offset`.
    ///
    /// Each array present in `other` replaces the segments of `self` from
    /// `offset` onwards, the segments before it are retained. Arrays absent
    /// from `other`, or shorter than `offset`, are left untouched.
    pub fn merge(&mut self, other: &Attributes, offset: usize) {
        splice(&mut self.segment_distances, &other.segment_distances, offset);
        splice(
            &mut self.expected_segment_travel_times,
            &other.expected_segment_travel_times,
            offset,
        );
        splice(&mut self.segment_speeds, &other.segment_speeds, offset);
        splice(
            &mut self.segment_congestion_levels,
            &other.segment_congestion_levels,
            offset,
        );
        splice(
            &mut self.segment_maximum_speed_limits,
            &other.segment_maximum_speed_limits,
            offset,
        );
        splice(
            &mut self.segment_numeric_congestion_levels,
            &other.segment_numeric_congestion_levels,
            offset,
        );
    }

    /// Sum of the segment travel times, when known.
    pub fn expected_travel_time(&self) -> Option<f64> {
        self.expected_segment_travel_times
            .as_ref()
            .map(|times| times.iter().sum())
    }
}

fn splice<T: Clone>(target: &mut Option<Vec<T>>, source: &Option<Vec<T>>, offset: usize) {
    let Some(source) = source else {
        return;
    };

    match target {
        Some(existing) if offset > existing.len() => {
            debug!(
                "skipping segment merge at offset {offset}, past {} segments",
                existing.len()
            );
        }
        Some(existing) => {
            existing.truncate(offset);
            existing.extend_from_slice(source);
        }
        // Nothing to retain ahead of the offset.
        None if offset == 0 => *target = Some(source.clone()),
        None => {}
    }
}
