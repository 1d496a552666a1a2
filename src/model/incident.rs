use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::impl_token_serde;

/// Anything which covers a range of a leg's geometry.
pub trait Segmented: Clone {
    /// The last geometry index covered, relative to the leg.
    fn geometry_index_end(&self) -> usize;

    /// Moves the covered range `offset` positions further along the leg.
    fn shift(&mut self, offset: usize);
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter, AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum IncidentKind {
    Accident,
    Congestion,
    Construction,
    DisabledVehicle,
    LaneRestriction,
    MassTransit,
    Miscellaneous,
    OtherNews,
    PlannedEvent,
    RoadClosure,
    RoadHazard,
    Weather,
    #[default]
    Undefined,
}

impl_token_serde!(IncidentKind, fallback = IncidentKind::Undefined);

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter, AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum Impact {
    #[default]
    Unknown,
    Critical,
    Major,
    Minor,
    Low,
}

impl_token_serde!(Impact, fallback = Impact::Unknown);

/// A traffic incident reported along a leg.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Incident {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: IncidentKind,
    #[serde(default)]
    pub description: String,
    /// ISO-8601 timestamps, as sent.
    pub creation_time: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impact: Option<Impact>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_type_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alertc_codes: Option<Vec<u32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lanes_blocked: Option<Vec<String>>,
    pub geometry_index_start: usize,
    pub geometry_index_end: usize,
}

impl Segmented for Incident {
    fn geometry_index_end(&self) -> usize {
        self.geometry_index_end
    }

    fn shift(&mut self, offset: usize) {
        self.geometry_index_start += offset;
        self.geometry_index_end += offset;
    }
}

/// A stretch of a leg which is closed to traffic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Closure {
    pub geometry_index_start: usize,
    pub geometry_index_end: usize,
}

impl Segmented for Closure {
    fn geometry_index_end(&self) -> usize {
        self.geometry_index_end
    }

    fn shift(&mut self, offset: usize) {
        self.geometry_index_start += offset;
        self.geometry_index_end += offset;
    }
}
