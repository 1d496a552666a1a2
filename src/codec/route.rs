//! Wire layout of routes, matchings, legs and steps.
//!
//! Geometry is held as a raw `serde_json::Value` here, since reading it
//! needs a shape format from outside the payload. The model types convert
//! from and to these structures once that context is at hand.

use geo::Coord;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::codec::coordinate;
use crate::model::{
    Attributes, Closure, DrivingSide, Incident, Intersection, ManeuverDirection, ManeuverType,
    SpokenInstruction, TransportType, VisualInstructionBanner,
};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ManeuverWire {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instruction: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<ManeuverType>,
    #[serde(rename = "modifier", default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<ManeuverDirection>,
    #[serde(
        with = "coordinate::optional",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub location: Option<Coord<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bearing_before: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bearing_after: Option<f64>,
    /// Number of the exit taken at a roundabout or rotary.
    #[serde(rename = "exit", default, skip_serializing_if = "Option::is_none")]
    pub exit_index: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepWire {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<Value>,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "ref", default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exits: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destinations: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotary_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pronunciation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotary_pronunciation: Option<String>,
    #[serde(default)]
    pub maneuver: ManeuverWire,
    #[serde(default)]
    pub driving_side: DrivingSide,
    pub distance: f64,
    pub duration: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_typical: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<TransportType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intersections: Option<Vec<Intersection>>,
    #[serde(
        rename = "bannerInstructions",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub banner_instructions: Option<Vec<VisualInstructionBanner>>,
    #[serde(
        rename = "voiceInstructions",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub voice_instructions: Option<Vec<SpokenInstruction>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegWire {
    #[serde(default)]
    pub summary: String,
    pub distance: f64,
    pub duration: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_typical: Option<f64>,
    #[serde(default)]
    pub steps: Vec<StepWire>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotation: Option<Attributes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub incidents: Option<Vec<Incident>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closures: Option<Vec<Closure>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteWire {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<Value>,
    #[serde(default)]
    pub legs: Vec<LegWire>,
    pub distance: f64,
    pub duration: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_typical: Option<f64>,
    #[serde(
        rename = "voiceLocale",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub voice_locale: Option<String>,
}

/// A matching is a route with the confidence of the match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchWire {
    #[serde(flatten)]
    pub route: RouteWire,
    pub confidence: f64,
}
