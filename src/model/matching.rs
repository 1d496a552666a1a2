use serde::{Deserialize, Serialize};

use crate::DirectionsError;
use crate::codec::MatchWire;
use crate::context::DecodeContext;
use crate::model::{Route, Waypoint};

/// A route reconstructed from a trace of raw positions.
#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    pub route: Route,
    /// Between 0 and 1, how likely the trace was actually travelled this way.
    pub confidence: f64,
}

impl Match {
    pub fn from_wire(wire: MatchWire, context: &DecodeContext) -> Result<Self, DirectionsError> {
        Ok(Match {
            route: Route::from_wire(wire.route, context)?,
            confidence: wire.confidence,
        })
    }

    pub fn to_wire(&self) -> Result<MatchWire, DirectionsError> {
        Ok(MatchWire {
            route: self.route.to_wire()?,
            confidence: self.confidence,
        })
    }
}

/// A trace position as snapped onto the road network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tracepoint {
    #[serde(flatten)]
    pub waypoint: Waypoint,
    /// The matching this position belongs to.
    pub matchings_index: usize,
    /// Position of the waypoint within its matching.
    pub waypoint_index: usize,
    /// Number of other candidate positions considered.
    #[serde(rename = "alternatives_count", default)]
    pub alternative_count: usize,
}
