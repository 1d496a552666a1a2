//! Envelopes of the directions, map-matching and refresh endpoints.

use serde::{Deserialize, Serialize};

use crate::DirectionsError;
use crate::codec::route::{MatchWire, RouteWire};
use crate::model::{Tracepoint, Waypoint};
use crate::refresh::RefreshedRoute;

/// The code of a successful response.
pub const OK: &str = "Ok";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteResponseWire {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub routes: Option<Vec<RouteWire>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waypoints: Option<Vec<Option<Waypoint>>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResponseWire {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matchings: Option<Vec<MatchWire>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracepoints: Option<Vec<Option<Tracepoint>>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RefreshResponseWire {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub uuid: Option<String>,
    #[serde(default)]
    pub route: Option<RefreshedRoute>,
}

/// Surfaces a non-`Ok` response code as [`DirectionsError::Api`].
/// A response without any code is taken as successful.
pub fn ensure_ok(code: Option<&str>, message: Option<&str>) -> Result<(), DirectionsError> {
    match code {
        None | Some(OK) => Ok(()),
        Some(code) => Err(DirectionsError::Api {
            code: code.to_string(),
            message: message.map(str::to_string),
        }),
    }
}
