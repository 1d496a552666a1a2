use geo::{Coord, coord};
use serde::{Deserialize, Serialize};

use crate::codec::coordinate;

/// A location the route passes through, or that a trace point was
/// matched to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    #[serde(rename = "location", with = "coordinate")]
    pub coordinate: Coord<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Whether the route is split into a new leg here. Only meaningful
    /// on the request side, the first and last waypoints always do.
    #[serde(default = "separates_legs", skip_serializing_if = "is_true")]
    pub separates_legs: bool,
    /// How far the requested coordinate was moved to snap it onto the
    /// road network, in metres.
    #[serde(
        rename = "distance",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub snapped_distance: Option<f64>,
}

fn separates_legs() -> bool {
    true
}

fn is_true(value: &bool) -> bool {
    *value
}

impl Waypoint {
    pub fn new(lon: f64, lat: f64) -> Self {
        Waypoint {
            coordinate: coord! { x: lon, y: lat },
            name: None,
            separates_legs: true,
            snapped_distance: None,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Marks the waypoint as a via point, which does not begin a new leg.
    pub fn via(mut self) -> Self {
        self.separates_legs = false;
        self
    }
}

/// The waypoints which split a route into legs, where leg `i` spans
/// from the `i`th to the `i+1`th. The first and last waypoints always
/// separate legs.
pub fn leg_separators(waypoints: &[Waypoint]) -> Vec<&Waypoint> {
    let last = waypoints.len().saturating_sub(1);

    waypoints
        .iter()
        .enumerate()
        .filter(|(index, waypoint)| *index == 0 || *index == last || waypoint.separates_legs)
        .map(|(_, waypoint)| waypoint)
        .collect()
}
