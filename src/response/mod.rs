//! Whole responses of the directions, map-matching and refresh endpoints.
//!
//! These are the entry points of the crate: the bytes of a response body
//! are decoded against the options of the request which produced it.

use log::debug;
use serde::de::Error as _;

use crate::codec::{
    MatchResponseWire, OK, RefreshResponseWire, RouteResponseWire, ensure_ok,
};
use crate::context::{DecodeContext, MatchOptions, ResponseOptions};
use crate::model::{Match, Route, Tracepoint, Waypoint};
use crate::refresh::RefreshedRoute;
use crate::DirectionsError;


/// The routes found between the requested waypoints.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteResponse {
    /// Identifies the response when refreshing its routes.
    pub identifier: Option<String>,
    pub routes: Vec<Route>,
    /// The requested waypoints as snapped onto the road network.
    pub waypoints: Option<Vec<Waypoint>>,
    pub options: ResponseOptions,
}

impl RouteResponse {
    /// Decodes a response body, failing on a non-`Ok` response code.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, level = "debug"))]
    pub fn from_slice(
        bytes: &[u8],
        options: impl Into<ResponseOptions>,
    ) -> Result<Self, DirectionsError> {
        let options = options.into();
        let wire = serde_json::from_slice::<RouteResponseWire>(bytes)?;
        ensure_ok(wire.code.as_deref(), wire.message.as_deref())?;

        let waypoints = wire.waypoints.map(|waypoints| {
            let waypoints = waypoints.into_iter().flatten().collect::<Vec<_>>();
            resolve_waypoints(waypoints, options.waypoints())
        });

        let context = DecodeContext::new(options.clone());
        let routes = wire
            .routes
            .unwrap_or_default()
            .into_iter()
            .map(|route| {
                let mut route = Route::from_wire(route, &context)?;
                route.route_identifier = wire.uuid.clone();
                if let Some(waypoints) = &waypoints {
                    route.assign_endpoints(waypoints);
                }
                Ok(route)
            })
            .collect::<Result<Vec<_>, DirectionsError>>()?;

        debug!(
            "decoded {} routes of response {:?}",
            routes.len(),
            wire.uuid
        );

        Ok(RouteResponse {
            identifier: wire.uuid,
            routes,
            waypoints,
            options,
        })
    }

    /// Encodes the response back into a response body.
    pub fn to_vec(&self) -> Result<Vec<u8>, DirectionsError> {
        let routes = self
            .routes
            .iter()
            .map(Route::to_wire)
            .collect::<Result<Vec<_>, _>>()?;

        let wire = RouteResponseWire {
            code: Some(OK.to_string()),
            message: None,
            uuid: self.identifier.clone(),
            routes: Some(routes),
            waypoints: self
                .waypoints
                .as_ref()
                .map(|waypoints| waypoints.iter().cloned().map(Some).collect()),
        };

        Ok(serde_json::to_vec(&wire)?)
    }
}

/// The matchings of a trace onto the road network.
#[derive(Debug, Clone, PartialEq)]
pub struct MapMatchingResponse {
    pub matches: Vec<Match>,
    /// One entry per trace position, absent where it could not be matched.
    pub tracepoints: Vec<Option<Tracepoint>>,
    pub options: MatchOptions,
}

impl MapMatchingResponse {
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, level = "debug"))]
    pub fn from_slice(bytes: &[u8], options: MatchOptions) -> Result<Self, DirectionsError> {
        let wire = serde_json::from_slice::<MatchResponseWire>(bytes)?;
        ensure_ok(wire.code.as_deref(), wire.message.as_deref())?;

        let tracepoints = wire
            .tracepoints
            .unwrap_or_default()
            .into_iter()
            .zip(options.waypoints.iter().map(Some).chain(std::iter::repeat(None)))
            .map(|(tracepoint, requested)| {
                tracepoint.map(|mut tracepoint| {
                    if let Some(requested) = requested {
                        tracepoint.waypoint = resolve_waypoint(tracepoint.waypoint, requested);
                    }
                    tracepoint
                })
            })
            .collect::<Vec<_>>();

        let context = DecodeContext::new(options.clone());
        let matches = wire
            .matchings
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(index, matching)| {
                let mut matching = Match::from_wire(matching, &context)?;

                let waypoints = tracepoints
                    .iter()
                    .flatten()
                    .filter(|tracepoint| tracepoint.matchings_index == index)
                    .map(|tracepoint| tracepoint.waypoint.clone())
                    .collect::<Vec<_>>();

                if !waypoints.is_empty() {
                    matching.route.assign_endpoints(&waypoints);
                }

                Ok(matching)
            })
            .collect::<Result<Vec<_>, DirectionsError>>()?;

        debug!(
            "decoded {} matchings of {} tracepoints",
            matches.len(),
            tracepoints.len()
        );

        Ok(MapMatchingResponse {
            matches,
            tracepoints,
            options,
        })
    }

    pub fn to_vec(&self) -> Result<Vec<u8>, DirectionsError> {
        let matchings = self
            .matches
            .iter()
            .map(Match::to_wire)
            .collect::<Result<Vec<_>, _>>()?;

        let wire = MatchResponseWire {
            code: Some(OK.to_string()),
            message: None,
            matchings: Some(matchings),
            tracepoints: Some(self.tracepoints.clone()),
        };

        Ok(serde_json::to_vec(&wire)?)
    }
}

/// The body of the refresh endpoint, to be merged with [`Route::refresh`].
#[derive(Debug, Clone, PartialEq)]
pub struct RouteRefreshResponse {
    pub identifier: Option<String>,
    pub route: RefreshedRoute,
}

impl RouteRefreshResponse {
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, level = "debug"))]
    pub fn from_slice(bytes: &[u8]) -> Result<Self, DirectionsError> {
        let wire = serde_json::from_slice::<RefreshResponseWire>(bytes)?;
        ensure_ok(wire.code.as_deref(), wire.message.as_deref())?;

        let route = wire
            .route
            .ok_or_else(|| serde_json::Error::missing_field("route"))?;

        debug!(
            "decoded refresh of {} legs for {:?}",
            route.legs.len(),
            wire.uuid
        );

        Ok(RouteRefreshResponse {
            identifier: wire.uuid,
            route,
        })
    }
}

/// Pairs the returned waypoints with the requested ones, which name them
/// and decide where legs are split. Unpaired waypoints are kept as sent.
fn resolve_waypoints(returned: Vec<Waypoint>, requested: &[Waypoint]) -> Vec<Waypoint> {
    if returned.len() != requested.len() {
        debug!(
            "{} waypoints returned for {} requested, keeping them as sent",
            returned.len(),
            requested.len()
        );
        return returned;
    }

    returned
        .into_iter()
        .zip(requested)
        .map(|(waypoint, requested)| resolve_waypoint(waypoint, requested))
        .collect()
}

fn resolve_waypoint(mut waypoint: Waypoint, requested: &Waypoint) -> Waypoint {
    if requested.name.is_some() {
        waypoint.name = requested.name.clone();
    }

    waypoint.separates_legs = requested.separates_legs;
    waypoint
}
