//! The request-echo context a response is decoded against.
//!
//! Responses do not describe themselves: the shape format of their
//! geometry, the waypoints the caller named, and which of those split the
//! route into legs are all properties of the request. The transport layer
//! hands them back in as a [`ResponseOptions`].

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::error::MissingContext;
use crate::geometry::ShapeFormat;
use crate::model::{Waypoint, leg_separators};
use crate::options::AttributeOptions;
use crate::{DirectionsError, impl_token_serde};

/// The routing profile a request was made under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter, AsRefStr)]
pub enum Profile {
    #[default]
    #[strum(serialize = "mapbox/driving")]
    Automobile,
    #[strum(serialize = "mapbox/driving-traffic")]
    AutomobileAvoidingTraffic,
    #[strum(serialize = "mapbox/cycling")]
    Cycling,
    #[strum(serialize = "mapbox/walking")]
    Walking,
}

impl_token_serde!(Profile);

/// Options of a directions request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteOptions {
    pub waypoints: Vec<Waypoint>,
    #[serde(default)]
    pub profile: Profile,
    #[serde(default)]
    pub shape_format: ShapeFormat,
    #[serde(default)]
    pub attribute_options: AttributeOptions,
    #[serde(default)]
    pub include_steps: bool,
    #[serde(default)]
    pub refreshing_enabled: bool,
}

impl RouteOptions {
    pub fn new(waypoints: Vec<Waypoint>) -> Self {
        RouteOptions {
            waypoints,
            ..Default::default()
        }
    }
}

/// Options of a map-matching request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchOptions {
    /// One waypoint per trace coordinate. Only those which separate
    /// legs become leg endpoints.
    pub waypoints: Vec<Waypoint>,
    #[serde(default)]
    pub profile: Profile,
    #[serde(default)]
    pub shape_format: ShapeFormat,
    #[serde(default)]
    pub attribute_options: AttributeOptions,
    #[serde(default)]
    pub include_steps: bool,
    #[serde(default)]
    pub resamples_traces: bool,
}

impl MatchOptions {
    pub fn new(waypoints: Vec<Waypoint>) -> Self {
        MatchOptions {
            waypoints,
            ..Default::default()
        }
    }
}

/// The options a response, route or match was decoded against.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseOptions {
    Route(RouteOptions),
    Match(MatchOptions),
}

impl ResponseOptions {
    pub fn waypoints(&self) -> &[Waypoint] {
        match self {
            ResponseOptions::Route(options) => &options.waypoints,
            ResponseOptions::Match(options) => &options.waypoints,
        }
    }

    pub fn shape_format(&self) -> ShapeFormat {
        match self {
            ResponseOptions::Route(options) => options.shape_format,
            ResponseOptions::Match(options) => options.shape_format,
        }
    }

    pub fn profile(&self) -> Profile {
        match self {
            ResponseOptions::Route(options) => options.profile,
            ResponseOptions::Match(options) => options.profile,
        }
    }

    pub fn attribute_options(&self) -> &AttributeOptions {
        match self {
            ResponseOptions::Route(options) => &options.attribute_options,
            ResponseOptions::Match(options) => &options.attribute_options,
        }
    }

    /// The requested waypoints which split the route into legs.
    pub fn leg_separators(&self) -> Vec<&Waypoint> {
        leg_separators(self.waypoints())
    }
}

impl From<RouteOptions> for ResponseOptions {
    fn from(value: RouteOptions) -> Self {
        ResponseOptions::Route(value)
    }
}

impl From<MatchOptions> for ResponseOptions {
    fn from(value: MatchOptions) -> Self {
        ResponseOptions::Match(value)
    }
}

/// Context carried alongside a payload while it is decoded.
///
/// Decoding a whole response always has its options. Decoding a single
/// route or step on its own may not, in which case the pieces needing it
/// fail with [`DirectionsError::MissingContext`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecodeContext {
    options: Option<ResponseOptions>,
    shape_format: Option<ShapeFormat>,
}

impl DecodeContext {
    pub fn new(options: impl Into<ResponseOptions>) -> Self {
        DecodeContext {
            options: Some(options.into()),
            shape_format: None,
        }
    }

    /// Overrides the shape format, or supplies one when no options are known.
    pub fn with_shape_format(mut self, format: ShapeFormat) -> Self {
        self.shape_format = Some(format);
        self
    }

    pub fn options(&self) -> Result<&ResponseOptions, DirectionsError> {
        self.options
            .as_ref()
            .ok_or(DirectionsError::MissingContext(MissingContext::Options))
    }

    pub fn shape_format(&self) -> Option<ShapeFormat> {
        self.shape_format
            .or_else(|| self.options.as_ref().map(ResponseOptions::shape_format))
    }
}
