//! Partial updates to an already assembled [`Route`].
//!
//! A refresh carries only the time-sensitive parts of some of a route's
//! legs: their per-segment attributes, incidents and closures. They are
//! merged in place starting at a [`RefreshCursor`], leaving the geometry,
//! steps and waypoints of the route untouched.

use serde::{Deserialize, Serialize};

use crate::model::{Attributes, Closure, Incident, Route, RouteLeg};

#[doc(hidden)]
pub mod merge;

#[cfg(test)]
mod test;

/// The skeleton of a route returned by the refresh endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RefreshedRoute {
    #[serde(default)]
    pub legs: Vec<RefreshedRouteLeg>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RefreshedRouteLeg {
    #[serde(rename = "annotation", default)]
    pub attributes: Attributes,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub incidents: Option<Vec<Incident>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closures: Option<Vec<Closure>>,
}

/// A leg whose time-sensitive fields can be merged into a route.
pub trait RefreshLegSource {
    fn attributes(&self) -> &Attributes;
    fn incidents(&self) -> Option<&[Incident]>;
    fn closures(&self) -> Option<&[Closure]>;
}

/// Anything which supplies refreshed legs, such as a [`RefreshedRoute`]
/// or a newer copy of the same [`Route`].
pub trait RefreshSource {
    type Leg: RefreshLegSource;

    fn refreshed_legs(&self) -> &[Self::Leg];
}

/// Where in a route a refresh begins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RefreshCursor {
    /// The first leg covered by the refresh. Without one, the refreshed
    /// legs are aligned with the last legs of the route.
    pub leg_index: Option<usize>,
    /// The first geometry index of the first covered leg which the
    /// refresh replaces. Earlier segments of that leg are retained.
    pub leg_shape_index: usize,
}

impl RefreshCursor {
    pub fn new(leg_index: usize, leg_shape_index: usize) -> Self {
        RefreshCursor {
            leg_index: Some(leg_index),
            leg_shape_index,
        }
    }
}

pub mod streams {
    use bitflags::bitflags;

    bitflags! {
        /// The independent parts of a route a refresh may update.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct RefreshStreams: u8 {
            const ATTRIBUTES = 1 << 0;
            const INCIDENTS = 1 << 1;
            const CLOSURES = 1 << 2;
        }
    }

    impl Default for RefreshStreams {
        fn default() -> Self {
            RefreshStreams::all()
        }
    }
}

#[doc(inline)]
pub use streams::RefreshStreams;

impl RefreshSource for RefreshedRoute {
    type Leg = RefreshedRouteLeg;

    fn refreshed_legs(&self) -> &[Self::Leg] {
        &self.legs
    }
}

impl RefreshLegSource for RefreshedRouteLeg {
    fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn incidents(&self) -> Option<&[Incident]> {
        self.incidents.as_deref()
    }

    fn closures(&self) -> Option<&[Closure]> {
        self.closures.as_deref()
    }
}

impl RefreshSource for Route {
    type Leg = RouteLeg;

    fn refreshed_legs(&self) -> &[Self::Leg] {
        &self.legs
    }
}

impl RefreshLegSource for RouteLeg {
    fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn incidents(&self) -> Option<&[Incident]> {
        self.incidents.as_deref()
    }

    fn closures(&self) -> Option<&[Closure]> {
        self.closures.as_deref()
    }
}
