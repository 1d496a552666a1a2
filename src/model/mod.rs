//! The route object graph, from a whole [`Route`] down to the lanes of a
//! single [`Intersection`].

#[doc(hidden)]
pub mod annotation;
#[doc(hidden)]
pub mod incident;
#[doc(hidden)]
pub mod instruction;
#[doc(hidden)]
pub mod intersection;
#[doc(hidden)]
pub mod leg;
#[doc(hidden)]
pub mod maneuver;
#[doc(hidden)]
pub mod matching;
#[doc(hidden)]
pub mod route;
#[doc(hidden)]
pub mod step;
#[doc(hidden)]
pub mod waypoint;


#[doc(inline)]
pub use annotation::{Attributes, CongestionLevel, SpeedLimit, SpeedUnit};
#[doc(inline)]
pub use incident::{Closure, Impact, Incident, IncidentKind, Segmented};
#[doc(inline)]
pub use instruction::{
    SpokenInstruction, TextRepresentation, VisualInstruction, VisualInstructionBanner,
    VisualInstructionComponent,
};
#[doc(inline)]
pub use intersection::Intersection;
#[doc(inline)]
pub use leg::RouteLeg;
#[doc(inline)]
pub use maneuver::{DrivingSide, ManeuverDirection, ManeuverType, TransportType};
#[doc(inline)]
pub use matching::{Match, Tracepoint};
#[doc(inline)]
pub use route::Route;
#[doc(inline)]
pub use step::RouteStep;
#[doc(inline)]
pub use waypoint::{Waypoint, leg_separators};
