//! Serde structures mirroring the service's JSON.

pub mod coordinate;
#[doc(hidden)]
pub mod response;
#[doc(hidden)]
pub mod route;

#[doc(inline)]
pub use response::{
    MatchResponseWire, OK, RefreshResponseWire, RouteResponseWire, ensure_ok,
};
#[doc(inline)]
pub use route::{LegWire, ManeuverWire, MatchWire, RouteWire, StepWire};
