#![doc = include_str!("../readme.md")]

#[cfg(feature = "mimalloc")]
use mimalloc::MiMalloc;
#[cfg_attr(feature = "mimalloc", global_allocator)]
#[cfg(feature = "mimalloc")]
static GLOBAL: MiMalloc = MiMalloc;

pub mod codec;
pub mod context;
pub mod error;
pub mod geometry;
pub mod index;
pub mod model;
pub mod options;
pub mod refresh;
pub mod response;
pub mod road;
pub mod util;

#[doc(inline)]
pub use error::{DirectionsError, MissingContext};

#[doc(inline)]
pub use context::{DecodeContext, MatchOptions, Profile, ResponseOptions, RouteOptions};

#[doc(inline)]
pub use geometry::ShapeFormat;

#[doc(inline)]
pub use model::{Match, Route, RouteLeg, RouteStep, Waypoint};

#[doc(inline)]
pub use refresh::{RefreshCursor, RefreshSource, RefreshStreams, RefreshedRoute};

#[doc(inline)]
pub use response::{MapMatchingResponse, RouteRefreshResponse, RouteResponse};
