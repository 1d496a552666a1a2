//! Option sets: a fixed vocabulary of built-in members backed by
//! `bitflags`, extended by caller-registered slots carrying labels.

#[doc(hidden)]
pub mod attribute;
#[doc(hidden)]
pub mod error;
#[doc(hidden)]
pub mod lane;
#[doc(hidden)]
pub mod road_class;
#[doc(hidden)]
pub mod set;
#[doc(hidden)]
pub mod vocabulary;

#[cfg(test)]
mod test;

#[doc(inline)]
pub use attribute::{AttributeOption, AttributeOptions, bitflag::AttributeFlags};
#[doc(inline)]
pub use error::OptionError;
#[doc(inline)]
pub use lane::{LaneIndication, LaneIndications, bitflag::LaneIndicationFlags};
#[doc(inline)]
pub use road_class::{RoadClass, RoadClasses, bitflag::RoadClassFlags};
#[doc(inline)]
pub use set::{OptionSet, Slot};
#[doc(inline)]
pub use vocabulary::Vocabulary;
