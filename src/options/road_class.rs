use crate::options::road_class::bitflag::RoadClassFlags;
use crate::options::{OptionSet, Vocabulary};

use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Classes of road which a route may use, or an intersection outlet may lead onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, AsRefStr)]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum RoadClass {
    Toll,
    Restricted,
    Motorway,
    Ferry,
    Tunnel,
    #[strum(serialize = "hov2")]
    HighOccupancyVehicle2,
    #[strum(serialize = "hov3")]
    HighOccupancyVehicle3,
    #[strum(serialize = "hot")]
    HighOccupancyToll,
}

pub type RoadClasses = OptionSet<RoadClass>;

impl Vocabulary for RoadClass {
    type Flags = RoadClassFlags;

    const NAME: &'static str = "road class";

    fn to_flag(self) -> Self::Flags {
        RoadClass::to_flag(self)
    }
}

pub(crate) mod bitflag {
    use super::RoadClass;
    use bitflags::bitflags;

    bitflags! {
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub struct RoadClassFlags: u32 {
            const TOLL = 1 << 1;
            const RESTRICTED = 1 << 2;
            const MOTORWAY = 1 << 3;
            const FERRY = 1 << 4;
            const TUNNEL = 1 << 5;
            const HOV2 = 1 << 6;
            const HOV3 = 1 << 7;
            const HOT = 1 << 8;
        }
    }

    impl RoadClass {
        pub const fn to_flag(self) -> RoadClassFlags {
            match self {
                RoadClass::Toll => RoadClassFlags::TOLL,
                RoadClass::Restricted => RoadClassFlags::RESTRICTED,
                RoadClass::Motorway => RoadClassFlags::MOTORWAY,
                RoadClass::Ferry => RoadClassFlags::FERRY,
                RoadClass::Tunnel => RoadClassFlags::TUNNEL,
                RoadClass::HighOccupancyVehicle2 => RoadClassFlags::HOV2,
                RoadClass::HighOccupancyVehicle3 => RoadClassFlags::HOV3,
                RoadClass::HighOccupancyToll => RoadClassFlags::HOT,
            }
        }
    }
}
