use crate::options::attribute::bitflag::AttributeFlags;
use crate::options::{OptionSet, Vocabulary};

use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Per-segment attributes which can be requested for each route leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, AsRefStr)]
#[repr(u8)]
pub enum AttributeOption {
    #[strum(serialize = "distance")]
    Distance,
    #[strum(serialize = "duration")]
    ExpectedTravelTime,
    #[strum(serialize = "speed")]
    Speed,
    #[strum(serialize = "congestion")]
    CongestionLevel,
    #[strum(serialize = "maxspeed")]
    MaximumSpeedLimit,
    #[strum(serialize = "congestion_numeric")]
    NumericCongestionLevel,
}

pub type AttributeOptions = OptionSet<AttributeOption>;

impl Vocabulary for AttributeOption {
    type Flags = AttributeFlags;

    const NAME: &'static str = "attribute";

    fn to_flag(self) -> Self::Flags {
        AttributeOption::to_flag(self)
    }
}

pub(crate) mod bitflag {
    use super::AttributeOption;
    use bitflags::bitflags;

    bitflags! {
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub struct AttributeFlags: u32 {
            const DISTANCE = 1 << 1;
            const EXPECTED_TRAVEL_TIME = 1 << 2;
            const SPEED = 1 << 3;
            const CONGESTION_LEVEL = 1 << 4;
            const MAXIMUM_SPEED_LIMIT = 1 << 5;
            const NUMERIC_CONGESTION_LEVEL = 1 << 6;
        }
    }

    impl AttributeOption {
        pub const fn to_flag(self) -> AttributeFlags {
            match self {
                AttributeOption::Distance => AttributeFlags::DISTANCE,
                AttributeOption::ExpectedTravelTime => AttributeFlags::EXPECTED_TRAVEL_TIME,
                AttributeOption::Speed => AttributeFlags::SPEED,
                AttributeOption::CongestionLevel => AttributeFlags::CONGESTION_LEVEL,
                AttributeOption::MaximumSpeedLimit => AttributeFlags::MAXIMUM_SPEED_LIMIT,
                AttributeOption::NumericCongestionLevel => {
                    AttributeFlags::NUMERIC_CONGESTION_LEVEL
                }
            }
        }
    }
}
