use crate::options::lane::bitflag::LaneIndicationFlags;
use crate::options::{OptionSet, Vocabulary};

use strum::{AsRefStr, Display, EnumIter, EnumString};

/// The arrows painted on a lane, as seen approaching an intersection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, AsRefStr)]
#[repr(u8)]
pub enum LaneIndication {
    #[strum(serialize = "sharp right")]
    SharpRight,
    #[strum(serialize = "right")]
    Right,
    #[strum(serialize = "slight right")]
    SlightRight,
    #[strum(serialize = "straight")]
    StraightAhead,
    #[strum(serialize = "slight left")]
    SlightLeft,
    #[strum(serialize = "left")]
    Left,
    #[strum(serialize = "sharp left")]
    SharpLeft,
    #[strum(serialize = "uturn")]
    UTurn,
}

/// Lane indications of a single lane. A lane without markings is `none` on the wire.
pub type LaneIndications = OptionSet<LaneIndication>;

impl Vocabulary for LaneIndication {
    type Flags = LaneIndicationFlags;

    const NAME: &'static str = "lane indication";
    const EMPTY: Option<&'static str> = Some("none");

    fn to_flag(self) -> Self::Flags {
        LaneIndication::to_flag(self)
    }
}

pub(crate) mod bitflag {
    use super::LaneIndication;
    use bitflags::bitflags;

    bitflags! {
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub struct LaneIndicationFlags: u16 {
            const SHARP_RIGHT = 1 << 1;
            const RIGHT = 1 << 2;
            const SLIGHT_RIGHT = 1 << 3;
            const STRAIGHT_AHEAD = 1 << 4;
            const SLIGHT_LEFT = 1 << 5;
            const LEFT = 1 << 6;
            const SHARP_LEFT = 1 << 7;
            const U_TURN = 1 << 8;
        }
    }

    impl LaneIndication {
        pub const fn to_flag(self) -> LaneIndicationFlags {
            match self {
                LaneIndication::SharpRight => LaneIndicationFlags::SHARP_RIGHT,
                LaneIndication::Right => LaneIndicationFlags::RIGHT,
                LaneIndication::SlightRight => LaneIndicationFlags::SLIGHT_RIGHT,
                LaneIndication::StraightAhead => LaneIndicationFlags::STRAIGHT_AHEAD,
                LaneIndication::SlightLeft => LaneIndicationFlags::SLIGHT_LEFT,
                LaneIndication::Left => LaneIndicationFlags::LEFT,
                LaneIndication::SharpLeft => LaneIndicationFlags::SHARP_LEFT,
                LaneIndication::UTurn => LaneIndicationFlags::U_TURN,
            }
        }
    }
}
