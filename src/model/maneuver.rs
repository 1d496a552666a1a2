use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::impl_token_serde;

/// The kind of maneuver that completes a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, AsRefStr)]
pub enum ManeuverType {
    #[strum(serialize = "depart")]
    Depart,
    #[strum(serialize = "turn")]
    Turn,
    #[strum(serialize = "continue")]
    Continue,
    #[strum(serialize = "new name")]
    PassNameChange,
    #[strum(serialize = "merge")]
    Merge,
    #[strum(serialize = "on ramp")]
    TakeOnRamp,
    #[strum(serialize = "off ramp")]
    TakeOffRamp,
    #[strum(serialize = "fork")]
    ReachFork,
    #[strum(serialize = "end of road")]
    ReachEnd,
    #[strum(serialize = "use lane")]
    UseLane,
    #[strum(serialize = "roundabout")]
    TakeRoundabout,
    #[strum(serialize = "rotary")]
    TakeRotary,
    #[strum(serialize = "roundabout turn")]
    TurnAtRoundabout,
    #[strum(serialize = "exit roundabout")]
    ExitRoundabout,
    #[strum(serialize = "exit rotary")]
    ExitRotary,
    #[strum(serialize = "notification")]
    HeedWarning,
    #[strum(serialize = "arrive")]
    Arrive,
}

impl ManeuverType {
    /// Entering a roundabout or rotary, where the step is named after
    /// the circle and the road it exits onto becomes the exit name.
    pub const fn enters_circle(&self) -> bool {
        matches!(self, ManeuverType::TakeRoundabout | ManeuverType::TakeRotary)
    }
}

/// Direction information qualifying a [`ManeuverType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, AsRefStr)]
pub enum ManeuverDirection {
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

/// The mode of travel along a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter, AsRefStr)]
pub enum TransportType {
    #[default]
    #[strum(serialize = "driving")]
    Automobile,
    #[strum(serialize = "ferry")]
    Ferry,
    #[strum(serialize = "movable bridge")]
    MovableBridge,
    #[strum(serialize = "unaccessible")]
    Inaccessible,
    #[strum(serialize = "walking")]
    Walking,
    #[strum(serialize = "pushing bike")]
    PushingBike,
    #[strum(serialize = "cycling")]
    Cycling,
    #[strum(serialize = "train")]
    Train,
}

/// The side of the road traffic drives on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum DrivingSide {
    Left,
    #[default]
    Right,
}

impl_token_serde!(ManeuverType);
impl_token_serde!(ManeuverDirection);
impl_token_serde!(TransportType);
impl_token_serde!(DrivingSide);
