use geo::{Coord, LineString};
use log::trace;

use crate::codec::{ManeuverWire, StepWire};
use crate::geometry::{ShapeFormat, decode_shape, encode_shape};
use crate::model::{
    DrivingSide, Intersection, ManeuverDirection, ManeuverType, SpokenInstruction, TransportType,
    VisualInstructionBanner,
};
use crate::road::{Road, tag_values};
use crate::DirectionsError;

/// One maneuver along a leg, and the road travelled until the next.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteStep {
    pub transport_type: TransportType,
    pub maneuver_location: Option<Coord<f64>>,
    pub maneuver_type: Option<ManeuverType>,
    pub maneuver_direction: Option<ManeuverDirection>,
    pub instructions: String,
    /// Heading immediately before the maneuver, clockwise from north.
    pub initial_heading: Option<f64>,
    /// Heading immediately after the maneuver.
    pub final_heading: Option<f64>,
    pub driving_side: DrivingSide,

    /// Names of the road travelled along. For roundabout and rotary
    /// maneuvers this is the name of the circle itself.
    pub names: Option<Vec<String>>,
    pub codes: Option<Vec<String>>,
    pub exit_codes: Option<Vec<String>>,
    /// Names of the road a roundabout or rotary is exited onto.
    pub exit_names: Option<Vec<String>>,
    pub phonetic_names: Option<Vec<String>>,
    pub phonetic_exit_names: Option<Vec<String>>,
    pub destinations: Option<Vec<String>>,
    pub destination_codes: Option<Vec<String>>,

    pub intersections: Option<Vec<Intersection>>,
    /// Number of the exit taken at a roundabout or rotary, counting from one.
    pub exit_index: Option<usize>,
    pub instructions_displayed_along_step: Option<Vec<VisualInstructionBanner>>,
    pub instructions_spoken_along_step: Option<Vec<SpokenInstruction>>,

    /// Metres.
    pub distance: f64,
    /// Seconds.
    pub expected_travel_time: f64,
    pub typical_travel_time: Option<f64>,
    pub shape: Option<LineString<f64>>,
}

impl RouteStep {
    /// Converts a wire step. A present geometry needs `format`.
    pub fn from_wire(wire: StepWire, format: Option<ShapeFormat>) -> Result<Self, DirectionsError> {
        let StepWire {
            geometry,
            name,
            reference,
            exits,
            destinations,
            rotary_name,
            pronunciation,
            rotary_pronunciation,
            maneuver,
            driving_side,
            distance,
            duration,
            duration_typical,
            mode,
            intersections,
            banner_instructions,
            voice_instructions,
        } = wire;

        let road = Road::parse(
            &name,
            reference.as_deref(),
            exits.as_deref(),
            destinations.as_deref(),
            rotary_name.as_deref(),
        );

        let pronunciation = pronunciation.as_deref().and_then(|value| tag_values(value, ';'));
        let enters_circle = maneuver.kind.is_some_and(|kind| kind.enters_circle());

        // The step is named after the circle, the road it leads onto is the exit.
        let (names, exit_names, phonetic_names, phonetic_exit_names) = if enters_circle {
            let rotary_pronunciation = rotary_pronunciation
                .as_deref()
                .and_then(|value| tag_values(value, ';'));
            (road.rotary_names, road.names, rotary_pronunciation, pronunciation)
        } else {
            (road.names, None, pronunciation, None)
        };

        let instructions = maneuver
            .instruction
            .clone()
            .unwrap_or_else(|| fallback_instruction(&maneuver));

        let banners = banner_instructions.map(|banners| {
            banners
                .into_iter()
                .map(|banner| VisualInstructionBanner {
                    driving_side,
                    ..banner
                })
                .collect()
        });

        let shape = decode_shape(geometry.as_ref(), format)?;
        trace!(
            "decoded step {:?} with {} coordinates",
            maneuver.kind,
            shape.as_ref().map_or(0, |shape| shape.0.len())
        );

        Ok(RouteStep {
            transport_type: mode.unwrap_or_default(),
            maneuver_location: maneuver.location,
            maneuver_type: maneuver.kind,
            maneuver_direction: maneuver.direction,
            instructions,
            initial_heading: maneuver.bearing_before,
            final_heading: maneuver.bearing_after,
            driving_side,
            names,
            codes: road.codes,
            exit_codes: road.exit_codes,
            exit_names,
            phonetic_names,
            phonetic_exit_names,
            destinations: road.destinations,
            destination_codes: road.destination_codes,
            intersections,
            exit_index: maneuver.exit_index,
            instructions_displayed_along_step: banners,
            instructions_spoken_along_step: voice_instructions,
            distance,
            expected_travel_time: duration,
            typical_travel_time: duration_typical,
            shape,
        })
    }

    pub fn to_wire(&self, format: ShapeFormat) -> Result<StepWire, DirectionsError> {
        let join = |values: &Option<Vec<String>>| Road::join_values(values.as_deref());

        let enters_circle = self
            .maneuver_type
            .is_some_and(|kind| kind.enters_circle());

        let (name, rotary_name, pronunciation, rotary_pronunciation) = if enters_circle {
            (
                join(&self.exit_names),
                join(&self.names),
                join(&self.phonetic_exit_names),
                join(&self.phonetic_names),
            )
        } else {
            (join(&self.names), None, join(&self.phonetic_names), None)
        };

        Ok(StepWire {
            geometry: encode_shape(self.shape.as_ref(), format)?,
            name: name.unwrap_or_default(),
            reference: join(&self.codes),
            exits: join(&self.exit_codes),
            destinations: Road::destination_description(
                self.destination_codes.as_deref(),
                self.destinations.as_deref(),
            ),
            rotary_name,
            pronunciation,
            rotary_pronunciation,
            maneuver: ManeuverWire {
                instruction: Some(self.instructions.clone()),
                kind: self.maneuver_type,
                direction: self.maneuver_direction,
                location: self.maneuver_location,
                bearing_before: self.initial_heading,
                bearing_after: self.final_heading,
                exit_index: self.exit_index,
            },
            driving_side: self.driving_side,
            distance: self.distance,
            duration: self.expected_travel_time,
            duration_typical: self.typical_travel_time,
            mode: Some(self.transport_type),
            intersections: self.intersections.clone(),
            banner_instructions: self.instructions_displayed_along_step.clone(),
            voice_instructions: self.instructions_spoken_along_step.clone(),
        })
    }
}

/// `"turn left"` style text for a maneuver which came without any.
fn fallback_instruction(maneuver: &ManeuverWire) -> String {
    match (maneuver.kind, maneuver.direction) {
        (Some(kind), Some(direction)) => format!("{kind} {direction}"),
        (Some(kind), None) => kind.to_string(),
        (None, Some(direction)) => direction.to_string(),
        (None, None) => String::new(),
    }
}
