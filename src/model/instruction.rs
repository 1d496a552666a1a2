use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

use crate::model::{DrivingSide, ManeuverDirection, ManeuverType};
use crate::options::LaneIndications;

/// An instruction to be read aloud as the traveller progresses along a step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpokenInstruction {
    /// Distance from the end of the step at which to speak.
    #[serde(rename = "distanceAlongGeometry")]
    pub distance_along_step: f64,
    #[serde(rename = "announcement")]
    pub text: String,
    #[serde(
        rename = "ssmlAnnouncement",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub ssml_text: Option<String>,
}

/// The instructions displayed from a given point along a step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualInstructionBanner {
    /// Distance from the end of the step at which to show the banner.
    #[serde(rename = "distanceAlongGeometry")]
    pub distance_along_step: f64,
    #[serde(rename = "primary")]
    pub primary_instruction: VisualInstruction,
    #[serde(
        rename = "secondary",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub secondary_instruction: Option<VisualInstruction>,
    #[serde(rename = "sub", default, skip_serializing_if = "Option::is_none")]
    pub tertiary_instruction: Option<VisualInstruction>,
    /// Inherited from the step carrying the banner.
    #[serde(skip)]
    pub driving_side: DrivingSide,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualInstruction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub maneuver_type: Option<ManeuverType>,
    #[serde(rename = "modifier", default, skip_serializing_if = "Option::is_none")]
    pub maneuver_direction: Option<ManeuverDirection>,
    /// Heading at which a roundabout is exited, for roundabout maneuvers.
    #[serde(rename = "degrees", default, skip_serializing_if = "Option::is_none")]
    pub final_heading: Option<f64>,
    #[serde(default)]
    pub components: Vec<VisualInstructionComponent>,
}

/// Text as shown on a banner, with an optional shorter form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextRepresentation {
    pub text: String,
    pub abbreviation: Option<String>,
    /// Lower values are abbreviated first when space is short.
    pub abbreviation_priority: Option<i64>,
}

/// One piece of a visual instruction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ComponentWire", into = "ComponentWire")]
pub enum VisualInstructionComponent {
    /// Separates two other components, such as the `/` between road codes.
    Delimiter { text: TextRepresentation },
    Text { text: TextRepresentation },
    /// A route shield, with text to show when the image is unavailable.
    Image {
        image_base_url: Option<String>,
        alternative_text: TextRepresentation,
    },
    /// The word for "exit", as localized for the banner.
    Exit { text: TextRepresentation },
    ExitCode { text: TextRepresentation },
    Lane {
        indications: LaneIndications,
        is_usable: bool,
        preferred_direction: Option<ManeuverDirection>,
    },
}

/// The `type` discriminant of a component on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, AsRefStr)]
enum ComponentType {
    #[strum(serialize = "delimiter")]
    Delimiter,
    #[strum(serialize = "text")]
    Text,
    #[strum(serialize = "icon")]
    Image,
    #[strum(serialize = "exit")]
    Exit,
    #[strum(serialize = "exit-number")]
    ExitCode,
    #[strum(serialize = "lane")]
    Lane,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ComponentWire {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(rename = "abbr", default, skip_serializing_if = "Option::is_none")]
    abbreviation: Option<String>,
    #[serde(rename = "abbr_priority", default, skip_serializing_if = "Option::is_none")]
    abbreviation_priority: Option<i64>,
    #[serde(rename = "imageBaseURL", default, skip_serializing_if = "Option::is_none")]
    image_base_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    directions: Option<LaneIndications>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    active_direction: Option<ManeuverDirection>,
}

impl ComponentWire {
    fn text_representation(&mut self) -> TextRepresentation {
        TextRepresentation {
            text: self.text.take().unwrap_or_default(),
            abbreviation: self.abbreviation.take(),
            abbreviation_priority: self.abbreviation_priority.take(),
        }
    }

    fn with_text(kind: ComponentType, text: TextRepresentation) -> Self {
        ComponentWire {
            kind: Some(kind.to_string()),
            text: Some(text.text),
            abbreviation: text.abbreviation,
            abbreviation_priority: text.abbreviation_priority,
            ..Default::default()
        }
    }
}

impl From<ComponentWire> for VisualInstructionComponent {
    fn from(mut wire: ComponentWire) -> Self {
        // Unknown and missing discriminants read as plain text.
        let kind = wire
            .kind
            .as_deref()
            .and_then(|kind| kind.parse::<ComponentType>().ok())
            .unwrap_or(ComponentType::Text);

        match kind {
            ComponentType::Delimiter => VisualInstructionComponent::Delimiter {
                text: wire.text_representation(),
            },
            ComponentType::Text => VisualInstructionComponent::Text {
                text: wire.text_representation(),
            },
            ComponentType::Image => VisualInstructionComponent::Image {
                image_base_url: wire.image_base_url.take(),
                alternative_text: wire.text_representation(),
            },
            ComponentType::Exit => VisualInstructionComponent::Exit {
                text: wire.text_representation(),
            },
            ComponentType::ExitCode => VisualInstructionComponent::ExitCode {
                text: wire.text_representation(),
            },
            ComponentType::Lane => VisualInstructionComponent::Lane {
                indications: wire.directions.unwrap_or_default(),
                is_usable: wire.active.unwrap_or_default(),
                preferred_direction: wire.active_direction,
            },
        }
    }
}

impl From<VisualInstructionComponent> for ComponentWire {
    fn from(component: VisualInstructionComponent) -> Self {
        match component {
            VisualInstructionComponent::Delimiter { text } => {
                ComponentWire::with_text(ComponentType::Delimiter, text)
            }
            VisualInstructionComponent::Text { text } => {
                ComponentWire::with_text(ComponentType::Text, text)
            }
            VisualInstructionComponent::Image {
                image_base_url,
                alternative_text,
            } => ComponentWire {
                image_base_url,
                ..ComponentWire::with_text(ComponentType::Image, alternative_text)
            },
            VisualInstructionComponent::Exit { text } => {
                ComponentWire::with_text(ComponentType::Exit, text)
            }
            VisualInstructionComponent::ExitCode { text } => {
                ComponentWire::with_text(ComponentType::ExitCode, text)
            }
            VisualInstructionComponent::Lane {
                indications,
                is_usable,
                preferred_direction,
            } => ComponentWire {
                kind: Some(ComponentType::Lane.to_string()),
                text: Some(String::new()),
                directions: Some(indications),
                active: Some(is_usable),
                active_direction: preferred_direction,
                ..Default::default()
            },
        }
    }
}
