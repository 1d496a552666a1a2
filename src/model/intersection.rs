use geo::Coord;
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::codec::coordinate;
use crate::index::{IndexError, IndexSet};
use crate::options::{LaneIndications, RoadClasses};

/// A junction along a step, described from the point of view of the
/// approaching traveller.
#[derive(Debug, Clone, PartialEq)]
pub struct Intersection {
    pub location: Coord<f64>,
    /// Bearing of every road meeting at the intersection, clockwise from north.
    pub headings: Vec<f64>,
    /// Positions into `headings` through which the intersection may be left.
    pub outlet_indexes: IndexSet,
    pub approach_index: Option<usize>,
    pub outlet_index: Option<usize>,
    /// Lanes of the approach, leftmost first.
    pub approach_lanes: Option<Vec<LaneIndications>>,
    /// Positions into `approach_lanes` usable to follow the route.
    pub usable_approach_lanes: Option<IndexSet>,
    pub outlet_road_classes: Option<RoadClasses>,
    pub tunnel_name: Option<String>,
    pub is_urban: Option<bool>,
    pub admin_index: Option<usize>,
    pub geometry_index: Option<usize>,
}

impl Intersection {
    /// Checks every index set against the array it indexes.
    pub fn validate(&self) -> Result<(), IndexError> {
        self.outlet_indexes.check_bounds(self.headings.len())?;

        if let (Some(lanes), Some(usable)) = (&self.approach_lanes, &self.usable_approach_lanes) {
            usable.check_bounds(lanes.len())?;
        }

        Ok(())
    }
}

#[derive(Serialize, Deserialize)]
struct IntersectionWire {
    #[serde(with = "coordinate")]
    location: Coord<f64>,
    bearings: Vec<f64>,
    entry: Vec<bool>,
    #[serde(rename = "in", default, skip_serializing_if = "Option::is_none")]
    approach: Option<usize>,
    #[serde(rename = "out", default, skip_serializing_if = "Option::is_none")]
    outlet: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    lanes: Option<Vec<LaneWire>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    classes: Option<RoadClasses>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tunnel_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    is_urban: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    admin_index: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    geometry_index: Option<usize>,
}

#[derive(Serialize, Deserialize)]
struct LaneWire {
    indications: LaneIndications,
    valid: bool,
}

impl TryFrom<IntersectionWire> for Intersection {
    type Error = IndexError;

    fn try_from(wire: IntersectionWire) -> Result<Self, Self::Error> {
        let (approach_lanes, usable_approach_lanes) = match wire.lanes {
            Some(lanes) => {
                let usable = lanes.iter().map(|lane| lane.valid).collect::<Vec<_>>();
                let indications = lanes.into_iter().map(|lane| lane.indications).collect();
                (Some(indications), Some(IndexSet::from_dense(&usable)))
            }
            None => (None, None),
        };

        let intersection = Intersection {
            location: wire.location,
            outlet_indexes: IndexSet::from_dense(&wire.entry),
            headings: wire.bearings,
            approach_index: wire.approach,
            outlet_index: wire.outlet,
            approach_lanes,
            usable_approach_lanes,
            outlet_road_classes: wire.classes,
            tunnel_name: wire.tunnel_name,
            is_urban: wire.is_urban,
            admin_index: wire.admin_index,
            geometry_index: wire.geometry_index,
        };

        intersection.validate()?;
        Ok(intersection)
    }
}

impl TryFrom<&Intersection> for IntersectionWire {
    type Error = IndexError;

    fn try_from(intersection: &Intersection) -> Result<Self, Self::Error> {
        let lanes = match (
            &intersection.approach_lanes,
            &intersection.usable_approach_lanes,
        ) {
            (Some(lanes), Some(usable)) => {
                let valid = usable.to_dense(lanes.len())?;
                let lanes = lanes
                    .iter()
                    .zip(valid)
                    .map(|(indications, valid)| LaneWire {
                        indications: indications.clone(),
                        valid,
                    })
                    .collect();
                Some(lanes)
            }
            _ => None,
        };

        Ok(IntersectionWire {
            location: intersection.location,
            bearings: intersection.headings.clone(),
            entry: intersection
                .outlet_indexes
                .to_dense(intersection.headings.len())?,
            approach: intersection.approach_index,
            outlet: intersection.outlet_index,
            lanes,
            classes: intersection.outlet_road_classes.clone(),
            tunnel_name: intersection.tunnel_name.clone(),
            is_urban: intersection.is_urban,
            admin_index: intersection.admin_index,
            geometry_index: intersection.geometry_index,
        })
    }
}

impl<'de> Deserialize<'de> for Intersection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let wire = IntersectionWire::deserialize(deserializer)?;
        Intersection::try_from(wire).map_err(serde::de::Error::custom)
    }
}

impl Serialize for Intersection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        IntersectionWire::try_from(self)
            .map_err(S::Error::custom)?
            .serialize(serializer)
    }
}
