use geo::{Coord, LineString};

use crate::DirectionsError;
use crate::codec::LegWire;
use crate::context::Profile;
use crate::geometry::ShapeFormat;
use crate::model::{Attributes, Closure, Incident, RouteStep, Waypoint};

/// The part of a route between two waypoints which separate legs.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteLeg {
    /// Assigned from the request's leg-separating waypoints.
    pub source: Option<Waypoint>,
    pub destination: Option<Waypoint>,
    pub steps: Vec<RouteStep>,
    /// The most significant roads along the leg.
    pub name: String,
    pub distance: f64,
    pub expected_travel_time: f64,
    pub typical_travel_time: Option<f64>,
    pub profile: Profile,
    pub attributes: Attributes,
    pub incidents: Option<Vec<Incident>>,
    pub closures: Option<Vec<Closure>>,
}

impl RouteLeg {
    pub fn from_wire(
        wire: LegWire,
        format: Option<ShapeFormat>,
        profile: Profile,
    ) -> Result<Self, DirectionsError> {
        let steps = wire
            .steps
            .into_iter()
            .map(|step| RouteStep::from_wire(step, format))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(RouteLeg {
            source: None,
            destination: None,
            steps,
            name: wire.summary,
            distance: wire.distance,
            expected_travel_time: wire.duration,
            typical_travel_time: wire.duration_typical,
            profile,
            attributes: wire.annotation.unwrap_or_default(),
            incidents: wire.incidents,
            closures: wire.closures,
        })
    }

    pub fn to_wire(&self, format: ShapeFormat) -> Result<LegWire, DirectionsError> {
        let steps = self
            .steps
            .iter()
            .map(|step| step.to_wire(format))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(LegWire {
            summary: self.name.clone(),
            distance: self.distance,
            duration: self.expected_travel_time,
            duration_typical: self.typical_travel_time,
            steps,
            annotation: (!self.attributes.is_empty()).then(|| self.attributes.clone()),
            incidents: self.incidents.clone(),
            closures: self.closures.clone(),
        })
    }

    /// The leg's geometry, stitched from the geometry of its steps.
    ///
    /// Consecutive steps share their joining coordinate, which appears
    /// once in the result. `None` when no step carries a shape.
    pub fn shape(&self) -> Option<LineString<f64>> {
        let mut coordinates: Vec<Coord<f64>> = Vec::new();

        for shape in self.steps.iter().filter_map(|step| step.shape.as_ref()) {
            let mut points = shape.0.iter().copied().peekable();
            points.next_if(|first| coordinates.last() == Some(first));
            coordinates.extend(points);
        }

        (!coordinates.is_empty()).then(|| LineString::new(coordinates))
    }
}
