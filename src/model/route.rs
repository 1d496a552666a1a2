use geo::LineString;
use log::{debug, warn};

use crate::codec::RouteWire;
use crate::context::{DecodeContext, ResponseOptions};
use crate::geometry::{decode_shape, encode_shape};
use crate::model::{RouteLeg, Waypoint, leg_separators};
use crate::DirectionsError;

/// A route between the requested waypoints, assembled from its legs.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub legs: Vec<RouteLeg>,
    pub shape: Option<LineString<f64>>,
    /// Metres.
    pub distance: f64,
    /// Seconds, under the traffic conditions at the time of the request.
    pub expected_travel_time: f64,
    /// Seconds, under typical traffic conditions.
    pub typical_travel_time: Option<f64>,
    /// Identifier of the response the route came from, used to refresh it.
    pub route_identifier: Option<String>,
    /// Locale of the spoken instructions, as a BCP 47 tag.
    pub speech_locale: Option<String>,
    /// The options the route was decoded against.
    pub options: ResponseOptions,
}

impl Route {
    /// Assembles a route from its wire form.
    ///
    /// Fails with a missing context error when `context` carries no options.
    /// The legs' endpoints are taken from the options' waypoints, see
    /// [`Route::assign_endpoints`] to take them from elsewhere.
    pub fn from_wire(wire: RouteWire, context: &DecodeContext) -> Result<Self, DirectionsError> {
        let options = context.options()?;
        let format = context.shape_format();
        let profile = options.profile();

        let legs = wire
            .legs
            .into_iter()
            .map(|leg| RouteLeg::from_wire(leg, format, profile))
            .collect::<Result<Vec<_>, _>>()?;

        let mut route = Route {
            legs,
            shape: decode_shape(wire.geometry.as_ref(), format)?,
            distance: wire.distance,
            expected_travel_time: wire.duration,
            typical_travel_time: wire.duration_typical,
            route_identifier: None,
            speech_locale: wire.voice_locale,
            options: options.clone(),
        };

        route.assign_endpoints(options.waypoints());
        Ok(route)
    }

    pub fn to_wire(&self) -> Result<RouteWire, DirectionsError> {
        let format = self.options.shape_format();

        let legs = self
            .legs
            .iter()
            .map(|leg| leg.to_wire(format))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(RouteWire {
            geometry: encode_shape(self.shape.as_ref(), format)?,
            legs,
            distance: self.distance,
            duration: self.expected_travel_time,
            duration_typical: self.typical_travel_time,
            voice_locale: self.speech_locale.clone(),
        })
    }

    /// Decodes a lone route object, outside of any response.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, level = "debug"))]
    pub fn from_slice(bytes: &[u8], context: &DecodeContext) -> Result<Self, DirectionsError> {
        let wire = serde_json::from_slice::<RouteWire>(bytes)?;
        Route::from_wire(wire, context)
    }

    pub fn to_vec(&self) -> Result<Vec<u8>, DirectionsError> {
        Ok(serde_json::to_vec(&self.to_wire()?)?)
    }

    /// Ties each leg to the leg-separating waypoints it spans, leg `i`
    /// running from the `i`th to the `i+1`th separator.
    pub fn assign_endpoints(&mut self, waypoints: &[Waypoint]) {
        let separators = leg_separators(waypoints);

        if !separators.is_empty() && separators.len() != self.legs.len() + 1 {
            warn!(
                "{} leg-separating waypoints cannot bound {} legs",
                separators.len(),
                self.legs.len()
            );
        }

        for (leg, bounds) in self.legs.iter_mut().zip(separators.windows(2)) {
            leg.source = Some(bounds[0].clone());
            leg.destination = Some(bounds[1].clone());
        }

        debug!("assigned endpoints to {} legs", self.legs.len());
    }

    /// The sum of the legs' travel times.
    pub(crate) fn recompute_travel_time(&mut self) {
        self.expected_travel_time = self.legs.iter().map(|leg| leg.expected_travel_time).sum();
    }
}
