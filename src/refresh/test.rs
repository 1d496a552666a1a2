#![cfg(test)]

use crate::context::{ResponseOptions, RouteOptions};
use crate::model::{Attributes, Closure, Impact, Incident, IncidentKind, Route, RouteLeg};
use crate::refresh::merge::window;
use crate::refresh::*;

fn incident(id: &str, start: usize, end: usize) -> Incident {
    Incident {
        id: id.to_string(),
        kind: IncidentKind::Congestion,
        description: String::new(),
        creation_time: "2026-01-01T00:00:00Z".to_string(),
        start_time: "2026-01-01T00:00:00Z".to_string(),
        end_time: "2026-01-01T01:00:00Z".to_string(),
        impact: Some(Impact::Low),
        sub_type: None,
        sub_type_description: None,
        alertc_codes: None,
        lanes_blocked: None,
        geometry_index_start: start,
        geometry_index_end: end,
    }
}

fn closure(start: usize, end: usize) -> Closure {
    Closure {
        geometry_index_start: start,
        geometry_index_end: end,
    }
}

fn leg(distances: &[f64], travel_times: &[f64], incident_id: &str) -> RouteLeg {
    RouteLeg {
        source: None,
        destination: None,
        steps: vec![],
        name: String::new(),
        distance: distances.iter().sum(),
        expected_travel_time: travel_times.iter().sum(),
        typical_travel_time: None,
        profile: Default::default(),
        attributes: Attributes {
            segment_distances: Some(distances.to_vec()),
            expected_segment_travel_times: Some(travel_times.to_vec()),
            ..Default::default()
        },
        incidents: Some(vec![incident(incident_id, 0, 1)]),
        closures: Some(vec![closure(2, 3)]),
    }
}

/// Three legs of five segments each.
fn route() -> Route {
    let legs = vec![
        leg(&[1.0, 2.0, 3.0, 4.0, 5.0], &[1.0; 5], "first"),
        leg(&[1.0, 2.0, 3.0, 4.0, 5.0], &[2.0; 5], "second"),
        leg(&[1.0, 2.0, 3.0, 4.0, 5.0], &[3.0; 5], "third"),
    ];

    Route {
        expected_travel_time: legs.iter().map(|leg| leg.expected_travel_time).sum(),
        distance: legs.iter().map(|leg| leg.distance).sum(),
        legs,
        shape: None,
        typical_travel_time: None,
        route_identifier: Some("route".to_string()),
        speech_locale: None,
        options: ResponseOptions::Route(RouteOptions::default()),
    }
}

fn refreshed(legs: usize) -> RefreshedRoute {
    RefreshedRoute {
        legs: (0..legs)
            .map(|_| RefreshedRouteLeg {
                attributes: Attributes {
                    segment_distances: Some(vec![30.0, 40.0]),
                    expected_segment_travel_times: Some(vec![10.0, 10.0]),
                    ..Default::default()
                },
                incidents: Some(vec![incident("refreshed", 0, 1)]),
                closures: Some(vec![closure(0, 1)]),
            })
            .collect(),
    }
}

fn incident_ids(leg: &RouteLeg) -> Option<Vec<&str>> {
    leg.incidents
        .as_ref()
        .map(|incidents| incidents.iter().map(|incident| incident.id.as_str()).collect())
}

#[test]
fn window_alignment() {
    let trailing = RefreshCursor::default();
    assert_eq!(window(3, 1, &trailing), Some(2..3));
    assert_eq!(window(3, 3, &trailing), Some(0..3));
    assert_eq!(window(3, 4, &trailing), None);

    assert_eq!(window(3, 1, &RefreshCursor::new(1, 0)), Some(1..2));
    assert_eq!(window(3, 2, &RefreshCursor::new(1, 0)), Some(1..3));
    assert_eq!(window(3, 2, &RefreshCursor::new(2, 0)), None);
}

#[test]
fn attributes_merge_from_shape_index() {
    let mut route = route();
    let applied = route.refresh_leg_attributes(&refreshed(1), RefreshCursor::new(0, 3));

    assert!(applied);
    assert_eq!(
        route.legs[0].attributes.segment_distances,
        Some(vec![1.0, 2.0, 3.0, 30.0, 40.0])
    );
    assert_eq!(
        route.legs[0].attributes.expected_segment_travel_times,
        Some(vec![1.0, 1.0, 1.0, 10.0, 10.0])
    );
    assert_eq!(route.legs[0].expected_travel_time, 23.0);
    assert_eq!(route.expected_travel_time, 23.0 + 10.0 + 15.0);
}

#[test]
fn attributes_replace_later_legs_in_full() {
    let mut route = route();
    route.refresh_leg_attributes(&refreshed(2), RefreshCursor::new(1, 3));

    assert_eq!(
        route.legs[1].attributes.segment_distances,
        Some(vec![1.0, 2.0, 3.0, 30.0, 40.0])
    );
    assert_eq!(
        route.legs[2].attributes.segment_distances,
        Some(vec![30.0, 40.0])
    );
    // Outside the refresh.
    assert_eq!(
        route.legs[0].attributes.segment_distances,
        Some(vec![1.0, 2.0, 3.0, 4.0, 5.0])
    );
}

#[test]
fn attributes_align_with_trailing_legs() {
    let mut route = route();
    route.refresh_leg_attributes(&refreshed(1), RefreshCursor::default());

    assert_eq!(
        route.legs[2].attributes.segment_distances,
        Some(vec![30.0, 40.0])
    );
    assert_eq!(
        route.legs[0].attributes.segment_distances,
        Some(vec![1.0, 2.0, 3.0, 4.0, 5.0])
    );
    assert_eq!(
        route.legs[1].attributes.segment_distances,
        Some(vec![1.0, 2.0, 3.0, 4.0, 5.0])
    );
    // Incidents are a separate stream.
    assert_eq!(incident_ids(&route.legs[0]), Some(vec!["first"]));
}

#[test]
fn incidents_clear_legs_after_refresh() {
    let mut route = route();
    let applied = route.refresh_leg_incidents(&refreshed(1), RefreshCursor::new(1, 0));

    assert!(applied);
    assert_eq!(incident_ids(&route.legs[0]), Some(vec!["first"]));
    assert_eq!(incident_ids(&route.legs[1]), Some(vec!["refreshed"]));
    assert_eq!(incident_ids(&route.legs[2]), None);
}

#[test]
fn incidents_keep_those_before_shape_index() {
    let mut route = route();
    route.legs[1].incidents = Some(vec![
        incident("behind", 0, 1),
        incident("ahead", 3, 4),
    ]);

    route.refresh_leg_incidents(&refreshed(1), RefreshCursor::new(1, 2));

    let incidents = route.legs[1]
        .incidents
        .as_ref()
        .expect("incidents must be present");
    assert_eq!(incident_ids(&route.legs[1]), Some(vec!["behind", "refreshed"]));
    assert_eq!(incidents[1].geometry_index_start, 2);
    assert_eq!(incidents[1].geometry_index_end, 3);
}

#[test]
fn closures_follow_incident_policy() {
    let mut trailing = route();
    trailing.refresh_leg_closures(&refreshed(1), RefreshCursor::default());

    // Trailing alignment leaves no legs after the refresh.
    assert_eq!(trailing.legs[0].closures, Some(vec![closure(2, 3)]));
    assert_eq!(trailing.legs[1].closures, Some(vec![closure(2, 3)]));
    assert_eq!(trailing.legs[2].closures, Some(vec![closure(0, 1)]));

    let mut leading = route();
    leading.refresh_leg_closures(&refreshed(1), RefreshCursor::new(0, 0));

    assert_eq!(leading.legs[0].closures, Some(vec![closure(0, 1)]));
    assert_eq!(leading.legs[1].closures, None);
    assert_eq!(leading.legs[2].closures, None);
}

#[test]
fn empty_refresh_clears_closures() {
    let mut route = route();
    let mut source = refreshed(1);
    source.legs[0].closures = Some(vec![]);

    route.refresh_leg_closures(&source, RefreshCursor::new(2, 0));
    assert_eq!(route.legs[2].closures, None);
}

#[test_log::test]
fn out_of_bounds_refresh_is_a_no_op() {
    let original = route();

    for cursor in [RefreshCursor::new(2, 0), RefreshCursor::new(3, 0)] {
        let mut route = original.clone();
        route.refresh(&refreshed(2), cursor, RefreshStreams::all());
        assert_eq!(route, original, "must leave the route untouched");
    }

    let mut route = original.clone();
    assert!(!route.refresh_leg_attributes(&refreshed(4), RefreshCursor::default()));
    assert!(!route.refresh_leg_incidents(&refreshed(4), RefreshCursor::default()));
    assert!(!route.refresh_leg_closures(&refreshed(4), RefreshCursor::default()));
    assert_eq!(route, original);
}

#[test]
fn streams_are_independent() {
    let mut route = route();
    route.refresh(
        &refreshed(1),
        RefreshCursor::new(0, 0),
        RefreshStreams::ATTRIBUTES,
    );

    assert_eq!(
        route.legs[0].attributes.segment_distances,
        Some(vec![30.0, 40.0])
    );
    assert_eq!(incident_ids(&route.legs[2]), Some(vec!["third"]));
    assert_eq!(route.legs[2].closures, Some(vec![closure(2, 3)]));
}

#[test]
fn route_refreshes_from_route() {
    let mut route = route();
    let mut newer = route.clone();
    for leg in &mut newer.legs {
        leg.attributes.expected_segment_travel_times = Some(vec![4.0; 5]);
    }

    route.refresh(&newer, RefreshCursor::default(), RefreshStreams::default());

    assert!(route.legs.iter().all(|leg| leg.expected_travel_time == 20.0));
    assert_eq!(route.expected_travel_time, 60.0);
}
