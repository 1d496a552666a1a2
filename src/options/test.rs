#![cfg(test)]

use crate::options::*;

#[test]
fn decode_reorders_into_declared_order() {
    let options = "maxspeed,distance,speed,duration"
        .parse::<AttributeOptions>()
        .expect("must parse successfully");

    assert_eq!(options.to_string(), "distance,duration,speed,maxspeed");
    assert_eq!(
        options.members().collect::<Vec<_>>(),
        vec![
            AttributeOption::Distance,
            AttributeOption::ExpectedTravelTime,
            AttributeOption::Speed,
            AttributeOption::MaximumSpeedLimit,
        ]
    );
}

#[test]
fn decode_is_duplicate_safe() {
    let options = "speed,,speed, congestion"
        .parse::<AttributeOptions>()
        .expect("must parse successfully");

    assert_eq!(options.descriptions(), vec!["speed", "congestion"]);
}

#[test]
fn round_trip_preserves_token_set() {
    let lists = [
        vec!["congestion_numeric", "distance"],
        vec!["duration", "speed", "maxspeed", "congestion"],
        vec![],
    ];

    for tokens in lists {
        let decoded =
            AttributeOptions::from_descriptions(&tokens).expect("must parse successfully");
        let mut encoded = decoded.descriptions();
        let mut expected = tokens.iter().map(|t| t.to_string()).collect::<Vec<_>>();

        encoded.sort();
        expected.sort();
        assert_eq!(encoded, expected);
    }
}

#[test]
fn unrecognized_token_fails() {
    let failure = "toll,cobblestone".parse::<RoadClasses>();

    assert_eq!(
        failure,
        Err(OptionError::UnrecognizedToken {
            vocabulary: "road class",
            token: "cobblestone".to_string(),
        })
    );
}

#[test]
fn road_classes_decode_from_json_array() {
    let classes: RoadClasses =
        serde_json::from_str(r#"["motorway", "toll", "hov3"]"#).expect("must parse successfully");

    assert!(classes.has(RoadClass::Motorway));
    assert!(classes.has(RoadClass::HighOccupancyVehicle3));
    assert!(!classes.has(RoadClass::Ferry));

    let encoded = serde_json::to_string(&classes).expect("must encode successfully");
    assert_eq!(encoded, r#"["toll","motorway","hov3"]"#);
}

#[test]
fn lane_indications_use_none_for_empty() {
    let none: LaneIndications = serde_json::from_str(r#"["none"]"#).expect("must parse");
    assert!(none.is_empty());
    assert_eq!(none.to_string(), "none");
    assert_eq!(serde_json::to_string(&none).expect("must encode"), r#"["none"]"#);

    let lanes: LaneIndications =
        serde_json::from_str(r#"["straight", "slight left"]"#).expect("must parse");
    assert_eq!(lanes.to_string(), "straight,slight left");
}

#[test]
fn empty_attribute_set_encodes_as_empty_list() {
    let options = AttributeOptions::empty();

    assert_eq!(options.to_string(), "");
    assert_eq!(serde_json::to_string(&options).expect("must encode"), "[]");
}

#[test]
fn contains_requires_every_member() {
    let options = AttributeOptions::from_iter([AttributeOption::Distance, AttributeOption::Speed]);

    assert!(options.contains(&AttributeOptions::from(AttributeOption::Speed)));
    assert!(options.contains(&options.clone()));
    assert!(!options.contains(&AttributeOptions::from_iter([
        AttributeOption::Speed,
        AttributeOption::CongestionLevel
    ])));
    assert!(!options.contains(&AttributeOptions::empty()));
}

#[test]
fn contains_rejects_label_collision() {
    let mut options = AttributeOptions::empty();
    options.update_custom_option((4, "closures"));

    assert!(options.contains(&AttributeOptions::from_slot(4)));
    assert!(options.contains(&AttributeOptions::custom(4, "closures")));
    assert!(!options.contains(&AttributeOptions::custom(4, "incidents")));
}

#[test]
fn insert_refuses_intersecting_members() {
    let mut options = AttributeOptions::from(AttributeOption::Distance);

    let (inserted, member) = options.insert(AttributeOptions::from(AttributeOption::Speed));
    assert!(inserted);
    assert_eq!(member, AttributeOptions::from(AttributeOption::Speed));

    let (inserted, collision) = options.insert(AttributeOptions::from_iter([
        AttributeOption::Speed,
        AttributeOption::CongestionLevel,
    ]));
    assert!(!inserted);
    assert_eq!(collision, AttributeOptions::from(AttributeOption::Speed));
    assert!(!options.has(AttributeOption::CongestionLevel));
}

#[test]
fn insert_collision_reports_own_labels() {
    let mut options = AttributeOptions::custom(2, "tolls");

    let (inserted, collision) = options.insert(AttributeOptions::custom(2, "fees"));
    assert!(!inserted);
    assert_eq!(collision.label(2), Some("tolls"));
    assert_eq!(options.label(2), Some("tolls"));
}

#[test]
fn update_keeps_existing_labels() {
    let mut options = AttributeOptions::custom(7, "first");

    let previous = options.update(AttributeOptions::custom(7, "second"));
    assert_eq!(options.label(7), Some("first"));
    assert_eq!(previous, Some(AttributeOptions::custom(7, "first")));

    let previous = options.update(AttributeOptions::from(AttributeOption::Speed));
    assert_eq!(previous, None);
    assert_eq!(options.to_string(), "speed,first");
}

#[test]
fn update_labels_unlabelled_slot() {
    let mut options = AttributeOptions::from_slot(1);
    options.update(AttributeOptions::custom(1, "named"));

    assert_eq!(options.label(1), Some("named"));
}

#[test]
fn custom_option_overwrites_label() {
    let mut options = AttributeOptions::custom(5, "old");

    let previous = options.update_custom_option((5, "new"));
    assert_eq!(previous, Some(AttributeOptions::custom(5, "old")));
    assert_eq!(options.label(5), Some("new"));

    let previous = options.update_custom_option((6, "other"));
    assert_eq!(previous, None);
    assert_eq!(options.slots().collect::<Vec<_>>(), vec![5, 6]);
    assert_eq!(options.descriptions(), vec!["new", "other"]);
}

#[test]
fn remove_clears_members_and_labels() {
    let mut options = AttributeOptions::from_iter([AttributeOption::Distance, AttributeOption::Speed]);
    options.update_custom_option((3, "closures"));

    let removed = options.remove(&AttributeOptions::from(AttributeOption::Speed));
    assert_eq!(removed, Some(AttributeOptions::from(AttributeOption::Speed)));

    let removed = options.remove(&AttributeOptions::from_slot(3));
    assert_eq!(removed, Some(AttributeOptions::custom(3, "closures")));
    assert_eq!(options.label(3), None);
    assert_eq!(options.slots().count(), 0);
    assert_eq!(options.to_string(), "distance");
}

#[test]
fn remove_of_absent_member_is_none() {
    let mut options = AttributeOptions::from(AttributeOption::Distance);

    assert_eq!(options.remove(&AttributeOptions::from(AttributeOption::Speed)), None);
    assert_eq!(options.remove(&AttributeOptions::custom(9, "ghost")), None);
    assert_eq!(options, AttributeOptions::from(AttributeOption::Distance));
}

#[test]
fn remove_preserves_differently_labelled_slot() {
    let mut options = AttributeOptions::empty();
    options.update_custom_option((3, "closures"));
    options.update_custom_option((4, "tolls"));

    let mut request = AttributeOptions::custom(3, "incidents");
    request.update_custom_option((4, "tolls"));

    let removed = options.remove(&request);

    assert_eq!(removed, Some(AttributeOptions::custom(4, "tolls")));
    assert_eq!(options.slots().collect::<Vec<_>>(), vec![3]);
    assert_eq!(options.label(3), Some("closures"));
}

#[test]
fn remove_with_unlabelled_argument_clears_labelled_slot() {
    let mut options = AttributeOptions::custom(3, "closures");

    let removed = options.remove(&AttributeOptions::from_slot(3));

    assert_eq!(removed, Some(AttributeOptions::custom(3, "closures")));
    assert!(options.is_empty());
}
