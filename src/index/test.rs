#![cfg(test)]

use crate::index::{IndexError, IndexSet};

#[test]
fn decodes_set_positions() {
    let set = IndexSet::from_dense(&[false, true, true, false, true]);

    assert_eq!(set.iter().collect::<Vec<_>>(), vec![1, 2, 4]);
    assert!(set.contains(2));
    assert!(!set.contains(0));
}

#[test]
fn round_trips_dense_arrays() {
    let arrays: [&[bool]; 5] = [
        &[],
        &[false],
        &[true],
        &[true, false, false, false],
        &[false, true, false, true, true, false],
    ];

    for flags in arrays {
        let set = IndexSet::from_dense(flags);
        let dense = set.to_dense(flags.len()).expect("must encode within universe");

        assert_eq!(dense, flags);
    }
}

#[test]
fn universe_pads_trailing_flags() {
    let set = IndexSet::from([0, 2]);

    assert_eq!(
        set.to_dense(5),
        Ok(vec![true, false, true, false, false])
    );
}

#[test]
fn member_outside_universe_fails() {
    let set = IndexSet::from([1, 3]);

    assert_eq!(
        set.to_dense(3),
        Err(IndexError::OutOfBounds {
            index: 3,
            universe: 3
        })
    );
    assert_eq!(IndexSet::new().to_dense(0), Ok(vec![]));
}
