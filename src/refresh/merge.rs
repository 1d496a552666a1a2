use std::ops::Range;

use log::debug;

use crate::model::{Route, Segmented};
use crate::refresh::{RefreshCursor, RefreshLegSource, RefreshSource, RefreshStreams};

/// The legs of a route of `total` legs covered by `refreshed` refreshed legs.
///
/// `None` when the refresh does not fit inside the route.
pub fn window(total: usize, refreshed: usize, cursor: &RefreshCursor) -> Option<Range<usize>> {
    let start = match cursor.leg_index {
        Some(index) => index,
        None => total.checked_sub(refreshed)?,
    };

    let end = start.checked_add(refreshed)?;
    (end <= total).then_some(start..end)
}

impl Route {
    /// Merges the selected streams of `source` into the route.
    ///
    /// Each stream is merged independently. A refresh which does not fit
    /// inside the route leaves it untouched.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, level = "debug"))]
    pub fn refresh<S: RefreshSource>(
        &mut self,
        source: &S,
        cursor: RefreshCursor,
        streams: RefreshStreams,
    ) {
        if streams.contains(RefreshStreams::ATTRIBUTES) {
            self.refresh_leg_attributes(source, cursor);
        }

        if streams.contains(RefreshStreams::INCIDENTS) {
            self.refresh_leg_incidents(source, cursor);
        }

        if streams.contains(RefreshStreams::CLOSURES) {
            self.refresh_leg_closures(source, cursor);
        }
    }

    /// Replaces the per-segment attributes of the covered legs, and the
    /// travel times derived from them. Legs outside the refresh are kept.
    ///
    /// Returns whether the refresh fit inside the route.
    pub fn refresh_leg_attributes<S: RefreshSource>(
        &mut self,
        source: &S,
        cursor: RefreshCursor,
    ) -> bool {
        let refreshed = source.refreshed_legs();
        let Some(range) = self.refresh_window(refreshed.len(), &cursor, "attributes") else {
            return false;
        };

        for (position, (leg, update)) in self.legs[range].iter_mut().zip(refreshed).enumerate() {
            let offset = if position == 0 { cursor.leg_shape_index } else { 0 };
            leg.attributes.merge(update.attributes(), offset);

            if let Some(travel_time) = leg.attributes.expected_travel_time() {
                leg.expected_travel_time = travel_time;
            }
        }

        self.recompute_travel_time();
        true
    }

    /// Replaces the incidents of the covered legs. Unlike attributes, the
    /// incidents of the legs after the refresh are cleared, those of the
    /// legs before it are kept.
    pub fn refresh_leg_incidents<S: RefreshSource>(
        &mut self,
        source: &S,
        cursor: RefreshCursor,
    ) -> bool {
        let refreshed = source.refreshed_legs();
        let Some(range) = self.refresh_window(refreshed.len(), &cursor, "incidents") else {
            return false;
        };

        for (position, leg) in self.legs[range.start..].iter_mut().enumerate() {
            leg.incidents = match refreshed.get(position) {
                Some(update) => {
                    let offset = if position == 0 { cursor.leg_shape_index } else { 0 };
                    merge_segments(leg.incidents.take(), update.incidents(), offset)
                }
                None => None,
            };
        }

        true
    }

    /// Replaces the closures of the covered legs, clearing those of the
    /// legs after the refresh.
    pub fn refresh_leg_closures<S: RefreshSource>(
        &mut self,
        source: &S,
        cursor: RefreshCursor,
    ) -> bool {
        let refreshed = source.refreshed_legs();
        let Some(range) = self.refresh_window(refreshed.len(), &cursor, "closures") else {
            return false;
        };

        for (position, leg) in self.legs[range.start..].iter_mut().enumerate() {
            leg.closures = match refreshed.get(position) {
                Some(update) => {
                    let offset = if position == 0 { cursor.leg_shape_index } else { 0 };
                    merge_segments(leg.closures.take(), update.closures(), offset)
                }
                None => None,
            };
        }

        true
    }

    fn refresh_window(
        &self,
        refreshed: usize,
        cursor: &RefreshCursor,
        stream: &str,
    ) -> Option<Range<usize>> {
        let range = window(self.legs.len(), refreshed, cursor);

        match &range {
            Some(range) => debug!(
                "refreshing {stream} of legs {range:?} from shape index {}",
                cursor.leg_shape_index
            ),
            None => debug!(
                "skipping {stream} refresh, {refreshed} legs from {:?} exceed {} legs",
                cursor.leg_index,
                self.legs.len()
            ),
        }

        range
    }
}

/// Keeps the existing items which end before `offset`, followed by the
/// refreshed items moved `offset` positions along the leg.
fn merge_segments<T: Segmented>(
    existing: Option<Vec<T>>,
    refreshed: Option<&[T]>,
    offset: usize,
) -> Option<Vec<T>> {
    let mut merged = existing
        .unwrap_or_default()
        .into_iter()
        .filter(|item| item.geometry_index_end() < offset)
        .collect::<Vec<_>>();

    merged.extend(refreshed.unwrap_or_default().iter().cloned().map(|mut item| {
        item.shift(offset);
        item
    }));

    (!merged.is_empty()).then_some(merged)
}
