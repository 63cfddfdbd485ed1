// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Filtering of raw nearby items into the displayable subset.
//!
//! Pure: one pass over the items with the given criteria and clock
//! produces the same output every time. The host UI re-renders from the
//! returned snapshot; nothing here mutates shared state.

use crate::models::filter::FilterOptions;
use crate::models::nearby::{ActivityItem, ActivitySummary, Coordinates, NearbyItem};
use chrono::{DateTime, TimeZone, Utc};
use geo::{Distance, Haversine};

/// Result of one filter pass.
#[derive(Debug, Clone)]
pub struct FilterOutcome {
    /// Items to put on the map: passing activities plus every cluster
    /// and ghost anchor, in input order.
    pub display_items: Vec<NearbyItem>,
    /// The passing activities projected for the list panel, in input order.
    pub activity_list: Vec<ActivitySummary>,
}

/// Apply the filter criteria to a raw item list.
///
/// Only `activity` items are filtered; clusters and ghost anchors always
/// pass through. All criteria are conjunctive. `origin` (usually the
/// user's position) adds a distance annotation to each summary.
pub fn apply<Tz: TimeZone>(
    items: &[NearbyItem],
    options: &FilterOptions,
    origin: Option<Coordinates>,
    now: DateTime<Tz>,
) -> FilterOutcome {
    // Window bounds are compared as instants, so normalize to UTC once.
    let window = options
        .time_window
        .bounds(&now)
        .map(|(start, end)| (start.with_timezone(&Utc), end.with_timezone(&Utc)));

    let mut display_items = Vec::with_capacity(items.len());
    let mut activity_list = Vec::new();

    for item in items {
        match item {
            NearbyItem::Activity(activity) => {
                if activity_passes(activity, options, &window) {
                    activity_list.push(summarize(activity, origin));
                    display_items.push(item.clone());
                }
            }
            // Clusters and ghost anchors are never filtered out.
            _ => display_items.push(item.clone()),
        }
    }

    FilterOutcome {
        display_items,
        activity_list,
    }
}

/// Conjunction of all per-activity predicates.
fn activity_passes(
    activity: &ActivityItem,
    options: &FilterOptions,
    window: &Option<(DateTime<Utc>, DateTime<Utc>)>,
) -> bool {
    if let Some((start, end)) = window {
        // An activity with no start time yet always passes the time filter.
        if let Some(at) = activity.start_at {
            if at < *start || at >= *end {
                return false;
            }
        }
    }

    if let Some(category) = &options.category {
        if activity.category != *category {
            return false;
        }
    }

    if let Some(gender) = options.gender_requirement {
        if activity.gender_requirement != gender {
            return false;
        }
    }

    // A creator with no history compares as 0, so any positive threshold
    // excludes them.
    if u32::from(activity.reliability_rate.unwrap_or(0)) < u32::from(options.min_reliability) {
        return false;
    }

    if let Some(status) = options.status {
        if activity.status != status {
            return false;
        }
    }

    if let Some(fee_type) = options.fee_type {
        if activity.fee_type != fee_type {
            return false;
        }
    }

    true
}

/// Project a passing activity into its list-panel shape.
fn summarize(activity: &ActivityItem, origin: Option<Coordinates>) -> ActivitySummary {
    let distance_m =
        origin.map(|from| Haversine.distance(from.point(), activity.coordinates.point()));

    ActivitySummary {
        id: activity.id.clone(),
        title: activity.title.clone(),
        category: activity.category.clone(),
        start_at: activity.start_at,
        coordinates: activity.coordinates,
        status: activity.status,
        fee_type: activity.fee_type,
        reliability_rate: activity.reliability_rate.unwrap_or(0),
        distance_m,
    }
}
