// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use chrono::{DateTime, Utc};
use spotmeet_core::models::{
    ActivityItem, ActivityStatus, ClusterItem, Coordinates, FeeType, GenderRequirement, GhostItem,
    NearbyItem,
};

/// Parse a fixed RFC3339 timestamp.
#[allow(dead_code)]
pub fn at(s: &str) -> DateTime<Utc> {
    s.parse().expect("valid RFC3339 timestamp")
}

#[allow(dead_code)]
pub fn coords() -> Coordinates {
    Coordinates {
        lat: 31.2304,
        lng: 121.4737,
    }
}

/// A plain recruiting activity; tweak fields per test.
#[allow(dead_code)]
pub fn make_activity(id: &str, start_at: Option<&str>, reliability: Option<u8>) -> ActivityItem {
    ActivityItem {
        id: id.to_string(),
        coordinates: coords(),
        title: format!("Activity {}", id),
        category: "sports".to_string(),
        start_at: start_at.map(at),
        fee_type: FeeType::Free,
        status: ActivityStatus::Recruiting,
        gender_requirement: GenderRequirement::Any,
        reliability_rate: reliability,
        is_boosted: false,
        is_pin_plus: false,
        location_hint: None,
    }
}

#[allow(dead_code)]
pub fn activity_item(id: &str, start_at: Option<&str>, reliability: Option<u8>) -> NearbyItem {
    NearbyItem::Activity(make_activity(id, start_at, reliability))
}

#[allow(dead_code)]
pub fn cluster_item(id: &str, count: u32) -> NearbyItem {
    NearbyItem::Cluster(ClusterItem {
        id: id.to_string(),
        coordinates: coords(),
        count,
    })
}

#[allow(dead_code)]
pub fn ghost_item(id: &str, invitation: Option<&str>) -> NearbyItem {
    NearbyItem::Ghost(GhostItem {
        id: id.to_string(),
        coordinates: coords(),
        category_hint: None,
        invitation: invitation.map(String::from),
    })
}
