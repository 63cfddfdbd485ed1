// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Nearby item models returned by the backend geo query.

use chrono::{DateTime, Utc};
use geo::Point;
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Geographic point (WGS84).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    /// Convert to a `geo` point (x = lng, y = lat).
    pub fn point(&self) -> Point<f64> {
        Point::new(self.lng, self.lat)
    }
}

/// Fee arrangement for an activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub enum FeeType {
    Free,
    SplitEvenly,
    HostTreats,
}

/// Lifecycle status of a published activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub enum ActivityStatus {
    Recruiting,
    Full,
    Ongoing,
    Finished,
    Cancelled,
}

/// Who may join an activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub enum GenderRequirement {
    Any,
    MaleOnly,
    FemaleOnly,
}

/// A single item returned by the nearby query, discriminated by `type`.
///
/// Exactly one of the three shapes per item: `count` only exists on
/// clusters, promotion flags only on activities.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum NearbyItem {
    Activity(ActivityItem),
    Cluster(ClusterItem),
    Ghost(GhostItem),
}

impl NearbyItem {
    pub fn id(&self) -> &str {
        match self {
            NearbyItem::Activity(a) => &a.id,
            NearbyItem::Cluster(c) => &c.id,
            NearbyItem::Ghost(g) => &g.id,
        }
    }

    pub fn coordinates(&self) -> Coordinates {
        match self {
            NearbyItem::Activity(a) => a.coordinates,
            NearbyItem::Cluster(c) => c.coordinates,
            NearbyItem::Ghost(g) => g.coordinates,
        }
    }
}

/// A concrete activity pinned on the map.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityItem {
    pub id: String,
    pub coordinates: Coordinates,
    pub title: String,
    pub category: String,
    /// Scheduled start; absent while the creator is still deciding.
    #[serde(default)]
    pub start_at: Option<DateTime<Utc>>,
    pub fee_type: FeeType,
    pub status: ActivityStatus,
    pub gender_requirement: GenderRequirement,
    /// Creator reliability 0-100; absent for creators with no history yet.
    #[serde(default)]
    pub reliability_rate: Option<u8>,
    /// Boost promotion tier (larger marker, no permanent callout).
    #[serde(default)]
    pub is_boosted: bool,
    /// Pin+ promotion tier (largest marker, elevated permanent callout).
    #[serde(default)]
    pub is_pin_plus: bool,
    /// Human-readable hint for finding the exact spot.
    #[serde(default)]
    pub location_hint: Option<String>,
}

/// Several activities collapsed into one marker at low zoom.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterItem {
    pub id: String,
    pub coordinates: Coordinates,
    /// Number of underlying activities.
    pub count: u32,
}

/// A synthetic anchor at a spot with no activity yet, inviting creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GhostItem {
    pub id: String,
    pub coordinates: Coordinates,
    /// Suggested category for an activity created here.
    #[serde(default)]
    pub category_hint: Option<String>,
    /// Display text inviting the user to create an activity.
    #[serde(default)]
    pub invitation: Option<String>,
}

/// Display-friendly projection of an activity that passed the filters.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct ActivitySummary {
    pub id: String,
    pub title: String,
    pub category: String,
    #[cfg_attr(feature = "binding-generation", ts(type = "string | null"))]
    pub start_at: Option<DateTime<Utc>>,
    pub coordinates: Coordinates,
    pub status: ActivityStatus,
    pub fee_type: FeeType,
    /// Creator reliability; a creator with no history reads as 0.
    pub reliability_rate: u8,
    /// Straight-line distance from the query origin, in meters.
    pub distance_m: Option<f64>,
}
