// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Marker descriptors handed to the map UI.

use crate::models::nearby::Coordinates;
use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Icon selection for a map marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub enum MarkerIcon {
    Cluster,
    Ghost,
    PinPlus,
    Boosted,
    Activity,
}

/// One renderable map marker.
///
/// Derived and ephemeral: rebuilt on every filter pass, never persisted.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct MarkerDescriptor {
    /// Id of the source nearby item.
    pub item_id: String,
    pub coordinates: Coordinates,
    pub icon: MarkerIcon,
    /// Size relative to a normal activity marker.
    pub scale: f32,
    /// Always-visible label (cluster count, ghost invitation, Pin+ title).
    pub callout: Option<String>,
    /// Render the callout in the elevated style anchored above the marker.
    pub elevated_callout: bool,
}
