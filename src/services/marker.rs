// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Marker tier resolution and descriptor building.
//!
//! The visual priority among competing presentation states is data, not
//! control flow: `TIER_PRIORITY` is scanned in order and the first
//! matching tier wins. Re-ranking tiers is an edit to that table.

use crate::models::marker::{MarkerDescriptor, MarkerIcon};
use crate::models::nearby::NearbyItem;

/// Visual tiers a marker can render at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerTier {
    Cluster,
    Ghost,
    PinPlus,
    Boosted,
    Normal,
}

/// Hard-contract priority order. Pin+ precedes Boosted: an activity
/// carrying both promotion flags renders at the Pin+ tier.
pub const TIER_PRIORITY: [MarkerTier; 5] = [
    MarkerTier::Cluster,
    MarkerTier::Ghost,
    MarkerTier::PinPlus,
    MarkerTier::Boosted,
    MarkerTier::Normal,
];

/// Invitation shown on ghost anchors when the backend sends none.
pub const DEFAULT_GHOST_INVITATION: &str = "This spot is waiting for an activity";

const CLUSTER_SCALE: f32 = 1.3;
const GHOST_SCALE: f32 = 0.9;
const PIN_PLUS_SCALE: f32 = 1.5;
const BOOSTED_SCALE: f32 = 1.2;
const NORMAL_SCALE: f32 = 1.0;

impl MarkerTier {
    /// Whether this tier applies to the given item.
    fn matches(&self, item: &NearbyItem) -> bool {
        match (self, item) {
            (MarkerTier::Cluster, NearbyItem::Cluster(_)) => true,
            (MarkerTier::Ghost, NearbyItem::Ghost(_)) => true,
            (MarkerTier::PinPlus, NearbyItem::Activity(a)) => a.is_pin_plus,
            (MarkerTier::Boosted, NearbyItem::Activity(a)) => a.is_boosted,
            (MarkerTier::Normal, NearbyItem::Activity(_)) => true,
            _ => false,
        }
    }
}

/// Resolve the visual tier for one item.
pub fn resolve_tier(item: &NearbyItem) -> MarkerTier {
    TIER_PRIORITY
        .iter()
        .copied()
        .find(|tier| tier.matches(item))
        .unwrap_or(MarkerTier::Normal)
}

/// Build the marker descriptor for one item.
pub fn descriptor(item: &NearbyItem) -> MarkerDescriptor {
    let base = MarkerDescriptor {
        item_id: item.id().to_string(),
        coordinates: item.coordinates(),
        icon: MarkerIcon::Activity,
        scale: NORMAL_SCALE,
        callout: None,
        elevated_callout: false,
    };

    match (resolve_tier(item), item) {
        (MarkerTier::Cluster, NearbyItem::Cluster(cluster)) => MarkerDescriptor {
            icon: MarkerIcon::Cluster,
            scale: CLUSTER_SCALE,
            callout: Some(cluster.count.to_string()),
            ..base
        },
        (MarkerTier::Ghost, NearbyItem::Ghost(ghost)) => MarkerDescriptor {
            icon: MarkerIcon::Ghost,
            scale: GHOST_SCALE,
            callout: Some(
                ghost
                    .invitation
                    .clone()
                    .unwrap_or_else(|| DEFAULT_GHOST_INVITATION.to_string()),
            ),
            ..base
        },
        (MarkerTier::PinPlus, NearbyItem::Activity(activity)) => MarkerDescriptor {
            icon: MarkerIcon::PinPlus,
            scale: PIN_PLUS_SCALE,
            callout: Some(activity.title.clone()),
            elevated_callout: true,
            ..base
        },
        (MarkerTier::Boosted, NearbyItem::Activity(_)) => MarkerDescriptor {
            icon: MarkerIcon::Boosted,
            scale: BOOSTED_SCALE,
            ..base
        },
        _ => base,
    }
}

/// Map each item to its marker descriptor, order-preserving.
pub fn render(items: &[NearbyItem]) -> Vec<MarkerDescriptor> {
    items.iter().map(descriptor).collect()
}
