// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Nearby discovery pipeline.
//!
//! One refresh pass runs query -> filter -> render and hands the UI a
//! complete view-state snapshot. Rapid re-triggers are not blocked;
//! instead each pass takes a generation number and a response that lands
//! after a newer pass started is discarded (last request wins).

use crate::error::Result;
use crate::models::filter::FilterOptions;
use crate::models::marker::MarkerDescriptor;
use crate::models::nearby::{ActivitySummary, Coordinates};
use crate::services::api::{ApiClient, NearbyQuery};
use crate::services::{filter, marker};
use chrono::{DateTime, TimeZone};
use std::sync::atomic::{AtomicU64, Ordering};

/// Everything the map UI needs after one refresh pass.
#[derive(Debug, Clone)]
pub struct MapViewState {
    pub markers: Vec<MarkerDescriptor>,
    pub activity_list: Vec<ActivitySummary>,
    /// Total item count reported by the backend, before filtering.
    pub total: u32,
    /// Set when the nearby query failed and the map fell back to an empty
    /// list; the UI shows a lightweight "failed to load" notice.
    pub load_failed: bool,
}

/// Orchestrates nearby queries into renderable view state.
pub struct NearbyPipeline {
    api: ApiClient,
    generation: AtomicU64,
}

impl NearbyPipeline {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            generation: AtomicU64::new(0),
        }
    }

    /// Abandon whatever refresh is in flight (navigation away). The next
    /// refresh starts a new generation; stale responses are dropped.
    pub fn invalidate(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    /// Run one query -> filter -> render pass around `center`.
    ///
    /// Returns `None` when the response went stale mid-flight (a newer
    /// refresh superseded this one); the caller must not display it.
    /// A failed query degrades to an empty view with `load_failed` set
    /// rather than an error: the map view always survives.
    pub async fn refresh<Tz: TimeZone>(
        &self,
        center: Coordinates,
        zoom_level: u8,
        options: &FilterOptions,
        now: DateTime<Tz>,
    ) -> Result<Option<MapViewState>> {
        options.validate()?;

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let query = NearbyQuery {
            lat: center.lat,
            lng: center.lng,
            radius: options.radius_m,
            zoom_level,
            include_ghosts: true,
        };

        let (items, total, load_failed) = match self.api.nearby(&query).await {
            Ok(response) => {
                tracing::debug!(
                    count = response.items.len(),
                    total = response.total,
                    "Loaded nearby items"
                );
                (response.items, response.total, false)
            }
            Err(err) => {
                // The map must survive a failed load; show nothing rather
                // than crash the view.
                tracing::warn!(error = %err, "Nearby query failed, falling back to empty list");
                (Vec::new(), 0, true)
            }
        };

        if self.generation.load(Ordering::SeqCst) != generation {
            tracing::debug!(generation, "Discarding stale nearby response");
            return Ok(None);
        }

        let outcome = filter::apply(&items, options, Some(center), now);
        let markers = marker::render(&outcome.display_items);

        Ok(Some(MapViewState {
            markers,
            activity_list: outcome.activity_list,
            total,
            load_failed,
        }))
    }
}
