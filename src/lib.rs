// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! SpotMeet core: client-side nearby-activity discovery pipeline
//!
//! This crate provides the decision logic behind the SpotMeet map view:
//! querying geo-tagged items, filtering them, resolving marker visuals,
//! enforcing the daily usage quotas, and managing activity drafts. The
//! rendering layer and the host map/location runtime stay outside, bound
//! through the narrow interfaces exposed here.

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod time_utils;

use config::Config;
use services::{ApiClient, DraftFlow, LocationService, NearbyPipeline, QuotaLimits, QuotaManager};
use std::sync::Arc;
use std::time::Duration;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub nearby: NearbyPipeline,
    pub quota: QuotaManager,
    pub draft_flow: DraftFlow,
    pub location: Arc<dyn LocationService>,
}

impl AppState {
    /// Wire the core services from configuration plus the host-provided
    /// quota storage and location runtime.
    pub fn new(
        config: Config,
        quota_store: Arc<dyn services::QuotaStore>,
        location: Arc<dyn LocationService>,
    ) -> Self {
        let api = ApiClient::new(
            config.api_base_url.clone(),
            Duration::from_secs(config.request_timeout_secs),
        );
        let quota = QuotaManager::new(
            quota_store,
            QuotaLimits {
                ai_assist: config.ai_assist_daily_limit,
                activity_publish: config.activity_publish_daily_limit,
            },
        );

        Self {
            nearby: NearbyPipeline::new(api.clone()),
            draft_flow: DraftFlow::new(api, quota.clone()),
            quota,
            location,
            config,
        }
    }
}
