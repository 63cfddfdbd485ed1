// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! SpotMeet core diagnostic runner
//!
//! Runs one full fetch -> filter -> render pass against the configured
//! backend and logs a summary. Useful for smoke-testing a backend
//! deployment without the app shell.

use spotmeet_core::{
    config::Config,
    models::{Coordinates, FilterOptions},
    services::{MemoryQuotaStore, QuotaKind, StaticLocationService},
    AppState,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    // Load configuration from environment
    let config = Config::from_env().expect("Failed to load configuration");
    tracing::info!(api = %config.api_base_url, "Starting SpotMeet core diagnostic pass");

    let center = Coordinates {
        lat: env_f64("SPOTMEET_DIAG_LAT", 31.2304),
        lng: env_f64("SPOTMEET_DIAG_LNG", 121.4737),
    };

    let location = Arc::new(StaticLocationService {
        coordinates: center,
    });
    let state = AppState::new(
        config.clone(),
        Arc::new(MemoryQuotaStore::default()),
        location,
    );

    let origin = state.location.current_coordinates().await?;
    let options = FilterOptions {
        radius_m: config.default_radius_m,
        ..FilterOptions::default()
    };

    let view = state
        .nearby
        .refresh(origin, 14, &options, chrono::Local::now())
        .await?;

    match view {
        Some(view) if view.load_failed => {
            tracing::warn!("Nearby query failed; backend unreachable or erroring");
        }
        Some(view) => {
            tracing::info!(
                markers = view.markers.len(),
                activities = view.activity_list.len(),
                total = view.total,
                "Pipeline pass complete"
            );
        }
        None => {
            tracing::warn!("Response went stale mid-flight (unexpected for a single pass)");
        }
    }

    tracing::info!(
        ai_assist = state.quota.remaining(QuotaKind::AiAssist)?,
        publish = state.quota.remaining(QuotaKind::ActivityPublish)?,
        "Remaining daily quota"
    );

    Ok(())
}

fn env_f64(key: &str, default: f64) -> f64 {
    std::env::var(key)
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(default)
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("spotmeet_core=debug".parse().expect("valid directive"))
                .add_directive("info".parse().expect("valid directive")),
        )
        .with(format)
        .init();
}
