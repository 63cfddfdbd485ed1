// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod api;
pub mod draft;
pub mod filter;
pub mod location;
pub mod marker;
pub mod nearby;
pub mod quota;

pub use api::{ApiClient, ApiError, NearbyQuery, NearbyResponse};
pub use draft::{
    AssistOutcome, DraftFlow, DraftLifecycle, DraftStateError, PublishError, PublishOutcome,
};
pub use filter::FilterOutcome;
pub use location::{LocationError, LocationService, PickedLocation, StaticLocationService};
pub use nearby::{MapViewState, NearbyPipeline};
pub use quota::{MemoryQuotaStore, QuotaKind, QuotaLimits, QuotaManager, QuotaStore};
