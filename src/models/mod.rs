// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod draft;
pub mod filter;
pub mod marker;
pub mod nearby;
pub mod quota;

pub use draft::{DraftContext, DraftData, DraftFields, DraftPrefill, DraftState};
pub use filter::{FilterOptions, FilterOptionsError, TimeWindow};
pub use marker::{MarkerDescriptor, MarkerIcon};
pub use nearby::{
    ActivityItem, ActivityStatus, ActivitySummary, ClusterItem, Coordinates, FeeType,
    GenderRequirement, GhostItem, NearbyItem,
};
pub use quota::QuotaRecord;
