// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Crate-level error type tying the per-concern errors together.

use crate::models::filter::FilterOptionsError;
use crate::services::api::ApiError;
use crate::services::draft::PublishError;
use crate::services::location::LocationError;
use crate::services::quota::QuotaStoreError;

/// Top-level error for pipeline operations.
///
/// Quota exhaustion is deliberately NOT a variant here: it is a business
/// outcome, surfaced through the flow outcome enums instead.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Backend API error: {0}")]
    Api(#[from] ApiError),

    #[error(transparent)]
    Validation(#[from] PublishError),

    #[error(transparent)]
    Filter(#[from] FilterOptionsError),

    #[error(transparent)]
    Quota(#[from] QuotaStoreError),

    #[error(transparent)]
    Location(#[from] LocationError),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, CoreError>;
