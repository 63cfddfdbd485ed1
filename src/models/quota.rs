// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Persisted daily-usage record.

use serde::{Deserialize, Serialize};

/// Daily usage counters, persisted as a single keyed record.
///
/// Both counters belong to the calendar day in `date` (`YYYY-MM-DD`);
/// a record whose `date` is not today is stale and must be rolled over
/// before any check or consume.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotaRecord {
    /// AI-assist calls used today.
    #[serde(default)]
    pub ai_assist_used: u32,
    /// Activity publishes used today.
    #[serde(default)]
    pub activity_publish_used: u32,
    /// Calendar day the counters belong to (`YYYY-MM-DD`).
    #[serde(default)]
    pub date: String,
}

impl QuotaRecord {
    /// A zeroed record stamped with the given day.
    pub fn fresh(date: &str) -> Self {
        Self {
            ai_assist_used: 0,
            activity_publish_used: 0,
            date: date.to_string(),
        }
    }
}
