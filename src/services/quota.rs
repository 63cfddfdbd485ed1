// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Daily usage quotas for AI-assist calls and activity publishing.
//!
//! Two independent counters share one persisted record. Rollover is lazy:
//! the first access after a calendar-day change zeroes both counters and
//! stamps the new day, strictly before the request is evaluated. Counters
//! never decrement and remaining allowance never goes negative.

use crate::models::quota::QuotaRecord;
use crate::time_utils::day_key;
use chrono::Local;
use dashmap::DashMap;
use std::sync::Arc;

/// Storage key for the persisted quota record.
pub const QUOTA_STORAGE_KEY: &str = "spotmeet_quota";

/// The two independently limited daily actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuotaKind {
    AiAssist,
    ActivityPublish,
}

/// Daily allowances per kind.
#[derive(Debug, Clone, Copy)]
pub struct QuotaLimits {
    pub ai_assist: u32,
    pub activity_publish: u32,
}

impl Default for QuotaLimits {
    fn default() -> Self {
        Self {
            ai_assist: crate::config::DEFAULT_AI_ASSIST_DAILY_LIMIT,
            activity_publish: crate::config::DEFAULT_ACTIVITY_PUBLISH_DAILY_LIMIT,
        }
    }
}

/// Persistence seam for the quota record.
///
/// One record, read and written whole. Implementations do not need to be
/// transactional: each manager operation performs its read-modify-write
/// within a single synchronous call.
pub trait QuotaStore: Send + Sync {
    fn load(&self) -> Result<Option<QuotaRecord>, QuotaStoreError>;
    fn save(&self, record: &QuotaRecord) -> Result<(), QuotaStoreError>;
}

/// Errors from the quota persistence layer.
#[derive(Debug, thiserror::Error)]
pub enum QuotaStoreError {
    #[error("Quota storage failure: {0}")]
    Storage(String),
}

/// In-memory store for tests and single-process hosts.
#[derive(Default, Clone)]
pub struct MemoryQuotaStore {
    records: Arc<DashMap<&'static str, QuotaRecord>>,
}

impl QuotaStore for MemoryQuotaStore {
    fn load(&self) -> Result<Option<QuotaRecord>, QuotaStoreError> {
        Ok(self
            .records
            .get(QUOTA_STORAGE_KEY)
            .map(|entry| entry.value().clone()))
    }

    fn save(&self, record: &QuotaRecord) -> Result<(), QuotaStoreError> {
        self.records.insert(QUOTA_STORAGE_KEY, record.clone());
        Ok(())
    }
}

/// The record in force for `today`: kept as-is when current, otherwise
/// replaced by a zeroed record stamped with `today`. Pure.
pub fn rolled(record: Option<QuotaRecord>, today: &str) -> QuotaRecord {
    match record {
        Some(record) if record.date == today => record,
        _ => QuotaRecord::fresh(today),
    }
}

/// Enforces the daily allowances against a [`QuotaStore`].
#[derive(Clone)]
pub struct QuotaManager {
    store: Arc<dyn QuotaStore>,
    limits: QuotaLimits,
}

impl QuotaManager {
    pub fn new(store: Arc<dyn QuotaStore>, limits: QuotaLimits) -> Self {
        Self { store, limits }
    }

    /// Whether one more call of `kind` is allowed today.
    pub fn check(&self, kind: QuotaKind) -> Result<bool, QuotaStoreError> {
        self.check_on(kind, &day_key(&Local::now()))
    }

    /// Record one use of `kind`. Returns `false` without incrementing when
    /// the allowance is already exhausted.
    pub fn consume(&self, kind: QuotaKind) -> Result<bool, QuotaStoreError> {
        self.consume_on(kind, &day_key(&Local::now()))
    }

    /// Uses of `kind` still available today. Clamped at 0.
    pub fn remaining(&self, kind: QuotaKind) -> Result<u32, QuotaStoreError> {
        self.remaining_on(kind, &day_key(&Local::now()))
    }

    /// `check` against an explicit day key.
    pub fn check_on(&self, kind: QuotaKind, today: &str) -> Result<bool, QuotaStoreError> {
        let record = self.ensure_current(today)?;
        Ok(used(&record, kind) < self.limit(kind))
    }

    /// `consume` against an explicit day key.
    pub fn consume_on(&self, kind: QuotaKind, today: &str) -> Result<bool, QuotaStoreError> {
        let mut record = self.ensure_current(today)?;
        if used(&record, kind) >= self.limit(kind) {
            tracing::debug!(?kind, "Quota already exhausted");
            return Ok(false);
        }

        match kind {
            QuotaKind::AiAssist => record.ai_assist_used += 1,
            QuotaKind::ActivityPublish => record.activity_publish_used += 1,
        }
        self.store.save(&record)?;
        Ok(true)
    }

    /// `remaining` against an explicit day key.
    pub fn remaining_on(&self, kind: QuotaKind, today: &str) -> Result<u32, QuotaStoreError> {
        let record = self.ensure_current(today)?;
        Ok(self.limit(kind).saturating_sub(used(&record, kind)))
    }

    fn limit(&self, kind: QuotaKind) -> u32 {
        match kind {
            QuotaKind::AiAssist => self.limits.ai_assist,
            QuotaKind::ActivityPublish => self.limits.activity_publish,
        }
    }

    /// Load the record, rolling a stale day over (and persisting the
    /// rollover) before the caller evaluates anything.
    fn ensure_current(&self, today: &str) -> Result<QuotaRecord, QuotaStoreError> {
        let loaded = self.store.load()?;
        let current = matches!(&loaded, Some(record) if record.date == today);
        let record = rolled(loaded, today);
        if !current {
            tracing::info!(date = today, "Quota counters rolled over to a new day");
            self.store.save(&record)?;
        }
        Ok(record)
    }
}

fn used(record: &QuotaRecord, kind: QuotaKind) -> u32 {
    match kind {
        QuotaKind::AiAssist => record.ai_assist_used,
        QuotaKind::ActivityPublish => record.activity_publish_used,
    }
}
