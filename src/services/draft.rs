// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Draft lifecycle and publishing.
//!
//! Handles the draft workflow:
//! 1. Seed a draft from an AI prefill or a ghost-anchor tap
//! 2. Apply user edits and track expiry
//! 3. Validate publish preconditions (ordered, first failure only)
//! 4. Gate the publish/assist network calls behind the daily quotas

use crate::error::{CoreError, Result};
use crate::models::draft::{DraftContext, DraftData, DraftFields, DraftPrefill, DraftState};
use crate::services::api::{ActivityUpsert, ApiClient};
use crate::services::quota::{QuotaKind, QuotaManager};
use chrono::{DateTime, Utc};

/// Minimum participants for a publishable activity: the creator plus at
/// least one guest.
pub const MIN_PARTICIPANTS: u32 = 2;

/// Publish precondition failures, one field each.
///
/// The variant order is the check order; only the first failure is ever
/// surfaced so the user fixes one thing at a time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PublishError {
    #[error("Give the activity a title before publishing")]
    MissingTitle,

    #[error("Pick a start time before publishing")]
    MissingStartTime,

    #[error("The start time has already passed; pick a new one")]
    StartTimeInPast,

    #[error("Pick a location before publishing")]
    MissingLocationName,

    #[error("Add a short note on how to find the spot")]
    MissingLocationHint,

    #[error("An activity needs room for at least {MIN_PARTICIPANTS} participants")]
    TooFewParticipants,

    #[error("The end time must be after the start time")]
    EndBeforeStart,

    #[error("The cost must be a non-negative number")]
    InvalidCost,
}

/// Attempted transition that the current state refuses.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DraftStateError {
    #[error("Draft is already {0:?} and can no longer change")]
    Terminal(DraftState),
}

/// Check every publish precondition in its fixed order, returning the
/// first failure.
pub fn validate_for_publish(draft: &DraftData, now: DateTime<Utc>) -> std::result::Result<(), PublishError> {
    if draft.title.trim().is_empty() {
        return Err(PublishError::MissingTitle);
    }

    let start_at = draft.start_at.ok_or(PublishError::MissingStartTime)?;
    if start_at < now {
        return Err(PublishError::StartTimeInPast);
    }

    if draft.location_name.trim().is_empty() {
        return Err(PublishError::MissingLocationName);
    }

    // Hard product rule: no activity without a human-readable note on how
    // to find the spot.
    if draft.location_hint.trim().is_empty() {
        return Err(PublishError::MissingLocationHint);
    }

    if draft.max_participants < MIN_PARTICIPANTS {
        return Err(PublishError::TooFewParticipants);
    }

    if let Some(end_at) = draft.end_at {
        if end_at <= start_at {
            return Err(PublishError::EndBeforeStart);
        }
    }

    parse_cost(draft.cost.as_deref())?;

    Ok(())
}

/// Parse the free-text cost field. Empty input means no cost.
fn parse_cost(cost: Option<&str>) -> std::result::Result<Option<f64>, PublishError> {
    let raw = match cost {
        Some(raw) if !raw.trim().is_empty() => raw.trim(),
        _ => return Ok(None),
    };
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(Some(value)),
        _ => Err(PublishError::InvalidCost),
    }
}

/// Project the live draft into the context carried by a refinement
/// request. Pure; always call at the moment the refinement is triggered
/// so the context reflects the current draft, not a stale snapshot.
pub fn build_draft_context(draft: &DraftData) -> DraftContext {
    DraftContext {
        activity_id: draft.activity_id.clone(),
        current_draft: DraftFields {
            title: draft.title.clone(),
            category: draft.category.clone(),
            location_name: draft.location_name.clone(),
            location_hint: draft.location_hint.clone(),
            start_at: draft.start_at,
            max_participants: draft.max_participants,
        },
    }
}

/// State machine wrapped around a draft being put together.
#[derive(Debug, Clone)]
pub struct DraftLifecycle {
    draft: DraftData,
    state: DraftState,
}

impl DraftLifecycle {
    /// Start from an assist prefill or a ghost-anchor tap.
    pub fn prefilled(draft: DraftData) -> Self {
        Self {
            draft,
            state: DraftState::Prefilled,
        }
    }

    /// Resume editing an existing in-progress activity record.
    pub fn from_existing(draft: DraftData) -> Self {
        Self {
            draft,
            state: DraftState::Editing,
        }
    }

    pub fn state(&self) -> DraftState {
        self.state
    }

    pub fn draft(&self) -> &DraftData {
        &self.draft
    }

    /// Apply a user edit. Any edit to a live draft moves it to `Editing`;
    /// terminal drafts refuse.
    pub fn edit(
        &mut self,
        apply: impl FnOnce(&mut DraftData),
    ) -> std::result::Result<(), DraftStateError> {
        if self.state.is_terminal() {
            return Err(DraftStateError::Terminal(self.state));
        }
        apply(&mut self.draft);
        self.state = DraftState::Editing;
        Ok(())
    }

    /// Merge an assist suggestion into a live draft.
    pub fn apply_prefill(
        &mut self,
        prefill: &DraftPrefill,
    ) -> std::result::Result<(), DraftStateError> {
        self.edit(|draft| draft.apply_prefill(prefill))
    }

    /// Re-check expiry against the clock. A start time in the past forces
    /// `Expired` from any live state; an edit back to a future time
    /// returns the draft to `Editing` on the next call.
    pub fn refresh_expiry(&mut self, now: DateTime<Utc>) {
        if self.state.is_terminal() {
            return;
        }
        match self.draft.start_at {
            Some(start_at) if start_at < now => self.state = DraftState::Expired,
            _ => {
                if self.state == DraftState::Expired {
                    self.state = DraftState::Editing;
                }
            }
        }
    }

    /// Terminal transition after a successful create/update call.
    fn mark_published(&mut self, activity_id: String) {
        self.draft.activity_id = Some(activity_id);
        self.state = DraftState::Published;
    }

    /// Terminal transition for navigation away without saving.
    pub fn abandon(&mut self) {
        if !self.state.is_terminal() {
            self.state = DraftState::Abandoned;
        }
    }
}

/// Outcome of a quota-gated publish attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishOutcome {
    /// Created or updated on the backend.
    Published { activity_id: String },
    /// Today's publish allowance is used up; no network call was made.
    QuotaExhausted,
}

/// Outcome of a quota-gated assist request.
#[derive(Debug)]
pub enum AssistOutcome {
    Suggestion(DraftPrefill),
    /// Today's AI-assist allowance is used up; no network call was made.
    QuotaExhausted,
}

/// Orchestrates draft publishing and assist calls against the backend,
/// with the daily quotas enforced in front of every network call.
#[derive(Clone)]
pub struct DraftFlow {
    api: ApiClient,
    quota: QuotaManager,
}

impl DraftFlow {
    pub fn new(api: ApiClient, quota: QuotaManager) -> Self {
        Self { api, quota }
    }

    /// Validate and publish a draft.
    ///
    /// Validation failures and quota exhaustion both short-circuit before
    /// any network traffic; quota is consumed only after the backend call
    /// succeeds, so a transport failure never burns allowance.
    pub async fn publish(
        &self,
        lifecycle: &mut DraftLifecycle,
        now: DateTime<Utc>,
    ) -> Result<PublishOutcome> {
        validate_for_publish(lifecycle.draft(), now)?;

        if !self.quota.check(QuotaKind::ActivityPublish)? {
            tracing::info!("Publish blocked: daily allowance used up");
            return Ok(PublishOutcome::QuotaExhausted);
        }

        let request = upsert_request(lifecycle.draft())?;
        let activity_id = match lifecycle.draft().activity_id.clone() {
            Some(id) => self.api.update_activity(&id, &request).await?,
            None => self.api.create_activity(&request).await?,
        };

        self.quota.consume(QuotaKind::ActivityPublish)?;
        lifecycle.mark_published(activity_id.clone());
        tracing::info!(activity_id = %activity_id, "Draft published");

        Ok(PublishOutcome::Published { activity_id })
    }

    /// Parse a natural-language request into a fresh draft prefill.
    pub async fn request_prefill(&self, prompt: &str) -> Result<AssistOutcome> {
        if !self.quota.check(QuotaKind::AiAssist)? {
            tracing::info!("Assist parse blocked: daily allowance used up");
            return Ok(AssistOutcome::QuotaExhausted);
        }

        let prefill = self.api.assist_parse(prompt).await?;
        self.quota.consume(QuotaKind::AiAssist)?;
        Ok(AssistOutcome::Suggestion(prefill))
    }

    /// Ask the assist backend for a delta edit ("change the time") against
    /// the draft as it stands right now.
    pub async fn request_refinement(
        &self,
        lifecycle: &DraftLifecycle,
        prompt: &str,
    ) -> Result<AssistOutcome> {
        if !self.quota.check(QuotaKind::AiAssist)? {
            tracing::info!("Assist refine blocked: daily allowance used up");
            return Ok(AssistOutcome::QuotaExhausted);
        }

        // Projected at call time so it reflects the live draft.
        let context = build_draft_context(lifecycle.draft());
        let prefill = self.api.assist_refine(prompt, &context).await?;
        self.quota.consume(QuotaKind::AiAssist)?;
        Ok(AssistOutcome::Suggestion(prefill))
    }
}

/// Build the backend payload from a validated draft.
fn upsert_request(draft: &DraftData) -> Result<ActivityUpsert> {
    // Validation already established a start time; re-check rather than
    // unwrap so a mis-ordered caller gets the field error, not a panic.
    let start_at = draft
        .start_at
        .ok_or(CoreError::Validation(PublishError::MissingStartTime))?;
    let cost = parse_cost(draft.cost.as_deref()).map_err(CoreError::Validation)?;

    Ok(ActivityUpsert {
        title: draft.title.clone(),
        start_at,
        location: [draft.coordinates.lng, draft.coordinates.lat],
        location_name: draft.location_name.clone(),
        location_address: draft.location_address.clone(),
        location_hint: draft.location_hint.clone(),
        max_participants: draft.max_participants,
        category: draft.category.clone(),
        fee_type: draft.fee_type,
        status: crate::models::nearby::ActivityStatus::Recruiting,
        end_at: draft.end_at,
        description: draft.description.clone(),
        cost,
    })
}
