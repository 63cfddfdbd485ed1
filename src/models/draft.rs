// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Activity draft models: the in-progress record, its lifecycle states,
//! and the context projection sent with conversational refinements.

use crate::models::nearby::{Coordinates, FeeType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An activity being put together, not yet confirmed on the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftData {
    /// Backend id once the draft corresponds to an existing activity;
    /// `None` for drafts that have never been published.
    #[serde(default)]
    pub activity_id: Option<String>,
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub start_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_at: Option<DateTime<Utc>>,
    pub coordinates: Coordinates,
    pub location_name: String,
    #[serde(default)]
    pub location_address: String,
    /// Human-readable note on how to find the spot. Required to publish.
    #[serde(default)]
    pub location_hint: String,
    pub max_participants: u32,
    #[serde(default)]
    pub description: Option<String>,
    /// Fee amount as entered by the user; validated numeric on publish.
    #[serde(default)]
    pub cost: Option<String>,
    #[serde(default = "default_fee_type")]
    pub fee_type: FeeType,
}

fn default_fee_type() -> FeeType {
    FeeType::Free
}

impl DraftData {
    /// Merge an assist suggestion into the draft. Only fields the backend
    /// actually suggested are overwritten.
    pub fn apply_prefill(&mut self, prefill: &DraftPrefill) {
        if let Some(title) = &prefill.title {
            self.title = title.clone();
        }
        if let Some(category) = &prefill.category {
            self.category = category.clone();
        }
        if prefill.start_at.is_some() {
            self.start_at = prefill.start_at;
        }
        if let Some(max) = prefill.max_participants {
            self.max_participants = max;
        }
        if let Some(name) = &prefill.location_name {
            self.location_name = name.clone();
        }
        if let Some(hint) = &prefill.location_hint {
            self.location_hint = hint.clone();
        }
    }
}

/// Lifecycle of a draft from prefill to publish or abandonment.
///
/// `Published` and `Abandoned` are terminal. `Expired` is re-entered from
/// any live state whenever the start time slips into the past.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DraftState {
    Prefilled,
    Editing,
    Expired,
    Published,
    Abandoned,
}

impl DraftState {
    /// Terminal states accept no further transitions.
    pub fn is_terminal(&self) -> bool {
        matches!(self, DraftState::Published | DraftState::Abandoned)
    }
}

/// Fields suggested by the assist backend to seed or patch a draft.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DraftPrefill {
    pub title: Option<String>,
    pub category: Option<String>,
    pub start_at: Option<DateTime<Utc>>,
    pub max_participants: Option<u32>,
    pub location_name: Option<String>,
    pub location_hint: Option<String>,
}

/// The draft fields a refinement request carries.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftFields {
    pub title: String,
    /// Activity category ("type" on the wire, matching the backend).
    #[serde(rename = "type")]
    pub category: String,
    pub location_name: String,
    pub location_hint: String,
    pub start_at: Option<DateTime<Utc>>,
    pub max_participants: u32,
}

/// Context attached to a short natural-language refinement request so the
/// assist backend can apply a delta without the full draft being re-sent.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftContext {
    pub activity_id: Option<String>,
    pub current_draft: DraftFields,
}
