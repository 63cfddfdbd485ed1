// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Draft lifecycle transitions, publish validation order, context building.

use chrono::{DateTime, Utc};
use spotmeet_core::models::{Coordinates, DraftData, DraftPrefill, DraftState, FeeType};
use spotmeet_core::services::draft::{
    build_draft_context, validate_for_publish, DraftLifecycle, PublishError,
};

mod common;
use common::at;

fn now() -> DateTime<Utc> {
    at("2026-03-10T12:00:00Z")
}

fn valid_draft() -> DraftData {
    DraftData {
        activity_id: None,
        title: "Riverside frisbee".to_string(),
        category: "sports".to_string(),
        start_at: Some(at("2026-03-12T10:00:00Z")),
        end_at: None,
        coordinates: Coordinates {
            lat: 31.2304,
            lng: 121.4737,
        },
        location_name: "Riverside Park".to_string(),
        location_address: "North Gate".to_string(),
        location_hint: "Lawn behind the boathouse".to_string(),
        max_participants: 8,
        description: None,
        cost: None,
        fee_type: FeeType::Free,
    }
}

// ─── Publish validation ──────────────────────────────────────

#[test]
fn test_validation_order_is_fixed() {
    // Break every rule at once; failures must surface one at a time in
    // the fixed order as each earlier field gets fixed.
    let mut draft = valid_draft();
    draft.title = String::new();
    draft.start_at = None;
    draft.location_name = String::new();
    draft.location_hint = String::new();
    draft.max_participants = 1;
    draft.cost = Some("free-ish".to_string());

    assert_eq!(
        validate_for_publish(&draft, now()),
        Err(PublishError::MissingTitle)
    );

    draft.title = "Frisbee".to_string();
    assert_eq!(
        validate_for_publish(&draft, now()),
        Err(PublishError::MissingStartTime)
    );

    draft.start_at = Some(at("2026-03-01T10:00:00Z"));
    assert_eq!(
        validate_for_publish(&draft, now()),
        Err(PublishError::StartTimeInPast)
    );

    draft.start_at = Some(at("2026-03-12T10:00:00Z"));
    assert_eq!(
        validate_for_publish(&draft, now()),
        Err(PublishError::MissingLocationName)
    );

    draft.location_name = "Riverside Park".to_string();
    assert_eq!(
        validate_for_publish(&draft, now()),
        Err(PublishError::MissingLocationHint)
    );

    draft.location_hint = "By the boathouse".to_string();
    assert_eq!(
        validate_for_publish(&draft, now()),
        Err(PublishError::TooFewParticipants)
    );

    draft.max_participants = 4;
    assert_eq!(
        validate_for_publish(&draft, now()),
        Err(PublishError::InvalidCost)
    );

    draft.cost = Some("15".to_string());
    assert_eq!(validate_for_publish(&draft, now()), Ok(()));
}

#[test]
fn test_empty_location_hint_gets_its_own_message() {
    let mut draft = valid_draft();
    draft.location_hint = String::new();

    let err = validate_for_publish(&draft, now()).expect_err("must fail");

    assert_eq!(err, PublishError::MissingLocationHint);
    // The message names the missing field, not a generic failure
    assert!(err.to_string().contains("note"), "got: {}", err);
}

#[test]
fn test_whitespace_only_hint_is_missing() {
    let mut draft = valid_draft();
    draft.location_hint = "   ".to_string();
    assert_eq!(
        validate_for_publish(&draft, now()),
        Err(PublishError::MissingLocationHint)
    );
}

#[test]
fn test_start_exactly_now_is_not_in_the_past() {
    let mut draft = valid_draft();
    draft.start_at = Some(now());
    assert_eq!(validate_for_publish(&draft, now()), Ok(()));
}

// ─── Lifecycle ───────────────────────────────────────────────

#[test]
fn test_prefill_edit_publish_path() {
    let mut lifecycle = DraftLifecycle::prefilled(valid_draft());
    assert_eq!(lifecycle.state(), DraftState::Prefilled);

    lifecycle
        .edit(|draft| draft.title = "Riverside frisbee, round 2".to_string())
        .expect("live draft");
    assert_eq!(lifecycle.state(), DraftState::Editing);
}

#[test]
fn test_past_start_time_expires_from_any_live_state() {
    let mut draft = valid_draft();
    draft.start_at = Some(at("2026-03-10T09:00:00Z"));

    // Straight from Prefilled
    let mut lifecycle = DraftLifecycle::prefilled(draft.clone());
    lifecycle.refresh_expiry(now());
    assert_eq!(lifecycle.state(), DraftState::Expired);

    // And from Editing
    let mut lifecycle = DraftLifecycle::from_existing(draft);
    lifecycle.refresh_expiry(now());
    assert_eq!(lifecycle.state(), DraftState::Expired);
}

#[test]
fn test_expired_draft_cannot_publish_until_time_fixed() {
    let mut draft = valid_draft();
    draft.start_at = Some(at("2026-03-10T09:00:00Z"));
    assert_eq!(
        validate_for_publish(&draft, now()),
        Err(PublishError::StartTimeInPast)
    );
}

#[test]
fn test_abandon_is_terminal() {
    let mut lifecycle = DraftLifecycle::prefilled(valid_draft());
    lifecycle.abandon();
    assert_eq!(lifecycle.state(), DraftState::Abandoned);

    // Expiry refresh no longer moves an abandoned draft
    lifecycle.refresh_expiry(now());
    assert_eq!(lifecycle.state(), DraftState::Abandoned);
}

#[test]
fn test_prefill_merge_only_touches_suggested_fields() {
    let mut lifecycle = DraftLifecycle::prefilled(valid_draft());
    lifecycle
        .apply_prefill(&DraftPrefill {
            title: Some("Sunset frisbee".to_string()),
            max_participants: Some(10),
            ..DraftPrefill::default()
        })
        .expect("live draft");

    let draft = lifecycle.draft();
    assert_eq!(draft.title, "Sunset frisbee");
    assert_eq!(draft.max_participants, 10);
    // Untouched by the prefill
    assert_eq!(draft.location_hint, "Lawn behind the boathouse");
}

// ─── Refinement context ──────────────────────────────────────

#[test]
fn test_context_is_a_projection_of_the_live_draft() {
    let mut lifecycle = DraftLifecycle::from_existing(DraftData {
        activity_id: Some("act-42".to_string()),
        ..valid_draft()
    });

    lifecycle
        .edit(|draft| draft.start_at = Some(at("2026-03-13T18:00:00Z")))
        .expect("live draft");

    let context = build_draft_context(lifecycle.draft());

    assert_eq!(context.activity_id.as_deref(), Some("act-42"));
    assert_eq!(context.current_draft.start_at, Some(at("2026-03-13T18:00:00Z")));
    assert_eq!(context.current_draft.title, "Riverside frisbee");
    assert_eq!(context.current_draft.max_participants, 8);
}

#[test]
fn test_context_serializes_category_as_type() {
    let context = build_draft_context(&valid_draft());
    let json = serde_json::to_value(&context).expect("serializable");

    assert_eq!(json["currentDraft"]["type"], "sports");
    assert_eq!(json["currentDraft"]["locationHint"], "Lawn behind the boathouse");
}
