// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Marker tier priority and descriptor contents.

use spotmeet_core::models::{MarkerIcon, NearbyItem};
use spotmeet_core::services::marker::{self, DEFAULT_GHOST_INVITATION};

mod common;
use common::{activity_item, cluster_item, ghost_item, make_activity};

#[test]
fn test_one_descriptor_per_item_in_order() {
    let items = vec![
        cluster_item("c1", 5),
        activity_item("a1", None, None),
        ghost_item("g1", Some("Start something here")),
    ];

    let markers = marker::render(&items);

    let ids: Vec<&str> = markers.iter().map(|m| m.item_id.as_str()).collect();
    assert_eq!(ids, vec!["c1", "a1", "g1"]);
}

#[test]
fn test_pin_plus_wins_over_boost() {
    // Both promotion flags set: Pin+ is the higher tier and must win
    let mut activity = make_activity("a1", None, None);
    activity.is_boosted = true;
    activity.is_pin_plus = true;

    let markers = marker::render(&[NearbyItem::Activity(activity)]);

    assert_eq!(markers[0].icon, MarkerIcon::PinPlus);
    assert!(markers[0].elevated_callout);
    assert!(markers[0].callout.is_some());
}

#[test]
fn test_boosted_has_larger_icon_but_no_callout() {
    let mut activity = make_activity("a1", None, None);
    activity.is_boosted = true;

    let markers = marker::render(&[NearbyItem::Activity(activity)]);

    assert_eq!(markers[0].icon, MarkerIcon::Boosted);
    assert!(markers[0].scale > 1.0);
    assert!(markers[0].callout.is_none());
    assert!(!markers[0].elevated_callout);
}

#[test]
fn test_pin_plus_is_the_largest_variant() {
    let mut pin_plus = make_activity("p", None, None);
    pin_plus.is_pin_plus = true;
    let mut boosted = make_activity("b", None, None);
    boosted.is_boosted = true;

    let markers = marker::render(&[
        NearbyItem::Activity(pin_plus),
        NearbyItem::Activity(boosted),
        activity_item("n", None, None),
    ]);

    assert!(markers[0].scale > markers[1].scale);
    assert!(markers[1].scale > markers[2].scale);
    assert_eq!(markers[2].scale, 1.0);
}

#[test]
fn test_cluster_callout_is_the_count() {
    let markers = marker::render(&[cluster_item("c1", 12)]);
    assert_eq!(markers[0].icon, MarkerIcon::Cluster);
    assert_eq!(markers[0].callout.as_deref(), Some("12"));
    assert!(!markers[0].elevated_callout);
}

#[test]
fn test_ghost_uses_backend_invitation_when_present() {
    let markers = marker::render(&[ghost_item("g1", Some("This corner wants a picnic"))]);
    assert_eq!(markers[0].icon, MarkerIcon::Ghost);
    assert_eq!(markers[0].callout.as_deref(), Some("This corner wants a picnic"));
}

#[test]
fn test_ghost_falls_back_to_default_invitation() {
    let markers = marker::render(&[ghost_item("g1", None)]);
    assert_eq!(markers[0].callout.as_deref(), Some(DEFAULT_GHOST_INVITATION));
}
