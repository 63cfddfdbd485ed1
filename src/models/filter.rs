// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Filter criteria applied to the nearby item list.

use crate::models::nearby::{ActivityStatus, FeeType, GenderRequirement};
use crate::time_utils::day_start;
use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};

/// Default search radius when the user has not adjusted it (meters).
pub const DEFAULT_RADIUS_M: u32 = 5_000;

/// Time window for the activity start-time filter.
///
/// All windows are anchored at local midnight and half-open: inclusive at
/// the start, exclusive at the end.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TimeWindow {
    #[default]
    All,
    Today,
    Tomorrow,
    Week,
}

impl TimeWindow {
    /// Concrete `[start, end)` bounds for this window, or `None` for `All`.
    pub fn bounds<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> Option<(DateTime<Tz>, DateTime<Tz>)> {
        match self {
            TimeWindow::All => None,
            TimeWindow::Today => Some((day_start(now, 0), day_start(now, 1))),
            TimeWindow::Tomorrow => Some((day_start(now, 1), day_start(now, 2))),
            TimeWindow::Week => Some((day_start(now, 0), day_start(now, 7))),
        }
    }
}

/// Criteria for one filter pass over the nearby items.
///
/// `None` on an optional criterion means "all". The default is
/// all-permissive apart from the search radius.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterOptions {
    pub time_window: TimeWindow,
    pub category: Option<String>,
    pub gender_requirement: Option<GenderRequirement>,
    /// Minimum creator reliability (0-100). 0 passes everyone.
    pub min_reliability: u8,
    /// Search radius sent to the backend (meters).
    pub radius_m: u32,
    pub status: Option<ActivityStatus>,
    pub fee_type: Option<FeeType>,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            time_window: TimeWindow::All,
            category: None,
            gender_requirement: None,
            min_reliability: 0,
            radius_m: DEFAULT_RADIUS_M,
            status: None,
            fee_type: None,
        }
    }
}

impl FilterOptions {
    /// Reject criteria that cannot come from the UI controls but could
    /// arrive through a deep link or stale persisted state.
    pub fn validate(&self) -> Result<(), FilterOptionsError> {
        if self.min_reliability > 100 {
            return Err(FilterOptionsError::ReliabilityOutOfRange(
                self.min_reliability,
            ));
        }
        Ok(())
    }
}

/// Invalid filter criteria.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum FilterOptionsError {
    #[error("Reliability threshold must be between 0 and 100, got {0}")]
    ReliabilityOutOfRange(u8),
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn at(s: &str) -> DateTime<Utc> {
        s.parse().expect("valid RFC3339 timestamp")
    }

    #[test]
    fn test_bounds_today() {
        let now = at("2026-03-10T15:30:00Z");
        let (start, end) = TimeWindow::Today.bounds(&now).expect("bounded window");
        assert_eq!(start, at("2026-03-10T00:00:00Z"));
        assert_eq!(end, at("2026-03-11T00:00:00Z"));
    }

    #[test]
    fn test_bounds_tomorrow_is_next_calendar_day() {
        let now = at("2026-03-10T15:30:00Z");
        let (start, end) = TimeWindow::Tomorrow.bounds(&now).expect("bounded window");
        assert_eq!(start, at("2026-03-11T00:00:00Z"));
        assert_eq!(end, at("2026-03-12T00:00:00Z"));
    }

    #[test]
    fn test_bounds_week_spans_seven_days() {
        let now = at("2026-03-10T15:30:00Z");
        let (start, end) = TimeWindow::Week.bounds(&now).expect("bounded window");
        assert_eq!(start, at("2026-03-10T00:00:00Z"));
        assert_eq!(end, at("2026-03-17T00:00:00Z"));
    }

    #[test]
    fn test_bounds_all_is_unbounded() {
        let now = at("2026-03-10T15:30:00Z");
        assert!(TimeWindow::All.bounds(&now).is_none());
    }

    #[test]
    fn test_validate_rejects_out_of_range_reliability() {
        let options = FilterOptions {
            min_reliability: 101,
            ..FilterOptions::default()
        };
        assert_eq!(
            options.validate(),
            Err(FilterOptionsError::ReliabilityOutOfRange(101))
        );
    }

    #[test]
    fn test_default_is_all_permissive() {
        let options = FilterOptions::default();
        assert_eq!(options.time_window, TimeWindow::All);
        assert!(options.category.is_none());
        assert_eq!(options.min_reliability, 0);
        assert_eq!(options.radius_m, DEFAULT_RADIUS_M);
        assert!(options.validate().is_ok());
    }
}
