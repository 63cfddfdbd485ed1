// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Narrow seam over the host map/location runtime.
//!
//! The core never talks to a platform location API directly; the host
//! implements this trait and the pipeline stays testable offline.

use crate::models::nearby::Coordinates;
use async_trait::async_trait;

/// A point picked on the host map, reverse-geocoded by the host.
#[derive(Debug, Clone)]
pub struct PickedLocation {
    pub coordinates: Coordinates,
    pub name: String,
    pub address: String,
}

/// Failures and non-failures from the host location runtime.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocationError {
    /// The user dismissed the dialog. Not an error to surface; callers
    /// resume the prior state silently.
    #[error("Location request cancelled by the user")]
    Cancelled,

    /// Permission refused. Surfaced as an actionable prompt pointing at
    /// the settings recovery path, never as a transient failure.
    #[error("Location permission denied")]
    PermissionDenied,

    #[error("Location service unavailable: {0}")]
    Unavailable(String),
}

impl LocationError {
    /// Deliberate user cancellation, as opposed to something going wrong.
    pub fn is_user_cancel(&self) -> bool {
        matches!(self, LocationError::Cancelled)
    }
}

/// Host-provided location services.
#[async_trait]
pub trait LocationService: Send + Sync {
    /// Current device coordinates.
    async fn current_coordinates(&self) -> Result<Coordinates, LocationError>;

    /// Open the external map/navigation app pointed at `target`.
    async fn open_external_map(&self, target: Coordinates, label: &str)
        -> Result<(), LocationError>;

    /// Let the user pick a point on a map; returns the reverse-geocoded
    /// name and address along with the coordinates.
    async fn pick_location(&self) -> Result<PickedLocation, LocationError>;
}

/// Fixed-outcome implementation for tests and the diagnostic binary.
#[derive(Debug, Clone)]
pub struct StaticLocationService {
    pub coordinates: Coordinates,
}

#[async_trait]
impl LocationService for StaticLocationService {
    async fn current_coordinates(&self) -> Result<Coordinates, LocationError> {
        Ok(self.coordinates)
    }

    async fn open_external_map(
        &self,
        _target: Coordinates,
        _label: &str,
    ) -> Result<(), LocationError> {
        Ok(())
    }

    async fn pick_location(&self) -> Result<PickedLocation, LocationError> {
        Ok(PickedLocation {
            coordinates: self.coordinates,
            name: "Pinned location".to_string(),
            address: String::new(),
        })
    }
}
