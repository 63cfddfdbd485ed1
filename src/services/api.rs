// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Backend API client.
//!
//! Handles:
//! - Nearby item queries for the map view
//! - Activity create/update on publish
//! - AI-assist parse/refine calls for draft prefill and editing

use crate::models::draft::{DraftContext, DraftPrefill};
use crate::models::nearby::{ActivityStatus, FeeType, NearbyItem};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Backend API client.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

/// Parameters for the nearby items endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NearbyQuery {
    pub lat: f64,
    pub lng: f64,
    /// Search radius in meters.
    pub radius: u32,
    pub zoom_level: u8,
    /// Whether synthetic ghost anchors should be included.
    pub include_ghosts: bool,
}

/// Response from the nearby items endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NearbyResponse {
    pub items: Vec<NearbyItem>,
    /// Total matching items before any truncation by the backend.
    pub total: u32,
}

/// Full activity payload for create and update.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityUpsert {
    pub title: String,
    pub start_at: chrono::DateTime<chrono::Utc>,
    /// `[lng, lat]` per the backend convention.
    pub location: [f64; 2],
    pub location_name: String,
    pub location_address: String,
    pub location_hint: String,
    pub max_participants: u32,
    pub category: String,
    pub fee_type: FeeType,
    pub status: ActivityStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_at: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
}

/// Response from activity create/update.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ActivityUpsertResponse {
    id: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AssistParseRequest<'a> {
    prompt: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AssistRefineRequest<'a> {
    prompt: &'a str,
    context: &'a DraftContext,
}

impl ApiClient {
    /// Create a new client for the given base URL.
    pub fn new(base_url: String, timeout: Duration) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        }
    }

    /// Fetch items near a point for the map view.
    pub async fn nearby(&self, query: &NearbyQuery) -> Result<NearbyResponse, ApiError> {
        let url = format!("{}/nearby", self.base_url);
        let response = self
            .http
            .get(&url)
            .timeout(self.timeout)
            .query(query)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        self.check_response_json(response).await
    }

    /// Create a new activity; returns the backend activity id.
    pub async fn create_activity(&self, activity: &ActivityUpsert) -> Result<String, ApiError> {
        let url = format!("{}/activities", self.base_url);
        let response = self
            .http
            .post(&url)
            .timeout(self.timeout)
            .json(activity)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let body: ActivityUpsertResponse = self.check_response_json(response).await?;
        Ok(body.id)
    }

    /// Update an existing activity; returns the backend activity id.
    pub async fn update_activity(
        &self,
        activity_id: &str,
        activity: &ActivityUpsert,
    ) -> Result<String, ApiError> {
        let url = format!("{}/activities/{}", self.base_url, activity_id);
        let response = self
            .http
            .put(&url)
            .timeout(self.timeout)
            .json(activity)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let body: ActivityUpsertResponse = self.check_response_json(response).await?;
        Ok(body.id)
    }

    /// Parse a natural-language request into draft prefill fields.
    pub async fn assist_parse(&self, prompt: &str) -> Result<DraftPrefill, ApiError> {
        let url = format!("{}/assist/parse", self.base_url);
        let response = self
            .http
            .post(&url)
            .timeout(self.timeout)
            .json(&AssistParseRequest { prompt })
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        self.check_response_json(response).await
    }

    /// Apply a conversational delta ("change the time") to the current
    /// draft, carried in `context`.
    pub async fn assist_refine(
        &self,
        prompt: &str,
        context: &DraftContext,
    ) -> Result<DraftPrefill, ApiError> {
        let url = format!("{}/assist/refine", self.base_url);
        let response = self
            .http
            .post(&url)
            .timeout(self.timeout)
            .json(&AssistRefineRequest { prompt, context })
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        self.check_response_json(response).await
    }

    /// Check response status and parse the JSON body.
    async fn check_response_json<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Errors from backend API calls.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Transport(String),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Invalid response body: {0}")]
    Decode(String),
}
