// ABOUTME: HTTP client for the remote plan predictor service
// ABOUTME: Posts the user profile with a bounded timeout and returns the raw prediction payload
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Remote Plan Predictor Client
//!
//! The predictor is an opaque HTTP service. It receives the user profile as
//! JSON and answers with:
//!
//! ```json
//! { "success": true, "workoutPlan": { ... }, "dietPlan": { ... }, "modelInfo": { ... } }
//! ```
//!
//! Plans are kept as raw JSON here; the caller sanitizes them. Every failure
//! is reported as a [`PredictorError`] so the caller can decide to fall back.

use async_trait::async_trait;
use fitplan_core::constants::service_names;
use fitplan_core::errors::{AppError, AppResult};
use fitplan_core::models::UserProfile;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Default predictor endpoint
pub const DEFAULT_PREDICTOR_URL: &str = "http://localhost:5000/api/predict-workout";

/// Default request timeout
pub const DEFAULT_PREDICTOR_TIMEOUT: Duration = Duration::from_secs(10);

/// Predictor client configuration
#[derive(Debug, Clone)]
pub struct PredictorClientConfig {
    /// Full URL of the prediction endpoint
    pub url: String,
    /// Whole-request timeout
    pub timeout: Duration,
}

impl Default for PredictorClientConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_PREDICTOR_URL.to_owned(),
            timeout: DEFAULT_PREDICTOR_TIMEOUT,
        }
    }
}

/// Payload returned by the predictor
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictorResponse {
    /// Whether the predictor produced a plan
    #[serde(default)]
    pub success: bool,
    /// Workout plan in loose form
    #[serde(default)]
    pub workout_plan: Option<Value>,
    /// Diet plan in loose form
    #[serde(default)]
    pub diet_plan: Option<Value>,
    /// Model metadata, passed through to the caller untouched
    #[serde(default)]
    pub model_info: Option<Value>,
}

/// Why a prediction request produced no payload
#[derive(Debug, Error)]
pub enum PredictorError {
    /// No response within the configured timeout
    #[error("request timed out after {0:?}")]
    Timeout(Duration),
    /// Connection or transport failure
    #[error("network error: {0}")]
    Network(String),
    /// Non-2xx status
    #[error("predictor returned HTTP {0}")]
    HttpStatus(u16),
    /// Body was not the expected JSON object
    #[error("malformed response: {0}")]
    Malformed(String),
}

/// A source of remote plan predictions
#[async_trait]
pub trait PlanPredictor: Send + Sync {
    /// Request a plan for a profile
    async fn predict(&self, profile: &UserProfile) -> Result<PredictorResponse, PredictorError>;
}

/// Predictor backed by an HTTP endpoint
pub struct HttpPredictorClient {
    config: PredictorClientConfig,
    http_client: Client,
}

impl HttpPredictorClient {
    /// Create a client with the configured timeout applied to every request
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built
    pub fn new(config: PredictorClientConfig) -> AppResult<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                AppError::config(format!(
                    "Failed to build {} HTTP client: {e}",
                    service_names::PLAN_PREDICTOR
                ))
            })?;

        Ok(Self {
            config,
            http_client,
        })
    }

    /// Endpoint this client posts to
    #[must_use]
    pub fn url(&self) -> &str {
        &self.config.url
    }

    fn classify(&self, error: &reqwest::Error) -> PredictorError {
        if error.is_timeout() {
            PredictorError::Timeout(self.config.timeout)
        } else if error.is_decode() {
            PredictorError::Malformed(error.to_string())
        } else {
            PredictorError::Network(error.to_string())
        }
    }
}

#[async_trait]
impl PlanPredictor for HttpPredictorClient {
    async fn predict(&self, profile: &UserProfile) -> Result<PredictorResponse, PredictorError> {
        debug!(url = %self.config.url, "Requesting plan prediction");

        let response = self
            .http_client
            .post(&self.config.url)
            .json(profile)
            .send()
            .await
            .map_err(|e| self.classify(&e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PredictorError::HttpStatus(status.as_u16()));
        }

        response
            .json::<PredictorResponse>()
            .await
            .map_err(|e| self.classify(&e))
    }
}
