// ABOUTME: Server constants and environment-based configuration lookups
// ABOUTME: Re-exports planner constants from fitplan-core and adds ports, routes, and env_config
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Constants Module
//!
//! Application constants and environment-based configuration values.
//! Planner constants live in `fitplan-core` and are re-exported here so the
//! server has a single import point.

pub use fitplan_core::constants::{defaults, labels, limits, service_names};

/// Network defaults
pub mod ports {
    /// Default HTTP port
    pub const DEFAULT_HTTP_PORT: u16 = 8081;

    /// Default bind address
    pub const DEFAULT_HOST: &str = "127.0.0.1";
}

/// Route paths
pub mod routes {
    /// Plan generation endpoint
    pub const GENERATE_PLAN: &str = "/api/generate-plan";

    /// Liveness endpoint
    pub const HEALTH: &str = "/health";

    /// Readiness endpoint
    pub const READY: &str = "/ready";
}

/// Predictor defaults
pub mod predictor {
    /// Default prediction endpoint
    pub const DEFAULT_URL: &str = "http://localhost:5000/api/predict-workout";

    /// Default whole-request timeout in seconds
    pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
}

/// HTTP header names
pub mod headers {
    /// Request correlation header
    pub const REQUEST_ID: &str = "x-request-id";
}

/// Environment-based configuration
pub mod env_config {
    use super::{ports, predictor};
    use std::env;

    /// Get HTTP port from environment or default
    #[must_use]
    pub fn http_port() -> u16 {
        env::var("HTTP_PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(ports::DEFAULT_HTTP_PORT)
    }

    /// Get bind host from environment or default
    #[must_use]
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| ports::DEFAULT_HOST.into())
    }

    /// Get predictor URL; `AI_MODEL_API_URL` is accepted as an alias
    #[must_use]
    pub fn predictor_url() -> String {
        env::var("PREDICTOR_API_URL")
            .or_else(|_| env::var("AI_MODEL_API_URL"))
            .unwrap_or_else(|_| predictor::DEFAULT_URL.into())
    }

    /// Whether remote prediction is enabled (default: true)
    #[must_use]
    pub fn predictor_enabled() -> bool {
        env::var("PREDICTOR_ENABLED").map_or(true, |v| {
            !matches!(v.trim().to_lowercase().as_str(), "false" | "0" | "no" | "off")
        })
    }

    /// Raw predictor timeout value, if set
    #[must_use]
    pub fn predictor_timeout_secs() -> Option<String> {
        env::var("PREDICTOR_TIMEOUT_SECS").ok()
    }

    /// Raw meal selection seed, if set
    #[must_use]
    pub fn meal_selection_seed() -> Option<String> {
        env::var("MEAL_SELECTION_SEED").ok().filter(|s| !s.trim().is_empty())
    }

    /// Get CORS allowed origins from environment or default
    #[must_use]
    pub fn cors_allowed_origins() -> String {
        env::var("CORS_ALLOWED_ORIGINS").unwrap_or_else(|_| "*".into())
    }

    /// Deployment environment name
    #[must_use]
    pub fn environment() -> String {
        env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into())
    }
}
