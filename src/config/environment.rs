// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Reads bind address, predictor endpoint, meal seed, and CORS origins from the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management for production deployment

use crate::constants::{env_config, ports, predictor};
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use tracing::{info, warn};
use url::Url;

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Remote predictor settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PredictorSettings {
    /// Whether to call the predictor at all
    pub enabled: bool,
    /// Full URL of the prediction endpoint
    pub url: String,
    /// Whole-request timeout
    pub timeout: Duration,
}

impl Default for PredictorSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            url: predictor::DEFAULT_URL.to_owned(),
            timeout: Duration::from_secs(predictor::DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// HTTP port
    pub http_port: u16,
    /// Deployment environment
    pub environment: Environment,
    /// Remote predictor settings
    pub predictor: PredictorSettings,
    /// Seed for reproducible meal selection
    pub meal_selection_seed: Option<u64>,
    /// Comma-separated origin list, or `*`
    pub cors_allowed_origins: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: ports::DEFAULT_HOST.to_owned(),
            http_port: ports::DEFAULT_HTTP_PORT,
            environment: Environment::default(),
            predictor: PredictorSettings::default(),
            meal_selection_seed: None,
            cors_allowed_origins: "*".to_owned(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable does not parse or validation fails
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        if let Err(e) = dotenvy::dotenv() {
            warn!("No .env file found or failed to load: {e}");
        }

        let timeout_secs = match env_config::predictor_timeout_secs() {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .context("Invalid PREDICTOR_TIMEOUT_SECS value")?,
            None => predictor::DEFAULT_TIMEOUT_SECS,
        };

        let meal_selection_seed = env_config::meal_selection_seed()
            .map(|raw| raw.trim().parse::<u64>())
            .transpose()
            .context("Invalid MEAL_SELECTION_SEED value")?;

        let config = Self {
            host: env_config::host(),
            http_port: env_config::http_port(),
            environment: Environment::from_str_or_default(&env_config::environment()),
            predictor: PredictorSettings {
                enabled: env_config::predictor_enabled(),
                url: env_config::predictor_url(),
                timeout: Duration::from_secs(timeout_secs),
            },
            meal_selection_seed,
            cors_allowed_origins: env_config::cors_allowed_origins(),
        };

        config.validate()?;
        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error for a zero predictor timeout or an unusable predictor URL
    pub fn validate(&self) -> Result<()> {
        if self.predictor.timeout.is_zero() {
            return Err(anyhow!("PREDICTOR_TIMEOUT_SECS must be greater than zero"));
        }

        let url = Url::parse(&self.predictor.url)
            .with_context(|| format!("Invalid predictor URL: {}", self.predictor.url))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(anyhow!(
                "Predictor URL must use http or https, got {}",
                url.scheme()
            ));
        }

        if self.environment.is_production() && self.cors_allowed_origins.trim() == "*" {
            warn!("CORS allows any origin in production");
        }

        Ok(())
    }

    /// Socket address string for binding
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }

    /// Get a summary of the configuration for logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "FitPlan Server Configuration:\n\
             - Bind: {}\n\
             - Environment: {}\n\
             - Predictor: {}\n\
             - Predictor Timeout: {}s\n\
             - Meal Selection: {}\n\
             - CORS Origins: {}",
            self.bind_address(),
            self.environment,
            if self.predictor.enabled {
                self.predictor.url.as_str()
            } else {
                "Disabled"
            },
            self.predictor.timeout.as_secs(),
            if self.meal_selection_seed.is_some() {
                "Seeded"
            } else {
                "Random"
            },
            self.cors_allowed_origins
        )
    }
}
