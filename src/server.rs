// ABOUTME: HTTP server assembly: shared resources, router layers, and graceful shutdown
// ABOUTME: Wires the plan service to its routes behind request-id, tracing, CORS, and timeout layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Server Module
//!
//! Builds the shared [`ServerResources`] once at startup and serves the
//! router until Ctrl+C or SIGTERM.

use crate::config::ServerConfig;
use crate::external::predictor_client::{HttpPredictorClient, PlanPredictor, PredictorClientConfig};
use crate::middleware::{request_id_middleware, setup_cors};
use crate::routes::{HealthRoutes, PlanRoutes};
use crate::services::plan_generation::PlanGenerationService;
use anyhow::{Context, Result};
use axum::{middleware, Router};
use fitplan_core::errors::AppResult;
use std::future;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::signal;
#[cfg(unix)]
use tokio::signal::unix::{signal as unix_signal, SignalKind};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Headroom added to the predictor timeout for the whole request
const REQUEST_TIMEOUT_HEADROOM: Duration = Duration::from_secs(5);

/// Shared resources built once and handed to every route
#[derive(Clone)]
pub struct ServerResources {
    /// Loaded configuration
    pub config: Arc<ServerConfig>,
    /// Plan orchestration service
    pub plan_service: Arc<PlanGenerationService>,
}

impl ServerResources {
    /// Build resources from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the predictor HTTP client cannot be built
    pub fn new(config: ServerConfig) -> AppResult<Self> {
        let predictor: Option<Arc<dyn PlanPredictor>> = if config.predictor.enabled {
            let client: Arc<dyn PlanPredictor> =
                Arc::new(HttpPredictorClient::new(PredictorClientConfig {
                    url: config.predictor.url.clone(),
                    timeout: config.predictor.timeout,
                })?);
            Some(client)
        } else {
            None
        };

        let plan_service = PlanGenerationService::new(predictor, config.meal_selection_seed);
        Ok(Self::with_service(config, plan_service))
    }

    /// Build resources around an existing service
    #[must_use]
    pub fn with_service(config: ServerConfig, plan_service: PlanGenerationService) -> Self {
        Self {
            config: Arc::new(config),
            plan_service: Arc::new(plan_service),
        }
    }
}

/// Assemble the application router
///
/// Layers run outermost first: request ID, tracing, CORS, then timeout.
#[must_use = "the router does nothing until served"]
pub fn build_router(resources: &ServerResources) -> Router {
    let request_timeout = resources.config.predictor.timeout + REQUEST_TIMEOUT_HEADROOM;

    Router::new()
        .merge(HealthRoutes::routes(resources.plan_service.clone()))
        .merge(PlanRoutes::routes(resources.plan_service.clone()))
        .layer(TimeoutLayer::new(request_timeout))
        .layer(setup_cors(&resources.config))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_id_middleware))
}

/// Bind and serve until a shutdown signal arrives
///
/// # Errors
///
/// Returns an error if resources cannot be built, the address cannot be
/// bound, or the server fails while running
pub async fn run(config: ServerConfig) -> Result<()> {
    let resources = ServerResources::new(config).context("Failed to build server resources")?;
    let address = resources.config.bind_address();
    let app = build_router(&resources);

    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;

    info!(
        address = %address,
        predictor.enabled = resources.plan_service.predictor_enabled(),
        "FitPlan server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("FitPlan server stopped");
    Ok(())
}

/// Resolve on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {e}");
            future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match unix_signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {e}");
                future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}
