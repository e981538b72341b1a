// ABOUTME: Health check route handlers for service monitoring and status endpoints
// ABOUTME: Provides liveness and readiness endpoints for load balancers and orchestrators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Health check routes for service monitoring

use crate::constants::{routes, service_names};
use crate::services::plan_generation::PlanGenerationService;
use axum::{extract::State, routing::get, Json, Router};
use chrono::Utc;
use serde_json::{json, Value};
use std::sync::Arc;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    #[must_use = "routes do nothing until merged into a served router"]
    pub fn routes(service: Arc<PlanGenerationService>) -> Router {
        Router::new()
            .route(routes::HEALTH, get(Self::handle_health))
            .route(routes::READY, get(Self::handle_ready))
            .with_state(service)
    }

    async fn handle_health() -> Json<Value> {
        Json(json!({
            "status": "healthy",
            "service": service_names::FITPLAN_SERVER,
            "version": env!("CARGO_PKG_VERSION"),
            "timestamp": Utc::now().to_rfc3339()
        }))
    }

    /// Ready as soon as the router is serving; the predictor is optional
    async fn handle_ready(State(service): State<Arc<PlanGenerationService>>) -> Json<Value> {
        Json(json!({
            "status": "ready",
            "predictor": if service.predictor_enabled() { "enabled" } else { "disabled" },
            "timestamp": Utc::now().to_rfc3339()
        }))
    }
}
