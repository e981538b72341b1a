// ABOUTME: Plan generation route accepting the profile form and returning a full plan
// ABOUTME: Thin handler that parses the body, delegates to the plan service, and tags errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::routes;
use crate::middleware::RequestId;
use crate::services::plan_generation::PlanGenerationService;
use axum::{
    extract::{rejection::JsonRejection, State},
    response::{IntoResponse, Response},
    routing::post,
    Extension, Json, Router,
};
use fitplan_core::errors::AppError;
use fitplan_core::models::UserProfile;
use http::StatusCode;
use serde_json::Value;
use std::sync::Arc;

/// Plan generation routes
pub struct PlanRoutes;

impl PlanRoutes {
    /// Create the plan routes
    #[must_use = "routes do nothing until merged into a served router"]
    pub fn routes(service: Arc<PlanGenerationService>) -> Router {
        Router::new()
            .route(routes::GENERATE_PLAN, post(Self::handle_generate_plan))
            .with_state(service)
    }

    /// Handle plan generation
    ///
    /// The body is taken as loose JSON so numeric form fields may arrive as
    /// strings. Anything that is not a JSON object is rejected with 400.
    async fn handle_generate_plan(
        State(service): State<Arc<PlanGenerationService>>,
        request_id: Option<Extension<RequestId>>,
        payload: Result<Json<Value>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let request_id = request_id.map(|Extension(id)| id);
        let tag = |error: AppError| match &request_id {
            Some(id) => error.with_request_id(id.as_str()),
            None => error,
        };

        let Json(form) = payload.map_err(|rejection| {
            tag(AppError::invalid_format(format!(
                "Invalid request body: {}",
                rejection.body_text()
            )))
        })?;

        let profile = UserProfile::from_form(&form).map_err(tag)?;
        let plan = service.generate(&profile).await.map_err(tag)?;

        Ok((StatusCode::OK, Json(plan)).into_response())
    }
}
