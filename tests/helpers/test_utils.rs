// ABOUTME: FitPlan test fixtures: configs, routers, sample profiles, and a local predictor stub
// ABOUTME: The stub is a real axum server on an ephemeral port so the HTTP client is exercised end to end
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(dead_code)]

use axum::Router;
use fitplan_server::config::ServerConfig;
use fitplan_server::server::{build_router, ServerResources};
use serde_json::{json, Value};
use std::time::Duration;
use tokio::net::TcpListener;

/// Fixed seed so meal picks are reproducible within a test
pub const TEST_MEAL_SEED: u64 = 2024;

/// Config with the predictor switched off
pub fn offline_config() -> ServerConfig {
    let mut config = ServerConfig::default();
    config.predictor.enabled = false;
    config.meal_selection_seed = Some(TEST_MEAL_SEED);
    config
}

/// Config pointing the predictor at `url`
pub fn predictor_config(url: &str, timeout: Duration) -> ServerConfig {
    let mut config = offline_config();
    config.predictor.enabled = true;
    config.predictor.url = url.to_owned();
    config.predictor.timeout = timeout;
    config
}

/// Full application router for a config
pub fn app(config: ServerConfig) -> Router {
    let resources = ServerResources::new(config).expect("Failed to build server resources");
    build_router(&resources)
}

/// Profile form as the browser submits it (numbers as strings)
pub fn sample_form() -> Value {
    json!({
        "fitnessGoals": "Lose weight",
        "fitnessLevel": "beginner",
        "age": "30",
        "weight": "70",
        "height": "175",
        "injuries": "none",
        "allergies": "none",
        "additionalInfo": ""
    })
}

/// Serve `router` on 127.0.0.1 with an ephemeral port and return its base URL
pub async fn spawn_stub(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub listener");
    let addr = listener.local_addr().expect("Stub listener has no address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("Stub server failed");
    });
    format!("http://{addr}")
}

/// A well-formed predictor answer with string-typed numbers to sanitize
pub fn predicted_payload() -> Value {
    json!({
        "success": true,
        "workoutPlan": {
            "schedule": ["Monday", "Thursday"],
            "exercises": [
                {"day": "Monday", "routines": [{"name": "Rowing", "sets": "3", "reps": 15}]},
                {"day": "Thursday", "routines": [{"name": "Deadlift", "sets": 4, "reps": "six"}]}
            ]
        },
        "dietPlan": {
            "dailyCalories": 2250,
            "meals": [{"name": "Lunch", "foods": ["Rice", "Chicken", {"item": "Beans"}]}]
        },
        "modelInfo": {"name": "FitnessRNN", "version": "1.0", "accuracy": 0.9}
    })
}
