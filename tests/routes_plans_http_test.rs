// ABOUTME: HTTP integration tests for the plan generation route
// ABOUTME: Exercises the rule-based path, error envelopes, and request ID propagation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use axum::http::StatusCode;
use helpers::axum_test::AxumTestRequest;
use helpers::test_utils::{app, offline_config, sample_form};
use serde_json::{json, Value};

const GENERATE_PLAN: &str = "/api/generate-plan";

async fn generate(form: &Value) -> Value {
    AxumTestRequest::post(GENERATE_PLAN)
        .json(form)
        .send(app(offline_config()))
        .await
        .assert_status(StatusCode::OK)
        .json()
}

fn routine_names(plan: &Value) -> Vec<String> {
    plan["workoutPlan"]["exercises"]
        .as_array()
        .unwrap()
        .iter()
        .flat_map(|day| day["routines"].as_array().unwrap())
        .map(|routine| routine["name"].as_str().unwrap().to_lowercase())
        .collect()
}

// ============================================================================
// Successful generation
// ============================================================================

#[tokio::test]
async fn test_beginner_weight_loss_plan() {
    let plan = generate(&sample_form()).await;

    assert_eq!(plan["success"], true);
    assert_eq!(plan["generatedBy"], "Rule-based Planner");
    assert!(plan.get("modelInfo").is_none());
    assert!(plan["generatedAt"].is_string());

    assert_eq!(
        plan["workoutPlan"]["schedule"],
        json!(["Monday", "Wednesday", "Friday"])
    );
    assert_eq!(
        plan["workoutPlan"]["exercises"][0]["routines"][0],
        json!({"name": "Brisk Walking", "sets": 1, "reps": 30})
    );

    // BMR 1648.75, TDEE 2143, minus the 500 kcal deficit
    assert_eq!(plan["dietPlan"]["dailyCalories"], 1643);
    assert_eq!(plan["dietPlan"]["meals"][0]["name"], "Breakfast");

    assert_eq!(plan["tips"].as_array().unwrap().len(), 6);
    assert!(plan.get("warnings").is_none());
    assert_eq!(plan["hydration"], "Drink 8-10 glasses of water daily");
    assert_eq!(
        plan["supplements"],
        json!(["Multivitamin", "Fish Oil", "Vitamin D3"])
    );
}

#[tokio::test]
async fn test_schedule_matches_exercise_days() {
    for (level, goals) in [
        ("beginner", "build muscle"),
        ("intermediate", "lose weight"),
        ("advanced", "stay healthy"),
        ("expert", "bulk up"),
    ] {
        let mut form = sample_form();
        form["fitnessLevel"] = json!(level);
        form["fitnessGoals"] = json!(goals);
        let plan = generate(&form).await;

        let days: Vec<&Value> = plan["workoutPlan"]["exercises"]
            .as_array()
            .unwrap()
            .iter()
            .map(|day| &day["day"])
            .collect();
        let schedule: Vec<&Value> = plan["workoutPlan"]["schedule"]
            .as_array()
            .unwrap()
            .iter()
            .collect();
        assert_eq!(schedule, days, "{level}/{goals}");
    }
}

#[tokio::test]
async fn test_senior_profile_gets_warnings_and_reduced_volume() {
    let mut form = sample_form();
    form["age"] = json!(70);
    form["fitnessLevel"] = json!("advanced");
    form["fitnessGoals"] = json!("build muscle");
    let plan = generate(&form).await;

    assert_eq!(plan["warnings"].as_array().unwrap().len(), 5);
    for day in plan["workoutPlan"]["exercises"].as_array().unwrap() {
        for routine in day["routines"].as_array().unwrap() {
            assert!(routine["sets"].as_u64().unwrap() >= 2);
            assert!(routine["reps"].as_u64().unwrap() >= 8);
        }
    }
    assert_eq!(
        plan["supplements"],
        json!(["Whey Protein", "Creatine Monohydrate", "Multivitamin"])
    );
}

#[tokio::test]
async fn test_knee_injury_removes_leg_impact_exercises() {
    let mut form = sample_form();
    form["injuries"] = json!("Bad knee");
    let plan = generate(&form).await;

    for name in routine_names(&plan) {
        for fragment in ["squat", "lunge", "jump"] {
            assert!(!name.contains(fragment), "{name}");
        }
    }
}

#[tokio::test]
async fn test_dairy_allergy_removes_dairy_foods() {
    let mut form = sample_form();
    form["fitnessGoals"] = json!("build muscle");
    form["allergies"] = json!("dairy");
    let plan = generate(&form).await;

    for meal in plan["dietPlan"]["meals"].as_array().unwrap() {
        let foods = meal["foods"].as_array().unwrap();
        assert!(!foods.is_empty());
        for food in foods {
            let food = food.as_str().unwrap().to_lowercase();
            for fragment in ["milk", "cheese", "yogurt", "butter"] {
                assert!(!food.contains(fragment), "{food}");
            }
        }
    }
}

#[tokio::test]
async fn test_empty_object_uses_defaults() {
    let plan = generate(&json!({})).await;
    assert_eq!(plan["success"], true);
    assert!(plan["dietPlan"]["dailyCalories"].as_u64().unwrap() >= 1200);
    assert_eq!(plan["hydration"], "Drink 8-10 glasses of water daily");
}

#[tokio::test]
async fn test_calories_never_below_minimum() {
    let mut form = sample_form();
    form["weight"] = json!("35");
    form["height"] = json!("120");
    form["age"] = json!("80");
    let plan = generate(&form).await;
    assert_eq!(plan["dietPlan"]["dailyCalories"], 1200);
}

// ============================================================================
// Error envelopes
// ============================================================================

#[tokio::test]
async fn test_malformed_json_is_400() {
    let body: Value = AxumTestRequest::post(GENERATE_PLAN)
        .raw_json("{\"fitnessGoals\": ")
        .send(app(offline_config()))
        .await
        .assert_status(StatusCode::BAD_REQUEST)
        .json();

    assert_eq!(body["success"], false);
    assert_eq!(body["code"], "INVALID_FORMAT");
    assert!(body["error"].as_str().unwrap().starts_with("Invalid request body"));
    assert!(body["details"].is_string());
}

#[tokio::test]
async fn test_non_object_body_is_400() {
    let body: Value = AxumTestRequest::post(GENERATE_PLAN)
        .json(&json!(["beginner", "lose weight"]))
        .send(app(offline_config()))
        .await
        .assert_status(StatusCode::BAD_REQUEST)
        .json();

    assert_eq!(body["success"], false);
    assert_eq!(body["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_missing_content_type_is_400() {
    let response = AxumTestRequest::post(GENERATE_PLAN)
        .send(app(offline_config()))
        .await;
    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn test_get_is_not_allowed() {
    let response = AxumTestRequest::get(GENERATE_PLAN)
        .send(app(offline_config()))
        .await;
    assert_eq!(response.status(), 405);
}

// ============================================================================
// Request IDs
// ============================================================================

#[tokio::test]
async fn test_request_id_is_generated_and_echoed() {
    let response = AxumTestRequest::post(GENERATE_PLAN)
        .json(&sample_form())
        .send(app(offline_config()))
        .await;
    let request_id = response.header("x-request-id").unwrap();
    assert!(request_id.starts_with("req_"));
}

#[tokio::test]
async fn test_client_request_id_is_reused_in_error_body() {
    let response = AxumTestRequest::post(GENERATE_PLAN)
        .header("x-request-id", "trace-abc-123")
        .json(&json!("not an object"))
        .send(app(offline_config()))
        .await;

    assert_eq!(response.header("x-request-id").as_deref(), Some("trace-abc-123"));
    let body: Value = response.assert_status(StatusCode::BAD_REQUEST).json();
    assert_eq!(body["requestId"], "trace-abc-123");
}
