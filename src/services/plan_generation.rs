// ABOUTME: Plan generation orchestration: remote prediction first, rule-based selection as fallback
// ABOUTME: Sanitizes whichever plan wins and attaches tips, warnings, hydration, and supplements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Plan Generation Service
//!
//! A request either fully succeeds with a workout and a diet or fails with
//! an [`AppError`]. Predictor problems never fail a request: they become a
//! [`PredictionOutcome::Fallback`] carrying the reason, which is logged.

use crate::external::predictor_client::{PlanPredictor, PredictorError, PredictorResponse};
use crate::intelligence::advice::advise;
use crate::intelligence::diet_selector::select_diet;
use crate::intelligence::plan_validator::{validate_diet, validate_workout, Sanitized};
use crate::intelligence::workout_selector::select_workout;
use crate::logging::AppLogger;
use chrono::Utc;
use fitplan_core::constants::labels;
use fitplan_core::errors::{AppError, AppResult};
use fitplan_core::models::{DietPlan, GeneratedPlan, UserProfile, WorkoutPlan};
use rand::{thread_rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde_json::Value;
use std::sync::{Arc, Mutex};
use std::time::Instant;
use thiserror::Error;
use tracing::debug;

/// Why the rule-based planner was used instead of the predictor
#[derive(Debug, Error)]
pub enum FallbackReason {
    /// Remote prediction is switched off
    #[error("predictor disabled")]
    Disabled,
    /// The request itself failed
    #[error(transparent)]
    Request(#[from] PredictorError),
    /// The predictor answered with `success: false`
    #[error("predictor reported failure")]
    Unsuccessful,
    /// `workoutPlan` or `dietPlan` was absent
    #[error("predictor response is missing a plan")]
    MissingPlan,
    /// A plan had no routines or no meals after sanitizing
    #[error("predicted plan is empty after validation")]
    EmptyPlan,
}

/// A plan produced by the remote predictor, already sanitized
#[derive(Debug, Clone)]
pub struct PredictedPlan {
    /// Sanitized workout
    pub workout: WorkoutPlan,
    /// Sanitized diet
    pub diet: DietPlan,
    /// Model metadata as reported
    pub model_info: Option<Value>,
}

/// Result of asking the predictor for a plan
#[derive(Debug)]
pub enum PredictionOutcome {
    /// The predictor's plan is usable
    Predicted(PredictedPlan),
    /// The local planner must be used
    Fallback(FallbackReason),
}

/// Random source for meal variant selection
enum MealRng {
    /// Fresh thread-local randomness per request
    Thread,
    /// Reproducible sequence shared across requests
    Seeded(Mutex<ChaCha8Rng>),
}

/// Orchestrates prediction, fallback, sanitizing, and advice
pub struct PlanGenerationService {
    predictor: Option<Arc<dyn PlanPredictor>>,
    meal_rng: MealRng,
}

impl PlanGenerationService {
    /// Create the service.
    ///
    /// With no predictor every plan comes from the rule-based selectors.
    /// A `meal_seed` makes meal selection reproducible across runs.
    #[must_use]
    pub fn new(predictor: Option<Arc<dyn PlanPredictor>>, meal_seed: Option<u64>) -> Self {
        let meal_rng = meal_seed.map_or(MealRng::Thread, |seed| {
            MealRng::Seeded(Mutex::new(ChaCha8Rng::seed_from_u64(seed)))
        });
        Self {
            predictor,
            meal_rng,
        }
    }

    /// Whether a remote predictor is configured
    #[must_use]
    pub fn predictor_enabled(&self) -> bool {
        self.predictor.is_some()
    }

    /// Generate a complete plan for a profile
    ///
    /// # Errors
    ///
    /// Returns an error if the local plan cannot be serialized for sanitizing
    /// or the seeded meal generator is unavailable
    pub async fn generate(&self, profile: &UserProfile) -> AppResult<GeneratedPlan> {
        let started = Instant::now();

        let (workout, diet, generated_by, model_info) = match self.predict(profile).await {
            PredictionOutcome::Predicted(plan) => (
                plan.workout,
                plan.diet,
                labels::GENERATED_BY_PREDICTOR,
                plan.model_info,
            ),
            PredictionOutcome::Fallback(reason) => {
                AppLogger::log_predictor_fallback(&reason);
                let (workout, diet) = self.generate_locally(profile)?;
                (workout, diet, labels::GENERATED_BY_RULES, None)
            }
        };

        let advice = advise(profile);
        let warnings = (!advice.warnings.is_empty()).then_some(advice.warnings);

        AppLogger::log_plan_generated(
            generated_by,
            workout.schedule.len(),
            diet.daily_calories,
            started.elapsed().as_millis() as u64,
        );

        Ok(GeneratedPlan {
            success: true,
            workout_plan: workout,
            diet_plan: diet,
            generated_at: Utc::now(),
            generated_by: generated_by.to_owned(),
            model_info,
            tips: advice.tips,
            warnings,
            hydration: advice.hydration,
            supplements: advice.supplements,
        })
    }

    /// Ask the predictor for a plan and decide whether it is usable
    pub async fn predict(&self, profile: &UserProfile) -> PredictionOutcome {
        let Some(predictor) = &self.predictor else {
            return PredictionOutcome::Fallback(FallbackReason::Disabled);
        };

        match predictor.predict(profile).await {
            Ok(response) => accept_prediction(response),
            Err(error) => PredictionOutcome::Fallback(error.into()),
        }
    }

    /// Build and sanitize a plan with the rule-based selectors
    ///
    /// # Errors
    ///
    /// Returns an error if the plan cannot be serialized or the seeded
    /// meal generator lock is poisoned
    pub fn generate_locally(&self, profile: &UserProfile) -> AppResult<(WorkoutPlan, DietPlan)> {
        let workout = select_workout(profile);
        let diet = match &self.meal_rng {
            MealRng::Thread => select_diet(profile, &mut thread_rng()),
            MealRng::Seeded(rng) => {
                let mut rng = rng
                    .lock()
                    .map_err(|_| AppError::internal("Meal selection generator lock poisoned"))?;
                select_diet(profile, &mut *rng)
            }
        };

        let workout = validate_workout(&serde_json::to_value(&workout)?);
        log_defaults("workoutPlan", &workout);
        let diet = validate_diet(&serde_json::to_value(&diet)?);
        log_defaults("dietPlan", &diet);

        Ok((workout.value, diet.value))
    }
}

/// Turn a predictor payload into an outcome, sanitizing both plans
fn accept_prediction(response: PredictorResponse) -> PredictionOutcome {
    if !response.success {
        return PredictionOutcome::Fallback(FallbackReason::Unsuccessful);
    }
    let (Some(workout), Some(diet)) = (&response.workout_plan, &response.diet_plan) else {
        return PredictionOutcome::Fallback(FallbackReason::MissingPlan);
    };

    let workout = validate_workout(workout);
    let diet = validate_diet(diet);
    if !workout.is_clean() {
        AppLogger::log_plan_sanitized("workoutPlan", &workout.defaulted_fields);
    }
    if !diet.is_clean() {
        AppLogger::log_plan_sanitized("dietPlan", &diet.defaulted_fields);
    }
    if workout.value.routine_count() == 0 || diet.value.meals.is_empty() {
        return PredictionOutcome::Fallback(FallbackReason::EmptyPlan);
    }

    PredictionOutcome::Predicted(PredictedPlan {
        workout: workout.value,
        diet: diet.value,
        model_info: response.model_info,
    })
}

fn log_defaults<T>(plan: &str, sanitized: &Sanitized<T>) {
    if !sanitized.is_clean() {
        debug!(
            plan,
            defaulted = ?sanitized.defaulted_fields,
            "Local plan fields were defaulted"
        );
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;
    use std::time::Duration;

    struct StubPredictor(fn() -> Result<PredictorResponse, PredictorError>);

    #[async_trait]
    impl PlanPredictor for StubPredictor {
        async fn predict(&self, _profile: &UserProfile) -> Result<PredictorResponse, PredictorError> {
            (self.0)()
        }
    }

    fn service(stub: fn() -> Result<PredictorResponse, PredictorError>) -> PlanGenerationService {
        PlanGenerationService::new(Some(Arc::new(StubPredictor(stub))), Some(1))
    }

    fn profile() -> UserProfile {
        UserProfile {
            fitness_goals: "lose weight".to_owned(),
            fitness_level: "beginner".to_owned(),
            ..UserProfile::default()
        }
    }

    fn good_response() -> Result<PredictorResponse, PredictorError> {
        Ok(PredictorResponse {
            success: true,
            workout_plan: Some(json!({
                "schedule": ["Tuesday"],
                "exercises": [{"day": "Tuesday", "routines": [{"name": "Rowing", "sets": "2", "reps": 20}]}]
            })),
            diet_plan: Some(json!({
                "dailyCalories": 2100,
                "meals": [{"name": "Lunch", "foods": ["Rice", "Beans"]}]
            })),
            model_info: Some(json!({"name": "FitnessRNN"})),
        })
    }

    #[tokio::test]
    async fn test_predicted_plan_is_used_and_sanitized() {
        let plan = service(good_response).generate(&profile()).await.unwrap();
        assert_eq!(plan.generated_by, "AI RNN Model (90% Accuracy)");
        assert_eq!(plan.workout_plan.schedule, vec!["Tuesday"]);
        assert_eq!(plan.workout_plan.exercises[0].routines[0].sets, 2);
        assert_eq!(plan.diet_plan.daily_calories, 2100);
        assert_eq!(plan.model_info.unwrap()["name"], "FitnessRNN");
    }

    #[tokio::test]
    async fn test_disabled_predictor_falls_back() {
        let service = PlanGenerationService::new(None, None);
        assert!(!service.predictor_enabled());
        assert!(matches!(
            service.predict(&profile()).await,
            PredictionOutcome::Fallback(FallbackReason::Disabled)
        ));
        let plan = service.generate(&profile()).await.unwrap();
        assert_eq!(plan.generated_by, "Rule-based Planner");
        assert!(plan.model_info.is_none());
        assert_eq!(plan.workout_plan.exercises[0].routines[0].name, "Brisk Walking");
    }

    #[tokio::test]
    async fn test_fallback_reasons() {
        let cases: [(fn() -> Result<PredictorResponse, PredictorError>, &str); 4] = [
            (|| Err(PredictorError::Timeout(Duration::from_secs(10))), "timeout"),
            (
                || {
                    Ok(PredictorResponse {
                        success: false,
                        ..PredictorResponse::default()
                    })
                },
                "unsuccessful",
            ),
            (
                || {
                    Ok(PredictorResponse {
                        success: true,
                        workout_plan: Some(json!({"schedule": []})),
                        ..PredictorResponse::default()
                    })
                },
                "missing",
            ),
            (
                || {
                    Ok(PredictorResponse {
                        success: true,
                        workout_plan: Some(json!({"schedule": [], "exercises": []})),
                        diet_plan: Some(json!({"dailyCalories": 2000, "meals": []})),
                        model_info: None,
                    })
                },
                "empty",
            ),
        ];

        for (stub, expected) in cases {
            let outcome = service(stub).predict(&profile()).await;
            let matched = matches!(
                (&outcome, expected),
                (
                    PredictionOutcome::Fallback(FallbackReason::Request(PredictorError::Timeout(_))),
                    "timeout"
                ) | (PredictionOutcome::Fallback(FallbackReason::Unsuccessful), "unsuccessful")
                    | (PredictionOutcome::Fallback(FallbackReason::MissingPlan), "missing")
                    | (PredictionOutcome::Fallback(FallbackReason::EmptyPlan), "empty")
            );
            assert!(matched, "{expected}: {outcome:?}");

            let plan = service(stub).generate(&profile()).await.unwrap();
            assert_eq!(plan.generated_by, "Rule-based Planner");
        }
    }

    #[tokio::test]
    async fn test_advice_attached() {
        let mut senior = profile();
        senior.age = 70;
        let plan = PlanGenerationService::new(None, Some(5))
            .generate(&senior)
            .await
            .unwrap();
        assert_eq!(plan.warnings.unwrap().len(), 5);
        assert_eq!(plan.hydration, "Drink 8-10 glasses of water daily");
        assert_eq!(plan.supplements, vec!["Multivitamin", "Fish Oil", "Vitamin D3"]);

        let plan = PlanGenerationService::new(None, Some(5))
            .generate(&profile())
            .await
            .unwrap();
        assert!(plan.warnings.is_none());
    }

    #[test]
    fn test_seeded_service_is_reproducible() {
        let first = PlanGenerationService::new(None, Some(9))
            .generate_locally(&profile())
            .unwrap();
        let second = PlanGenerationService::new(None, Some(9))
            .generate_locally(&profile())
            .unwrap();
        assert_eq!(first, second);
    }
}
