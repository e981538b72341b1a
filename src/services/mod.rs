// ABOUTME: Service layer between HTTP handlers and the planning logic
// ABOUTME: Hosts plan generation orchestration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Service layer
//!
//! Route handlers stay thin and delegate here.

/// Remote-first plan generation with rule-based fallback
pub mod plan_generation;

pub use plan_generation::{FallbackReason, PlanGenerationService, PredictionOutcome};
