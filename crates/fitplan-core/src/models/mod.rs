// ABOUTME: Core data models shared by the selectors, validator, and HTTP layer
// ABOUTME: Re-exports UserProfile, FitnessLevel, and the workout/diet plan shapes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Every model serializes with camelCase field names so the JSON produced by
//! the service matches what form clients and the remote predictor exchange.
//!
//! - `UserProfile`: per-request form attributes, parsed leniently
//! - `FitnessLevel`: normalized training level
//! - `WorkoutPlan` / `DietPlan`: the two halves of a generated plan
//! - `GeneratedPlan`: the success response envelope

/// Lenient conversion of loosely typed JSON values
pub mod loose;
mod plan;
mod profile;

pub use plan::{DietPlan, ExerciseRoutine, GeneratedPlan, Meal, WorkoutDay, WorkoutPlan};
pub use profile::{FitnessLevel, UserProfile};
