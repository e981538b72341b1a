// ABOUTME: Core types and constants for the FitPlan workout and diet planner
// ABOUTME: Foundation crate with error handling, plan models, and planner constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `FitPlan` Core
//!
//! Foundation crate providing shared types and constants for the `FitPlan`
//! planner. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **models**: User profile, fitness level, and plan shapes shared by every layer
//! - **constants**: Planner limits, input defaults, and response labels

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Planner constants organized by domain
pub mod constants;

/// Core data models (`UserProfile`, `WorkoutPlan`, `DietPlan`, `GeneratedPlan`)
pub mod models;
