// ABOUTME: Route module organization for the FitPlan HTTP endpoints
// ABOUTME: Groups plan generation and health routes by domain
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module
//!
//! Each domain module contains route definitions and thin handlers that
//! delegate to the service layer.

/// Health check and readiness routes
pub mod health;
/// Plan generation routes
pub mod plans;

pub use health::HealthRoutes;
pub use plans::PlanRoutes;
