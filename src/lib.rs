// ABOUTME: Main library entry point for the FitPlan workout and diet plan service
// ABOUTME: Exposes configuration, planning logic, predictor client, HTTP routes, and server assembly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `FitPlan` Server
//!
//! An HTTP service that turns a short fitness profile into a weekly workout
//! schedule and a daily diet plan.
//!
//! ## Features
//!
//! - **Remote-first**: asks an external predictor for a plan when configured
//! - **Rule-based fallback**: static catalogs keyed by level and goal, with
//!   age scaling, injury exclusions, and allergy filtering
//! - **Sanitized output**: both paths pass through the same plan validator
//! - **Advice**: tips, age warnings, hydration, and supplements on every plan
//!
//! ## Architecture
//!
//! - **intelligence**: pure planning functions over static data
//! - **external**: the predictor HTTP client
//! - **services**: orchestration and fallback decisions
//! - **routes** / **middleware** / **server**: the axum HTTP surface
//! - **config** / **constants** / **logging**: ambient configuration
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use fitplan_server::config::ServerConfig;
//! use fitplan_server::server;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     server::run(config).await
//! }
//! ```

/// Environment-driven configuration
pub mod config;

/// Server constants and environment lookups
pub mod constants;

/// Clients for external services
pub mod external;

/// Rule-based planning logic
pub mod intelligence;

/// Logging configuration and structured events
pub mod logging;

/// HTTP middleware
pub mod middleware;

/// HTTP route handlers
pub mod routes;

/// Router assembly and serving
pub mod server;

/// Plan generation service layer
pub mod services;

/// Error types shared with `fitplan-core`
pub use fitplan_core::errors;

/// Profile and plan models shared with `fitplan-core`
pub use fitplan_core::models;
