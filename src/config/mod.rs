// ABOUTME: Configuration module for centralized server settings
// ABOUTME: Exposes environment-driven server configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for the `FitPlan` server

/// Environment and server configuration
pub mod environment;

pub use environment::{Environment, PredictorSettings, ServerConfig};
