// ABOUTME: Clients for services outside this process
// ABOUTME: Currently the remote plan predictor
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Remote plan predictor client
pub mod predictor_client;

pub use predictor_client::{
    HttpPredictorClient, PlanPredictor, PredictorClientConfig, PredictorError, PredictorResponse,
};
