// ABOUTME: FitPlan server binary
// ABOUTME: Loads configuration, applies command-line overrides, and serves the plan API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # `FitPlan` Server Binary
//!
//! Configuration comes from the environment; the flags below override it.

use anyhow::Result;
use clap::Parser;
use fitplan_server::{config::ServerConfig, logging, server};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "fitplan-server")]
#[command(about = "FitPlan - workout and diet plan generator API")]
#[command(version)]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override the predictor endpoint URL
    #[arg(long)]
    predictor_url: Option<String>,

    /// Never call the predictor; always use the rule-based planner
    #[arg(long)]
    no_predictor: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(url) = args.predictor_url {
        config.predictor.url = url;
    }
    if args.no_predictor {
        config.predictor.enabled = false;
    }
    config.validate()?;

    info!("Starting FitPlan server");
    info!("{}", config.summary());

    if let Err(e) = server::run(config).await {
        error!("Server error: {e:#}");
        return Err(e);
    }
    Ok(())
}
