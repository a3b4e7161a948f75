//! Serve command implementation
//!
//! Runs an HTTP ingestion server exposing the processing pipeline:
//! - `POST /process` accepts a lease schedule JSON array, runs the full
//!   parse/validate workflow, writes the output files, and returns the
//!   valid records
//! - `GET /health` reports liveness

use super::shared::{load_serve_configuration, setup_serve_logging};
use crate::app::models::ScheduleItem;
use crate::app::services::output_writer::write_outputs;
use crate::app::services::schedule_processor::ScheduleProcessor;
use crate::app::services::validation::{validate_document, TracingSink};
use crate::cli::args::ServeArgs;
use crate::config::Config;
use crate::{Error, Result};
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{error, info, warn};

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    config: Arc<Config>,
    processor: Arc<ScheduleProcessor>,
}

/// Serve command runner
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    setup_serve_logging(&args)?;

    let config = load_serve_configuration(&args)?;
    config.ensure_output_directory()?;

    let bind_address = config.server.bind_address();
    let state = AppState {
        config: Arc::new(config),
        processor: Arc::new(ScheduleProcessor::new()),
    };

    let app = build_router(state);

    info!("Starting ingestion server on {}", bind_address);
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .map_err(|e| Error::server(format!("Failed to bind to {}: {}", bind_address, e)))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| Error::server(format!("Server error: {}", e)))?;

    Ok(())
}

/// Build the application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/process", post(process_document))
        .route("/health", get(health_check))
        .with_state(state)
}

/// Health check response
#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

/// GET /health
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// POST /process
///
/// Accepts a lease schedule document as a JSON array and returns the
/// validated structured records. Output files are written as a side
/// effect; a write failure is logged but does not fail the request.
async fn process_document(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> (StatusCode, Json<Value>) {
    if payload.is_null() || payload.as_array().is_some_and(|a| a.is_empty()) {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "No data provided" })),
        );
    }

    let document: Vec<ScheduleItem> = match serde_json::from_value(payload) {
        Ok(document) => document,
        Err(e) => {
            warn!("Rejected malformed payload: {}", e);
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Failed to extract entries from the payload" })),
            );
        }
    };

    let (processed, processing_stats) = state.processor.process_document(&document);
    info!("{}", processing_stats.summary());

    let sink = TracingSink;
    let (valid_records, validation_stats) = validate_document(&processed, &sink);
    info!("{}", validation_stats.summary());

    let csv_path = state.config.output.csv_path();
    let json_path = state.config.output.json_path();
    if let Err(e) = write_outputs(&valid_records, &csv_path, &json_path) {
        error!("Failed to write output files: {}", e);
    }

    match serde_json::to_value(&valid_records) {
        Ok(body) => (StatusCode::OK, Json(body)),
        Err(e) => {
            error!("Failed to serialize response: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Internal server error" })),
            )
        }
    }
}
