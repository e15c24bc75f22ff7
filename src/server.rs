//! HTTP surface: wires JSON requests to the pipeline.

use axum::{
    extract::State,
    http::StatusCode,
    response::Json as JsonResponse,
    routing::{get, post},
    serve, Router,
};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use crate::config::Config;
use crate::pipeline::Pipeline;

struct AppState {
    pipeline: Pipeline,
}

#[derive(Debug, Deserialize)]
struct RunPipelineRequest {
    #[serde(default)]
    video_id: Option<String>,
    #[serde(default)]
    generate_profile: bool,
}

#[derive(Serialize)]
struct RunPipelineResponse {
    success: bool,
    transcript: String,
    metadata: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    profile: Option<String>,
}

type ErrorResponse = (StatusCode, JsonResponse<serde_json::Value>);

fn error_response(status: StatusCode, error: String) -> ErrorResponse {
    (status, JsonResponse(json!({ "success": false, "error": error })))
}

async fn health() -> JsonResponse<serde_json::Value> {
    JsonResponse(json!({ "status": "ok" }))
}

async fn run_pipeline_handler(
    State(state): State<Arc<AppState>>,
    axum::Json(request): axum::Json<RunPipelineRequest>,
) -> Result<JsonResponse<RunPipelineResponse>, ErrorResponse> {
    let video_id = match request.video_id.as_deref().map(str::trim) {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => {
            return Err(error_response(
                StatusCode::BAD_REQUEST,
                "No video_id provided".to_string(),
            ))
        }
    };

    info!("[server] run_pipeline: video_id={}", video_id);
    let output = state.pipeline.run(&video_id).await.map_err(|e| {
        warn!("[server] pipeline failed for {}: {}", video_id, e);
        error_response(StatusCode::INTERNAL_SERVER_ERROR, e)
    })?;

    let profile = if request.generate_profile {
        let profile = state
            .pipeline
            .generate_profile(&output.metadata, &output.transcript)
            .await
            .map_err(|e| {
                warn!("[server] profile generation failed for {}: {}", video_id, e);
                error_response(StatusCode::INTERNAL_SERVER_ERROR, e)
            })?;
        Some(profile)
    } else {
        None
    };

    Ok(JsonResponse(RunPipelineResponse {
        success: true,
        transcript: output.transcript,
        metadata: output.metadata,
        profile,
    }))
}

/// Build the router and serve until the process exits.
pub async fn serve_http(config: Config) -> Result<(), String> {
    let state = Arc::new(AppState {
        pipeline: Pipeline::new(&config),
    });

    let app = Router::new()
        .route("/health", get(health))
        .route("/api/run_pipeline", post(run_pipeline_handler))
        .layer(CorsLayer::permissive())
        .with_state(state);

    let listener = TcpListener::bind(&config.bind_addr)
        .await
        .map_err(|e| format!("Failed to bind {}: {}", config.bind_addr, e))?;
    info!("[server] listening on {}", config.bind_addr);
    serve(listener, app).await.map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_defaults_apply_when_fields_are_missing() {
        let request: RunPipelineRequest = serde_json::from_str("{}").unwrap();
        assert!(request.video_id.is_none());
        assert!(!request.generate_profile);
    }

    #[test]
    fn request_parses_both_fields() {
        let request: RunPipelineRequest =
            serde_json::from_str(r#"{ "video_id": "896729164", "generate_profile": true }"#)
                .unwrap();
        assert_eq!(request.video_id.as_deref(), Some("896729164"));
        assert!(request.generate_profile);
    }
}
