/*!
 * HTTP presentation of the suggestion pipeline.
 *
 * Two endpoints over the same pipeline the interactive shell drives:
 * - `POST /translate` with `{ "text": ... }`
 * - `POST /refine` with `{ "selected_sentence": ... }`
 *
 * Requests share only the read-only pipeline; there is no cross-request
 * state. Failures surface as a JSON body with a `detail` field.
 */

use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use log::{error, info};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::app_config::Config;
use crate::errors::PipelineError;
use crate::pipeline::{Pipeline, PipelineRequest, ResultEntry};
use crate::providers::groq::Groq;

/// Body of a translation request
#[derive(Debug, Deserialize)]
pub struct TranslateRequest {
    pub text: String,
}

/// Body of a refinement request
#[derive(Debug, Deserialize)]
pub struct RefineRequest {
    pub selected_sentence: String,
}

/// Successful response shape shared by both endpoints
#[derive(Debug, Serialize)]
pub struct ResultsResponse {
    pub results: Vec<ResultEntry>,
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<Pipeline>,
}

type HandlerError = (StatusCode, Json<ErrorResponse>);

/// Build the router over an existing pipeline
pub fn router(pipeline: Arc<Pipeline>) -> Router {
    Router::new()
        .route("/translate", post(translate))
        .route("/refine", post(refine))
        .layer(CorsLayer::permissive())
        .with_state(AppState { pipeline })
}

/// Bind and serve until the process is terminated
pub async fn serve(config: &Config, host: &str, port: u16) -> anyhow::Result<()> {
    let model = Arc::new(Groq::new(&config.provider));
    let app = router(Arc::new(Pipeline::new(model)));

    let listener = tokio::net::TcpListener::bind((host, port)).await?;
    info!("Serving on http://{}:{}", host, port);

    axum::serve(listener, app).await?;
    Ok(())
}

/// `POST /translate` - run the split/translate path over the request text
pub async fn translate(
    State(state): State<AppState>,
    Json(request): Json<TranslateRequest>,
) -> Result<Json<ResultsResponse>, HandlerError> {
    let text = require_text(request.text, "text")?;
    run_pipeline(&state, "translate", text).await
}

/// `POST /refine` - run the refine path over the selected sentence
pub async fn refine(
    State(state): State<AppState>,
    Json(request): Json<RefineRequest>,
) -> Result<Json<ResultsResponse>, HandlerError> {
    let sentence = require_text(request.selected_sentence, "selected_sentence")?;
    run_pipeline(&state, "refine", sentence).await
}

fn require_text(value: String, field: &str) -> Result<String, HandlerError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                detail: format!("'{}' must not be empty", field),
            }),
        ));
    }
    Ok(trimmed.to_string())
}

/// The route segment doubles as the wire-level mode tag.
async fn run_pipeline(
    state: &AppState,
    mode_tag: &str,
    payload: String,
) -> Result<Json<ResultsResponse>, HandlerError> {
    let request = PipelineRequest::from_tag(mode_tag, payload);
    match state.pipeline.run(request).await {
        Ok(results) => Ok(Json(ResultsResponse { results })),
        Err(e @ PipelineError::Provider(_)) => {
            error!("Model service failure: {}", e);
            Err((
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse {
                    detail: e.to_string(),
                }),
            ))
        }
        Err(e @ PipelineError::Malformed(_)) => {
            error!("Model returned malformed output: {}", e);
            Err((
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse {
                    detail: e.to_string(),
                }),
            ))
        }
    }
}
