/*!
 * Tests for the HTTP handlers
 */

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use trivox::pipeline::Pipeline;
use trivox::providers::mock::MockModel;
use trivox::server::{AppState, RefineRequest, TranslateRequest, refine, translate};

use crate::common::{entry_json, results_response, split_response};

fn state_with(model: MockModel) -> AppState {
    AppState {
        pipeline: Arc::new(Pipeline::new(Arc::new(model))),
    }
}

#[tokio::test]
async fn test_translateEndpoint_withValidText_shouldReturnResults() {
    let state = state_with(MockModel::scripted([
        split_response(&["O café está pronto."]),
        results_response(vec![entry_json(
            "O café está pronto.",
            &["The coffee is ready.", "Coffee's ready.", "The coffee is done."],
        )]),
    ]));

    let response = translate(
        State(state),
        Json(TranslateRequest {
            text: "O café está pronto.".to_string(),
        }),
    )
    .await
    .expect("handler should succeed");

    assert_eq!(response.0.results.len(), 1);
    assert_eq!(response.0.results[0].original, "O café está pronto.");
    assert_eq!(response.0.results[0].versions.len(), 3);
}

#[tokio::test]
async fn test_refineEndpoint_withSentence_shouldReturnOneEntry() {
    let state = state_with(MockModel::scripted([results_response(vec![entry_json(
        "Coffee's ready.",
        &["Coffee is served.", "Your coffee awaits.", "Coffee's up."],
    )])]));

    let response = refine(
        State(state),
        Json(RefineRequest {
            selected_sentence: "Coffee's ready.".to_string(),
        }),
    )
    .await
    .expect("handler should succeed");

    assert_eq!(response.0.results.len(), 1);
}

/// Test that blank input is rejected before any model call
#[tokio::test]
async fn test_endpoints_withBlankInput_shouldReturnBadRequest() {
    let state = state_with(MockModel::scripted(Vec::<String>::new()));

    let (status, body) = translate(
        State(state.clone()),
        Json(TranslateRequest {
            text: "   ".to_string(),
        }),
    )
    .await
    .expect_err("blank text must be rejected");

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.0.detail.contains("text"));

    let (status, _body) = refine(
        State(state),
        Json(RefineRequest {
            selected_sentence: String::new(),
        }),
    )
    .await
    .expect_err("blank sentence must be rejected");

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_translateEndpoint_withTransportFailure_shouldReturnBadGateway() {
    let state = state_with(MockModel::failing());

    let (status, body) = translate(
        State(state),
        Json(TranslateRequest {
            text: "Olá.".to_string(),
        }),
    )
    .await
    .expect_err("transport failure must be surfaced");

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(!body.0.detail.is_empty());
}

#[tokio::test]
async fn test_translateEndpoint_withMalformedCompletion_shouldReturnBadGatewayDetail() {
    let state = state_with(MockModel::malformed());

    let (status, body) = translate(
        State(state),
        Json(TranslateRequest {
            text: "Olá.".to_string(),
        }),
    )
    .await
    .expect_err("malformed output must be surfaced");

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body.0.detail.contains("splitter"));
}

/// Test that an empty result list is a success, not an error
#[tokio::test]
async fn test_translateEndpoint_withEmptyResults_shouldReturnSuccess() {
    let state = state_with(MockModel::scripted([split_response(&[])]));

    let response = translate(
        State(state),
        Json(TranslateRequest {
            text: "...".to_string(),
        }),
    )
    .await
    .expect("no results is still a 200");

    assert!(response.0.results.is_empty());
}
