/*!
 * Tests for the error types
 */

use trivox::errors::{AppError, PipelineError, ProviderError};

#[test]
fn test_providerError_display_shouldFormatCorrectly() {
    let err = ProviderError::ApiError {
        status_code: 429,
        message: "rate limited".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "API responded with error: 429 - rate limited"
    );

    let err = ProviderError::RequestFailed("connection refused".to_string());
    assert!(err.to_string().contains("connection refused"));
}

/// Test that transport failures and decode failures stay distinguishable
#[test]
fn test_pipelineError_isMalformed_shouldSeparateTransportFromDecode() {
    let transport: PipelineError =
        ProviderError::RequestFailed("timeout".to_string()).into();
    assert!(!transport.is_malformed());
    assert!(transport.to_string().starts_with("Provider error"));

    let malformed = PipelineError::Malformed("splitter: expected value".to_string());
    assert!(malformed.is_malformed());
    assert!(malformed.to_string().contains("splitter"));
}

#[test]
fn test_appError_fromOtherErrors_shouldWrapCorrectly() {
    let err: AppError = ProviderError::AuthenticationError("bad key".to_string()).into();
    assert!(matches!(err, AppError::Provider(_)));

    let err: AppError = PipelineError::Malformed("nope".to_string()).into();
    assert!(matches!(err, AppError::Pipeline(_)));

    let err: AppError = std::io::Error::new(std::io::ErrorKind::Other, "disk gone").into();
    assert!(matches!(err, AppError::Io(_)));

    let err: AppError = anyhow::anyhow!("something else").into();
    assert!(matches!(err, AppError::Unknown(_)));
}
