use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Response bodies are plain text, not JSON: the generate endpoint returns
/// either a PDF attachment or a human-readable failure line.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required form field was blank after trimming.
    #[error("All fields are required")]
    Validation,

    /// The completion endpoint failed or returned an unusable response.
    #[error("{0}")]
    Upstream(String),

    /// HTML-to-PDF conversion failed.
    #[error("{0}")]
    Render(String),
}

impl From<LlmError> for AppError {
    fn from(e: LlmError) -> Self {
        AppError::Upstream(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation => {
                (StatusCode::BAD_REQUEST, "All fields are required").into_response()
            }
            AppError::Upstream(detail) => {
                tracing::error!("Upstream error: {detail}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Error generating resume: {detail}"),
                )
                    .into_response()
            }
            AppError::Render(detail) => {
                tracing::error!("Render error: {detail}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Error generating resume: {detail}"),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_is_exact() {
        assert_eq!(AppError::Validation.to_string(), "All fields are required");
    }

    #[test]
    fn test_upstream_detail_passes_through() {
        let e = AppError::Upstream("connection refused".to_string());
        assert_eq!(e.to_string(), "connection refused");
    }

    async fn body_bytes(response: Response) -> Vec<u8> {
        axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec()
    }

    #[tokio::test]
    async fn test_validation_response_is_400_with_exact_body() {
        let response = AppError::Validation.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_bytes(response).await, b"All fields are required");
    }

    #[tokio::test]
    async fn test_upstream_response_is_500_with_exact_body() {
        let response = AppError::Upstream("boom".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_bytes(response).await, b"Error generating resume: boom");
    }

    #[tokio::test]
    async fn test_render_response_is_500_with_exact_body() {
        let response = AppError::Render("bad html".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_bytes(response).await, b"Error generating resume: bad html");
    }
}
