//! Error types for cg-api

use axum::{
    Json,
    response::{IntoResponse, Response},
};
use http::StatusCode;
use serde::Serialize;
use thiserror::Error;

/// cg-api error type
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error(transparent)]
    Core(#[from] cg_core::Error),
}

/// Error body returned to API callers
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub kind: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        use cg_core::Error as CoreError;

        match self {
            Self::UnknownTool(_) => StatusCode::NOT_FOUND,
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::Core(e) => match e {
                CoreError::UnsupportedSymbol(_)
                | CoreError::NoSupportedSymbols
                | CoreError::ToolExecution(_) => StatusCode::BAD_REQUEST,
                CoreError::PriceNotFound { .. } | CoreError::EmptyUpstreamResult => {
                    StatusCode::NOT_FOUND
                }
                CoreError::UpstreamUnavailable(_) => StatusCode::BAD_GATEWAY,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::UnknownTool(_) => "unknown_tool",
            Self::InvalidRequest(_) => "invalid_request",
            Self::Core(e) => e.kind(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Tool call failed");
        } else {
            tracing::debug!(error = %self, "Tool call rejected");
        }

        let body = ErrorResponse {
            error: self.to_string(),
            kind: self.kind().to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use cg_core::Error as CoreError;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (ApiError::UnknownTool("x".into()), StatusCode::NOT_FOUND),
            (ApiError::InvalidRequest("x".into()), StatusCode::BAD_REQUEST),
            (CoreError::UnsupportedSymbol("XYZ".into()).into(), StatusCode::BAD_REQUEST),
            (CoreError::NoSupportedSymbols.into(), StatusCode::BAD_REQUEST),
            (
                CoreError::PriceNotFound {
                    symbol: "BTC".into(),
                    currency: "usd".into(),
                }
                .into(),
                StatusCode::NOT_FOUND,
            ),
            (CoreError::EmptyUpstreamResult.into(), StatusCode::NOT_FOUND),
            (
                CoreError::UpstreamUnavailable("HTTP error: 500".into()).into(),
                StatusCode::BAD_GATEWAY,
            ),
            (CoreError::Config("bad".into()).into(), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (error, expected) in cases {
            assert_eq!(error.status(), expected, "{error}");
        }
    }

    #[test]
    fn test_kind() {
        assert_eq!(ApiError::UnknownTool("x".into()).kind(), "unknown_tool");
        assert_eq!(
            ApiError::from(CoreError::NoSupportedSymbols).kind(),
            "no_supported_symbols"
        );
    }
}
