use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors surfaced by the relay's HTTP endpoints.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RelayError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Upstream(String),

    /// No payment matched the requested order.
    #[error("{0}")]
    NotFound(String),
}

impl RelayError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RelayError::Validation(_) => StatusCode::BAD_REQUEST,
            RelayError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
            // Kept as a server error for compatibility with existing callers.
            RelayError::NotFound(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        tracing::error!(
            error = ?self,
            status = status.as_u16(),
            "Request failed"
        );

        let body = ErrorResponse {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// Failure of a single call to the payment processor.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("processor responded with status {status}")]
    Rejected {
        status: u16,
        message: Option<String>,
        body: String,
    },

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

#[derive(Deserialize)]
struct ProcessorErrorBody {
    message: Option<String>,
}

impl GatewayError {
    pub fn rejected(status: u16, body: String) -> Self {
        let message = serde_json::from_str::<ProcessorErrorBody>(&body)
            .ok()
            .and_then(|parsed| parsed.message)
            .filter(|message| !message.is_empty());

        GatewayError::Rejected {
            status,
            message,
            body,
        }
    }

    /// Message supplied by the processor, if it sent one.
    pub fn upstream_message(&self) -> Option<&str> {
        match self {
            GatewayError::Rejected { message, .. } => message.as_deref(),
            GatewayError::Transport(_) => None,
        }
    }

    pub fn into_relay_error(self, fallback: &str) -> RelayError {
        RelayError::Upstream(
            self.upstream_message()
                .unwrap_or(fallback)
                .to_string(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        assert_eq!(
            RelayError::Validation("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            RelayError::Upstream("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            RelayError::NotFound("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn rejected_extracts_processor_message() {
        let err = GatewayError::rejected(400, r#"{"message":"bad order","errors":{}}"#.into());
        assert_eq!(err.upstream_message(), Some("bad order"));
        assert_eq!(
            err.into_relay_error("fallback"),
            RelayError::Upstream("bad order".into())
        );
    }

    #[test]
    fn rejected_without_message_uses_fallback() {
        for body in ["", "<html>502</html>", r#"{"error":"nope"}"#, r#"{"message":""}"#] {
            let err = GatewayError::rejected(502, body.to_string());
            assert_eq!(err.upstream_message(), None);
            assert_eq!(
                err.into_relay_error("Failed to verify payment"),
                RelayError::Upstream("Failed to verify payment".into())
            );
        }
    }
}
