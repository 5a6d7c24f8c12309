//! Mapping from pipeline errors to HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tabulate::TabulateError;

/// JSON body returned for every failed extraction.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub kind: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_response: Option<String>,
}

/// A [`TabulateError`] on its way out of a handler.
#[derive(Debug)]
pub struct ApiError(pub TabulateError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            TabulateError::EmptyInput | TabulateError::Decode { .. } => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            TabulateError::UnsupportedFormat(_) => StatusCode::BAD_REQUEST,
            TabulateError::Provider(_) => StatusCode::BAD_GATEWAY,
            TabulateError::Export(_) | TabulateError::Config(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<TabulateError> for ApiError {
    fn from(err: TabulateError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(kind = self.0.kind(), error = %self.0, "Extraction request failed");
        } else {
            tracing::debug!(kind = self.0.kind(), error = %self.0, "Extraction request rejected");
        }

        let body = ErrorBody {
            kind: self.0.kind(),
            message: self.0.to_string(),
            raw_response: self.0.raw_response().map(str::to_string),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError(TabulateError::EmptyInput).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ApiError(TabulateError::provider("timeout")).status(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            ApiError(TabulateError::UnsupportedFormat("XML".into())).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError(TabulateError::Config("no key".into())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
