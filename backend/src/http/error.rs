//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::services::ControlError;

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Invalid request (validation error)
    BadRequest(String),
    /// Control event could not be applied
    Control(ControlError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ApiError::new("BAD_REQUEST", msg))
            }
            AppError::Control(e) => match &e {
                ControlError::UnknownControl(unknown) => (
                    StatusCode::NOT_FOUND,
                    ApiError::new("NOT_FOUND", unknown.to_string()).with_details(
                        "known controls: site-dropdown, payload-slider",
                    ),
                ),
                ControlError::InvalidValue { .. } => (
                    StatusCode::BAD_REQUEST,
                    ApiError::new("BAD_REQUEST", e.to_string()),
                ),
            },
        };

        (status, Json(error)).into_response()
    }
}

impl From<ControlError> for AppError {
    fn from(err: ControlError) -> Self {
        AppError::Control(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ControlId, UnknownControl};

    #[test]
    fn test_unknown_control_maps_to_404() {
        let err = AppError::from(ControlError::from(UnknownControl("knob".to_string())));
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_invalid_value_maps_to_400() {
        let err = AppError::from(ControlError::InvalidValue {
            control: ControlId::PayloadSlider,
            reason: "expected [lower, upper]".to_string(),
        });
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_bad_request_body() {
        let response = AppError::BadRequest("payload_min must be a finite number".to_string())
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_api_error_skips_empty_details() {
        let json = serde_json::to_value(ApiError::new("NOT_FOUND", "missing")).unwrap();
        assert!(json.get("details").is_none());
    }
}
