//! Error handling for the application

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::pricing::models::ListingError;
use crate::pricing::responses::PricingErrorResponse;
use crate::pricing::QuoteError;

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Product not found")]
    NotFound,

    #[error("No price suggestion available")]
    NoSuggestion,

    #[error(transparent)]
    Quote(#[from] QuoteError),

    #[error(transparent)]
    Listing(#[from] ListingError),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Map an extractor rejection onto the JSON error taxonomy
    fn from_rejection(status: StatusCode, body_text: String) -> Self {
        if status.is_server_error() {
            AppError::Internal(body_text)
        } else {
            AppError::BadRequest(body_text)
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::from_rejection(rejection.status(), rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        Self::from_rejection(rejection.status(), rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        Self::from_rejection(rejection.status(), rejection.body_text())
    }
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound | AppError::NoSuggestion => StatusCode::NOT_FOUND,
            AppError::Quote(QuoteError::AvailabilityConflict { .. }) => StatusCode::CONFLICT,
            AppError::Quote(QuoteError::InvalidRate(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Quote(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Listing(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_type(&self) -> &'static str {
        match self {
            AppError::NotFound => "not_found",
            AppError::NoSuggestion => "no_suggestion",
            AppError::Quote(QuoteError::InvalidRange { .. }) => "invalid_range",
            AppError::Quote(QuoteError::OutOfRange { .. }) => "out_of_range",
            AppError::Quote(QuoteError::AvailabilityConflict { .. }) => "availability_conflict",
            AppError::Quote(QuoteError::AmountOverflow) => "amount_overflow",
            AppError::Quote(QuoteError::InvalidRate(_)) => "invalid_rate",
            AppError::Listing(_) => "invalid_listing",
            AppError::BadRequest(_) => "bad_request",
            AppError::Internal(_) => "internal",
        }
    }

    /// Structured data the UI needs to explain the failure
    fn details(&self) -> Option<serde_json::Value> {
        match self {
            AppError::Quote(QuoteError::AvailabilityConflict { dates }) => {
                Some(json!({ "conflicting_dates": dates }))
            }
            AppError::Quote(QuoteError::OutOfRange { window, .. }) => Some(json!({
                "window_start": window.map(|(first, _)| first),
                "window_end": window.map(|(_, last)| last),
            })),
            _ => None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = if status.is_server_error() {
            tracing::error!("{}", self);
            "Internal error".to_string()
        } else {
            tracing::debug!("Request rejected ({}): {}", status.as_u16(), self);
            self.to_string()
        };

        let body = PricingErrorResponse {
            error_type: self.error_type().to_string(),
            message,
            details: self.details(),
        };

        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::collections::BTreeSet;

    #[test]
    fn test_status_codes() {
        let day = NaiveDate::from_ymd_opt(2024, 12, 17).unwrap();

        assert_eq!(AppError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::from(QuoteError::AvailabilityConflict {
                dates: BTreeSet::from([day]),
            })
            .status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::from(QuoteError::InvalidRange {
                start_date: day,
                end_date: day,
            })
            .status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AppError::from(ListingError::NonPositivePrice).status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_conflict_details_carry_dates() {
        let day = NaiveDate::from_ymd_opt(2024, 12, 17).unwrap();
        let err = AppError::from(QuoteError::AvailabilityConflict {
            dates: BTreeSet::from([day]),
        });
        assert_eq!(
            err.details(),
            Some(json!({ "conflicting_dates": ["2024-12-17"] }))
        );
    }

    #[test]
    fn test_bad_request_and_internal_status() {
        assert_eq!(
            AppError::BadRequest("expected u64".to_string()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Internal("lock lost".to_string()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::from(QuoteError::InvalidRate(rust_decimal_macros::dec!(-0.05))).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_rejection_mapping_by_status() {
        assert!(matches!(
            AppError::from_rejection(StatusCode::UNPROCESSABLE_ENTITY, "bad".to_string()),
            AppError::BadRequest(_)
        ));
        assert!(matches!(
            AppError::from_rejection(StatusCode::INTERNAL_SERVER_ERROR, "boom".to_string()),
            AppError::Internal(_)
        ));
    }

    #[tokio::test]
    async fn test_internal_error_hides_details() {
        let response = AppError::Internal("catalog lock poisoned".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error_type"], "internal");
        assert_eq!(body["message"], "Internal error");
    }

    #[test]
    fn test_into_response_uses_status() {
        let response = AppError::NoSuggestion.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
