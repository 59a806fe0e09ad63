//! Response types for the EMS pricing API.
//!
//! This module defines the success envelope for quotes, the province
//! listing entry, and the error response structures for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::Region;
use crate::error::EngineError;
use crate::models::Quote;

/// Success envelope for the `/quote` endpoint.
///
/// The id, timestamp, and engine version are stamped here, at the API
/// layer, so the core quote computation stays deterministic.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    /// Unique identifier for this quote.
    pub quote_id: Uuid,
    /// When the quote was produced.
    pub quoted_at: DateTime<Utc>,
    /// The version of the engine that produced the quote.
    pub engine_version: String,
    /// The quote itself, flattened into the envelope.
    #[serde(flatten)]
    pub quote: Quote,
}

impl QuoteResponse {
    /// Wraps a core quote in a freshly stamped envelope.
    pub fn new(quote: Quote) -> Self {
        Self {
            quote_id: Uuid::new_v4(),
            quoted_at: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            quote,
        }
    }
}

/// A province entry in the `/provinces` listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProvinceEntry {
    /// The stable province code.
    pub code: String,
    /// The display name.
    pub name: String,
    /// The macro-region identifier.
    pub region: Region,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let code = error.code();
        match &error {
            EngineError::ConfigNotFound { .. }
            | EngineError::ConfigParseError { .. }
            | EngineError::ConfigInvalid { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(code, "Configuration error", error.to_string()),
            },
            EngineError::InvalidWeight { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    code,
                    error.to_string(),
                    "Weight must be a strictly positive number of grams or kilograms",
                ),
            },
            EngineError::ProvinceNotFound { code: province } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    code,
                    error.to_string(),
                    format!("The province code '{}' is not in the registry", province),
                ),
            },
            EngineError::OverMaxWeight { max_kg, .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    code,
                    error.to_string(),
                    format!(
                        "Shipments above {} kg are quoted case-by-case; contact the counter",
                        max_kg
                    ),
                ),
            },
            EngineError::RateNotFound { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    code,
                    error.to_string(),
                    "The pricing table has no rate for this route; the reference data is incomplete",
                ),
            },
        }
    }
}
