//! HTTP request handlers for the EMS pricing API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Query, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use serde::Deserialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::QuoteRequest;
use crate::rating::quote;

use super::request::QuoteApiRequest;
use super::response::{ApiError, ApiErrorResponse, ProvinceEntry, QuoteResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/quote", post(quote_handler))
        .route("/provinces", get(provinces_handler))
        .with_state(state)
}

/// Handler for the POST /quote endpoint.
///
/// Accepts a quote request and returns the itemized price quote.
async fn quote_handler(
    State(state): State<AppState>,
    payload: Result<Json<QuoteApiRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing quote request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    // Convert the wire request to the core request; a non-numeric weight
    // fails here, before any province lookup.
    let core_request: QuoteRequest = match request.try_into() {
        Ok(req) => req,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Rejected quote request");
            let api_error: ApiErrorResponse = err.into();
            return (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response();
        }
    };

    let config = state.config();
    let start_time = Instant::now();
    match quote(&core_request, config.registry(), config.tariff()) {
        Ok(result) => {
            let duration = start_time.elapsed();
            info!(
                correlation_id = %correlation_id,
                route_type = %result.meta.route_type,
                chargeable_kg = result.meta.chargeable_kg,
                total = %result.total,
                duration_us = duration.as_micros(),
                "Quote produced"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(QuoteResponse::new(result)),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                code = err.code(),
                error = %err,
                "Quote failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Query parameters for the GET /provinces endpoint.
#[derive(Debug, Deserialize)]
struct ProvinceQuery {
    /// Optional diacritic-insensitive search term.
    q: Option<String>,
}

/// Handler for the GET /provinces endpoint.
///
/// Lists provinces for picker UIs, optionally filtered by a
/// diacritic-insensitive search term matching name, code, or region.
async fn provinces_handler(
    State(state): State<AppState>,
    Query(params): Query<ProvinceQuery>,
) -> impl IntoResponse {
    let registry = state.config().registry();
    let entries: Vec<ProvinceEntry> = registry
        .search(params.q.as_deref().unwrap_or(""))
        .into_iter()
        .map(|(code, province)| ProvinceEntry {
            code: code.to_string(),
            name: province.name.clone(),
            region: province.region,
        })
        .collect();

    (StatusCode::OK, Json(entries)).into_response()
}
