//! HTTP API module for the EMS pricing engine.
//!
//! This module provides the REST endpoints for producing price quotes
//! and listing the province registry.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{QuoteApiRequest, WeightInput};
pub use response::{ApiError, ProvinceEntry, QuoteResponse};
pub use state::AppState;
