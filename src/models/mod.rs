//! Core data models for the EMS pricing engine.
//!
//! This module contains the request and result types consumed and
//! produced by the rating engine.

mod quote;
mod quote_request;

pub use quote::{PriceLine, Quote, QuoteMeta};
pub use quote_request::{QuoteRequest, WeightUnit};
