//! Quote request model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The unit of a user-supplied parcel weight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeightUnit {
    /// Grams. The default unit.
    #[default]
    #[serde(rename = "g")]
    Gram,
    /// Kilograms.
    #[serde(rename = "kg")]
    Kilogram,
}

/// A request for an EMS price quote.
///
/// Constructed fresh per user action, never mutated, and discarded after
/// the engine consumes it.
///
/// # Example
///
/// ```
/// use ems_pricing::models::{QuoteRequest, WeightUnit};
/// use rust_decimal::Decimal;
///
/// let request = QuoteRequest {
///     from_province: "HAN".to_string(),
///     to_province: "HCM".to_string(),
///     weight: Decimal::from(2000),
///     weight_unit: WeightUnit::Gram,
///     remote_receiver: false,
/// };
/// assert_eq!(request.weight_unit, WeightUnit::Gram);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRequest {
    /// The sender province code.
    pub from_province: String,
    /// The receiver province code.
    pub to_province: String,
    /// The parcel weight magnitude, interpreted per `weight_unit`.
    pub weight: Decimal,
    /// The unit of `weight`.
    #[serde(default)]
    pub weight_unit: WeightUnit,
    /// Whether the receiver is in a remote zone.
    #[serde(default)]
    pub remote_receiver: bool,
}
