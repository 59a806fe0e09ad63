//! Quote result models for the EMS pricing engine.
//!
//! This module contains the [`Quote`] type and its associated structures
//! that capture the full output of a rating computation: the itemized
//! breakdown, the surcharge split, and the diagnostic metadata.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::Region;
use crate::rating::RouteType;

/// A single line item in a price breakdown.
///
/// Lines appear in accumulation order: the base tier first, then the
/// incremental bands in ascending weight order.
///
/// # Example
///
/// ```
/// use ems_pricing::models::PriceLine;
/// use rust_decimal::Decimal;
///
/// let line = PriceLine {
///     label: "Base (up to 5 kg)".to_string(),
///     kg: 2,
///     unit_price: Decimal::from(65000),
///     amount: Decimal::from(65000),
/// };
/// assert_eq!(line.kg, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceLine {
    /// Human-readable label for the charge.
    pub label: String,
    /// Kilograms charged on this line.
    pub kg: u32,
    /// The unit price applied.
    pub unit_price: Decimal,
    /// The line amount. For the flat base tier this equals the unit price;
    /// for incremental bands it is `kg * unit_price`.
    pub amount: Decimal,
}

/// Denormalized diagnostic snapshot attached to every successful quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteMeta {
    /// The pricing table revision used.
    pub version: String,
    /// Resolved sender region.
    pub from_region: Region,
    /// Resolved receiver region.
    pub to_region: Region,
    /// The derived route class.
    pub route_type: RouteType,
    /// Chargeable weight in whole kilograms (rounded up).
    pub chargeable_kg: u32,
    /// The input weight normalized to grams.
    pub input_weight_g: i64,
    /// Whether the remote surcharge was applied.
    pub remote_applied: bool,
}

/// A successful EMS price quote.
///
/// All amounts are integral VND; rounding is applied exactly once at each
/// of the two money-affecting stages (band total, surcharged total), never
/// per line item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    /// The band-accumulated price before any surcharge.
    pub base_price: Decimal,
    /// The remote surcharge amount; zero when the receiver is central.
    pub remote_surcharge: Decimal,
    /// The grand total: `base_price + remote_surcharge`.
    pub total: Decimal,
    /// Currency label for all amounts.
    pub currency: String,
    /// Ordered line items, base tier first.
    pub breakdown: Vec<PriceLine>,
    /// Diagnostic metadata.
    pub meta: QuoteMeta,
}
