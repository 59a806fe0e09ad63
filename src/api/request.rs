//! Request types for the EMS pricing API.
//!
//! This module defines the JSON request structure for the `/quote`
//! endpoint and its conversion into the core [`QuoteRequest`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{QuoteRequest, WeightUnit};

/// A parcel weight as it arrives on the wire: a JSON number or a numeric
/// string.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WeightInput {
    /// A numeric weight.
    Number(Decimal),
    /// A weight supplied as free text, parsed on conversion.
    Text(String),
}

impl WeightInput {
    /// Interprets the wire value as a decimal, if it is numeric.
    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            WeightInput::Number(value) => Some(*value),
            WeightInput::Text(raw) => raw.trim().parse().ok(),
        }
    }
}

/// Request body for the `POST /quote` endpoint.
///
/// Field names follow the wire contract of the tariff tool this engine
/// serves: camelCase, weight as number or numeric string, unit defaulting
/// to grams.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteApiRequest {
    /// The sender province code.
    pub from_province_code: String,
    /// The receiver province code.
    pub to_province_code: String,
    /// The parcel weight, as a number or a numeric string.
    pub weight: WeightInput,
    /// The unit of `weight`; defaults to grams.
    #[serde(default)]
    pub weight_unit: WeightUnit,
    /// Whether the receiver is in a remote zone; defaults to false.
    #[serde(default)]
    pub is_remote_receiver: bool,
}

impl TryFrom<QuoteApiRequest> for QuoteRequest {
    type Error = EngineError;

    /// Fails with `InvalidWeight` when the weight text is not numeric, so
    /// the wire contract's weight check fires before any province lookup.
    fn try_from(req: QuoteApiRequest) -> Result<Self, Self::Error> {
        let weight = req
            .weight
            .as_decimal()
            .ok_or_else(|| EngineError::InvalidWeight {
                message: "weight is not numeric".to_string(),
            })?;

        Ok(QuoteRequest {
            from_province: req.from_province_code,
            to_province: req.to_province_code,
            weight,
            weight_unit: req.weight_unit,
            remote_receiver: req.is_remote_receiver,
        })
    }
}
