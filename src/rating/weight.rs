//! Weight normalization.
//!
//! This module converts a user-supplied `(weight, unit)` pair into an
//! integral gram count and a chargeable whole-kilogram weight. The tariff
//! is priced per integral kilogram, so chargeable weight always rounds
//! up, never down.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{EngineError, EngineResult};
use crate::models::WeightUnit;

/// The maximum chargeable weight covered by the tariff, in kilograms.
/// Heavier shipments must be quoted out-of-band.
pub const MAX_CHARGEABLE_KG: u32 = 500;

/// The weight covered by the flat base tier, in kilograms.
pub const BASE_COVERAGE_KG: u32 = 5;

const GRAMS_PER_KG: i64 = 1000;

/// The result of normalizing a user-supplied weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizedWeight {
    /// The input weight rounded to whole grams.
    pub grams: i64,
    /// The chargeable weight: `ceil(grams / 1000)` kilograms.
    pub chargeable_kg: u32,
}

/// Normalizes a `(weight, unit)` pair to grams and chargeable kilograms.
///
/// Kilogram inputs are scaled by 1000 and rounded half-up to whole grams;
/// gram inputs are rounded half-up directly. The result must be strictly
/// positive, and the chargeable weight must not exceed
/// [`MAX_CHARGEABLE_KG`]. Both checks happen here, before any other
/// processing, in that order.
///
/// # Example
///
/// ```
/// use ems_pricing::models::WeightUnit;
/// use ems_pricing::rating::normalize_weight;
/// use rust_decimal::Decimal;
///
/// let w = normalize_weight(Decimal::from(1001), WeightUnit::Gram).unwrap();
/// assert_eq!(w.grams, 1001);
/// assert_eq!(w.chargeable_kg, 2);
/// ```
pub fn normalize_weight(weight: Decimal, unit: WeightUnit) -> EngineResult<NormalizedWeight> {
    let grams = match unit {
        WeightUnit::Kilogram => weight
            .checked_mul(Decimal::from(GRAMS_PER_KG))
            // Saturate on overflow; the sign decides which check fires below.
            .unwrap_or(if weight.is_sign_negative() {
                Decimal::MIN
            } else {
                Decimal::MAX
            }),
        WeightUnit::Gram => weight,
    }
    .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

    if grams <= Decimal::ZERO {
        return Err(EngineError::InvalidWeight {
            message: "weight must be strictly positive after unit conversion".to_string(),
        });
    }

    let max_grams = Decimal::from(MAX_CHARGEABLE_KG as i64 * GRAMS_PER_KG);
    if grams > max_grams {
        let chargeable_kg = (grams / Decimal::from(GRAMS_PER_KG))
            .ceil()
            .to_u64()
            .unwrap_or(u64::MAX);
        return Err(EngineError::OverMaxWeight {
            chargeable_kg,
            max_kg: MAX_CHARGEABLE_KG,
        });
    }

    let grams = grams.to_i64().ok_or_else(|| EngineError::InvalidWeight {
        message: "weight is not representable in grams".to_string(),
    })?;
    let chargeable_kg = ((grams + GRAMS_PER_KG - 1) / GRAMS_PER_KG) as u32;

    Ok(NormalizedWeight {
        grams,
        chargeable_kg,
    })
}
