//! Tiered band accumulation.
//!
//! Given a chargeable weight and a resolved route type, this module walks
//! the pricing table and produces an itemized, monotonically increasing
//! total: the flat base tier first, then each incremental band in
//! ascending weight order.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::{BandMode, BASE_TIER, PricingTable, WeightBand};
use crate::error::{EngineError, EngineResult};
use crate::models::PriceLine;
use crate::rating::RouteType;
use crate::rating::weight::BASE_COVERAGE_KG;

/// The outcome of accumulating the pricing bands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BandAccumulation {
    /// The accumulated price, rounded to whole currency units once.
    pub total: Decimal,
    /// The line items, in accumulation order.
    pub lines: Vec<PriceLine>,
}

/// Accumulates the price for `chargeable_kg` kilograms on a route.
///
/// The base tier is a flat price that already covers up to
/// [`BASE_COVERAGE_KG`] kg; it is charged in full regardless of whether
/// the shipment weighs 1 kg or 5 kg, and its line item reports
/// `min(chargeable_kg, 5)` kg. Weight beyond the base allowance consumes
/// the incremental bands in ascending order; bands that contribute no
/// weight emit no line item, and iteration stops as soon as the remaining
/// weight reaches zero.
///
/// A missing unit price at the base tier or at any traversed band tier
/// aborts the whole computation with `RateNotFound`; a partial total is
/// never produced.
///
/// If the band table does not cover weight all the way to the tariff
/// ceiling, weight beyond the last band is left unpriced. That gap is a
/// property of the reference data and is preserved as-is.
///
/// The total is rounded to the nearest whole currency unit (half-up)
/// exactly once, at the end; line amounts are never rounded individually.
pub fn accumulate_bands(
    chargeable_kg: u32,
    route_type: RouteType,
    tariff: &PricingTable,
) -> EngineResult<BandAccumulation> {
    let base_price =
        tariff
            .rate(BASE_TIER, route_type)
            .ok_or_else(|| EngineError::RateNotFound {
                tier: BASE_TIER.to_string(),
                route_type,
            })?;

    let mut total = base_price;
    let mut lines = vec![PriceLine {
        label: format!("Base (up to {} kg)", BASE_COVERAGE_KG),
        kg: chargeable_kg.min(BASE_COVERAGE_KG),
        unit_price: base_price,
        amount: base_price,
    }];

    let mut remaining = chargeable_kg.saturating_sub(BASE_COVERAGE_KG);

    for band in &tariff.bands {
        if remaining == 0 {
            break;
        }
        if band.mode != BandMode::Increment {
            continue;
        }

        let consumed = remaining.min(band.span_kg());
        if consumed == 0 {
            continue;
        }

        let unit_price =
            tariff
                .rate(&band.tier, route_type)
                .ok_or_else(|| EngineError::RateNotFound {
                    tier: band.tier.clone(),
                    route_type,
                })?;

        let amount = Decimal::from(consumed) * unit_price;
        total += amount;
        lines.push(PriceLine {
            label: band_label(band),
            kg: consumed,
            unit_price,
            amount,
        });

        remaining -= consumed;
    }

    Ok(BandAccumulation {
        total: total.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero),
        lines,
    })
}

fn band_label(band: &WeightBand) -> String {
    format!("Increment {}-{} kg", band.from_kg, band.to_kg)
}
