//! Quote orchestration.
//!
//! Sequences weight normalization, province resolution, route
//! classification, band accumulation, and the remote surcharge into a
//! single pure function, and assembles the final [`Quote`].

use crate::config::{PricingTable, ProvinceRegistry};
use crate::error::EngineResult;
use crate::models::{Quote, QuoteMeta, QuoteRequest};
use crate::rating::bands::accumulate_bands;
use crate::rating::route::classify_route;
use crate::rating::surcharge::apply_remote_surcharge;
use crate::rating::weight::normalize_weight;

/// Produces a price quote for a request against the given reference data.
///
/// Pure and deterministic: no side effects, no I/O, identical inputs
/// always yield an identical result. May be invoked concurrently from
/// multiple threads as long as the reference data is treated as
/// read-only.
///
/// Failure precedence, each check short-circuiting the rest:
/// 1. `InvalidWeight`: weight normalization fails
/// 2. `OverMaxWeight`: chargeable weight above the tariff ceiling
/// 3. `ProvinceNotFound`: sender, then receiver, absent from the registry
/// 4. `RateNotFound`: missing tariff data during band accumulation
///
/// Route classification sits between 3 and 4 but cannot fail.
///
/// # Example
///
/// ```no_run
/// use ems_pricing::config::ConfigLoader;
/// use ems_pricing::models::{QuoteRequest, WeightUnit};
/// use ems_pricing::rating::quote;
/// use rust_decimal::Decimal;
///
/// let config = ConfigLoader::load("./config/ems_v4").unwrap();
/// let request = QuoteRequest {
///     from_province: "HAN".to_string(),
///     to_province: "HCM".to_string(),
///     weight: Decimal::from(2000),
///     weight_unit: WeightUnit::Gram,
///     remote_receiver: false,
/// };
/// let quote = quote(&request, config.registry(), config.tariff()).unwrap();
/// println!("total: {} {}", quote.total, quote.currency);
/// ```
pub fn quote(
    request: &QuoteRequest,
    registry: &ProvinceRegistry,
    tariff: &PricingTable,
) -> EngineResult<Quote> {
    let weight = normalize_weight(request.weight, request.weight_unit)?;

    let from = registry.resolve(&request.from_province)?;
    let to = registry.resolve(&request.to_province)?;

    let route_type = classify_route(
        &request.from_province,
        &request.to_province,
        from.region,
        to.region,
    );

    let accumulation = accumulate_bands(weight.chargeable_kg, route_type, tariff)?;
    let outcome = apply_remote_surcharge(
        accumulation.total,
        request.remote_receiver,
        tariff.remote_multiplier,
    );

    Ok(Quote {
        base_price: accumulation.total,
        remote_surcharge: outcome.surcharge,
        total: outcome.total,
        currency: tariff.currency.clone(),
        breakdown: accumulation.lines,
        meta: QuoteMeta {
            version: tariff.version.clone(),
            from_region: from.region,
            to_region: to.region,
            route_type,
            chargeable_kg: weight.chargeable_kg,
            input_weight_g: weight.grams,
            remote_applied: request.remote_receiver,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Region;
    use crate::error::EngineError;
    use crate::models::WeightUnit;
    use crate::rating::RouteType;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn test_registry() -> ProvinceRegistry {
        serde_yaml::from_str(
            r#"
HAN: { name: "Hà Nội", region: R1 }
HPG: { name: "Hải Phòng", region: R1 }
DNG: { name: "Đà Nẵng", region: R3 }
HCM: { name: "TP. Hồ Chí Minh", region: R2 }
"#,
        )
        .unwrap()
    }

    fn test_tariff() -> PricingTable {
        serde_yaml::from_str(
            r#"
version: EMS-TEST
currency: VND
remote_multiplier: "1.2"
rates:
  BASE_UPTO_5KG:
    INTRA_PROVINCE: "65000"
    INTRA_REGION: "90000"
    ADJACENT_REGION: "110000"
    FAR_REGION: "135000"
  RATE_5_30:
    INTRA_PROVINCE: "4000"
    INTRA_REGION: "6000"
    ADJACENT_REGION: "8000"
    FAR_REGION: "10000"
bands:
  - { tier: RATE_5_30, from_kg: 5, to_kg: 30, mode: INCREMENT }
"#,
        )
        .unwrap()
    }

    fn request(from: &str, to: &str, weight: &str, unit: WeightUnit, remote: bool) -> QuoteRequest {
        QuoteRequest {
            from_province: from.to_string(),
            to_province: to.to_string(),
            weight: dec(weight),
            weight_unit: unit,
            remote_receiver: remote,
        }
    }

    /// QO-001: intra-province shipment within the base allowance
    #[test]
    fn test_intra_province_within_allowance() {
        let req = request("HAN", "HAN", "2000", WeightUnit::Gram, false);
        let q = quote(&req, &test_registry(), &test_tariff()).unwrap();

        assert_eq!(q.meta.route_type, RouteType::IntraProvince);
        assert_eq!(q.meta.chargeable_kg, 2);
        assert_eq!(q.meta.input_weight_g, 2000);
        assert_eq!(q.base_price, dec("65000"));
        assert_eq!(q.remote_surcharge, Decimal::ZERO);
        assert_eq!(q.total, dec("65000"));
        assert_eq!(q.breakdown.len(), 1);
        assert_eq!(q.currency, "VND");
        assert_eq!(q.meta.version, "EMS-TEST");
    }

    /// QO-002: intra-region shipment crossing into the first band
    #[test]
    fn test_intra_region_with_band_consumption() {
        let req = request("HAN", "HPG", "7000", WeightUnit::Gram, false);
        let q = quote(&req, &test_registry(), &test_tariff()).unwrap();

        assert_eq!(q.meta.route_type, RouteType::IntraRegion);
        assert_eq!(q.meta.chargeable_kg, 7);
        // 90000 base + 2 kg * 6000
        assert_eq!(q.total, dec("102000"));
        assert_eq!(q.breakdown.len(), 2);
    }

    /// QO-003: remote receiver multiplies the band total
    #[test]
    fn test_remote_receiver_surcharge() {
        let req = request("HAN", "DNG", "3", WeightUnit::Kilogram, true);
        let q = quote(&req, &test_registry(), &test_tariff()).unwrap();

        assert_eq!(q.meta.route_type, RouteType::AdjacentRegion);
        assert!(q.meta.remote_applied);
        assert_eq!(q.base_price, dec("110000"));
        assert_eq!(q.total, dec("132000"));
        assert_eq!(q.remote_surcharge, dec("22000"));
    }

    /// QO-004: unknown sender fails before anything route-related
    #[test]
    fn test_unknown_sender_fails() {
        let req = request("XXX", "HAN", "1000", WeightUnit::Gram, false);
        let err = quote(&req, &test_registry(), &test_tariff()).unwrap_err();
        match err {
            EngineError::ProvinceNotFound { code } => assert_eq!(code, "XXX"),
            other => panic!("Expected ProvinceNotFound, got {:?}", other),
        }
    }

    /// QO-005: unknown receiver fails identically
    #[test]
    fn test_unknown_receiver_fails() {
        let req = request("HAN", "YYY", "1000", WeightUnit::Gram, false);
        let err = quote(&req, &test_registry(), &test_tariff()).unwrap_err();
        assert_eq!(err.code(), "INVALID_PROVINCE");
    }

    /// QO-006: invalid weight wins over invalid province
    #[test]
    fn test_invalid_weight_precedes_invalid_province() {
        let req = request("XXX", "YYY", "-5", WeightUnit::Gram, false);
        let err = quote(&req, &test_registry(), &test_tariff()).unwrap_err();
        assert_eq!(err.code(), "INVALID_WEIGHT");
    }

    /// QO-007: over-ceiling weight wins over invalid province
    #[test]
    fn test_over_ceiling_precedes_invalid_province() {
        let req = request("XXX", "YYY", "600", WeightUnit::Kilogram, false);
        let err = quote(&req, &test_registry(), &test_tariff()).unwrap_err();
        assert_eq!(err.code(), "OVER_500KG");
    }

    /// QO-008: missing rate for the resolved route surfaces as NO_RATE
    #[test]
    fn test_missing_rate_surfaces_no_rate() {
        let mut tariff = test_tariff();
        tariff
            .rates
            .get_mut("BASE_UPTO_5KG")
            .unwrap()
            .remove(&RouteType::FarRegion);

        let req = request("HAN", "HCM", "1000", WeightUnit::Gram, false);
        let err = quote(&req, &test_registry(), &tariff).unwrap_err();
        assert_eq!(err.code(), "NO_RATE");
    }

    /// QO-009: meta reflects the resolved regions
    #[test]
    fn test_meta_snapshot() {
        let req = request("DNG", "HCM", "1", WeightUnit::Kilogram, false);
        let q = quote(&req, &test_registry(), &test_tariff()).unwrap();

        assert_eq!(q.meta.from_region, Region::R3);
        assert_eq!(q.meta.to_region, Region::R2);
        assert_eq!(q.meta.route_type, RouteType::AdjacentRegion);
        assert!(!q.meta.remote_applied);
    }

    /// QO-010: identical inputs yield identical results
    #[test]
    fn test_quote_is_deterministic() {
        let registry = test_registry();
        let tariff = test_tariff();
        let req = request("HAN", "HCM", "12345", WeightUnit::Gram, true);

        let a = quote(&req, &registry, &tariff).unwrap();
        let b = quote(&req, &registry, &tariff).unwrap();
        assert_eq!(a, b);
    }
}
