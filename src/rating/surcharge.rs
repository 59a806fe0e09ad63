//! Remote-receiver surcharge.

use rust_decimal::{Decimal, RoundingStrategy};

/// The result of applying (or skipping) the remote surcharge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurchargeOutcome {
    /// The grand total after any surcharge.
    pub total: Decimal,
    /// The surcharge amount: `total - base_total`. Zero when the receiver
    /// is central, never negative.
    pub surcharge: Decimal,
}

/// Applies the multiplicative remote surcharge to a band total.
///
/// `total = round(base_total * multiplier)` when the receiver is remote,
/// `base_total` unchanged otherwise. Rounding happens once, after the
/// multiplication.
///
/// # Example
///
/// ```
/// use ems_pricing::rating::apply_remote_surcharge;
/// use rust_decimal::Decimal;
///
/// let outcome = apply_remote_surcharge(
///     Decimal::from(65000),
///     true,
///     Decimal::new(12, 1), // 1.2
/// );
/// assert_eq!(outcome.total, Decimal::from(78000));
/// assert_eq!(outcome.surcharge, Decimal::from(13000));
/// ```
pub fn apply_remote_surcharge(
    base_total: Decimal,
    remote_receiver: bool,
    multiplier: Decimal,
) -> SurchargeOutcome {
    if remote_receiver {
        let total = (base_total * multiplier)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        SurchargeOutcome {
            total,
            surcharge: total - base_total,
        }
    } else {
        SurchargeOutcome {
            total: base_total,
            surcharge: Decimal::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// RS-001: central receiver pays exactly the base total
    #[test]
    fn test_central_receiver_has_zero_surcharge() {
        let outcome = apply_remote_surcharge(dec("102000"), false, dec("1.2"));
        assert_eq!(outcome.total, dec("102000"));
        assert_eq!(outcome.surcharge, Decimal::ZERO);
    }

    /// RS-002: remote receiver pays the multiplied, rounded total
    #[test]
    fn test_remote_receiver_pays_multiplied_total() {
        let outcome = apply_remote_surcharge(dec("135000"), true, dec("1.2"));
        assert_eq!(outcome.total, dec("162000"));
        assert_eq!(outcome.surcharge, dec("27000"));
    }

    /// RS-003: rounding applies once, after the multiplication
    #[test]
    fn test_rounding_applies_after_multiplication() {
        // 73001 * 1.2 = 87601.2 → 87601
        let outcome = apply_remote_surcharge(dec("73001"), true, dec("1.2"));
        assert_eq!(outcome.total, dec("87601"));
        assert_eq!(outcome.surcharge, dec("14600"));
    }

    /// RS-004: a half-unit product rounds up
    #[test]
    fn test_half_unit_product_rounds_up() {
        // 101 * 1.5 = 151.5 → 152
        let outcome = apply_remote_surcharge(dec("101"), true, dec("1.5"));
        assert_eq!(outcome.total, dec("152"));
        assert_eq!(outcome.surcharge, dec("51"));
    }

    /// RS-005: a multiplier of exactly 1 yields zero surcharge even when
    /// the remote flag is set
    #[test]
    fn test_multiplier_of_one_is_neutral() {
        let outcome = apply_remote_surcharge(dec("65000"), true, dec("1"));
        assert_eq!(outcome.total, dec("65000"));
        assert_eq!(outcome.surcharge, Decimal::ZERO);
    }
}
