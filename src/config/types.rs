//! Reference-data types for the EMS pricing engine.
//!
//! This module contains the strongly-typed structures deserialized from
//! the YAML reference-data files: the province registry and the pricing
//! table.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::rating::RouteType;

/// The tier identifier of the flat base price covering up to 5 kg.
pub const BASE_TIER: &str = "BASE_UPTO_5KG";

/// The three macro-regions of the domestic EMS tariff.
///
/// R1 covers the north, R3 the centre, R2 the south. The ordering of the
/// variants is used to canonicalize unordered region pairs.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Region {
    /// Northern macro-region.
    R1,
    /// Southern macro-region.
    R2,
    /// Central macro-region.
    R3,
}

impl Region {
    /// Returns the stable region identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::R1 => "R1",
            Region::R2 => "R2",
            Region::R3 => "R3",
        }
    }
}

/// A province as recorded in the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Province {
    /// The display name of the province.
    pub name: String,
    /// The macro-region the province belongs to.
    pub region: Region,
}

/// The immutable province registry, keyed by stable province code.
///
/// Loaded once from `provinces.yaml` and treated as read-only for the
/// lifetime of the process.
///
/// # Example
///
/// ```
/// use ems_pricing::config::ProvinceRegistry;
///
/// let yaml = r#"
/// HAN: { name: "Hà Nội", region: R1 }
/// HCM: { name: "TP. Hồ Chí Minh", region: R2 }
/// "#;
/// let registry: ProvinceRegistry = serde_yaml::from_str(yaml).unwrap();
/// assert_eq!(registry.len(), 2);
/// assert!(registry.get("HAN").is_some());
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct ProvinceRegistry {
    provinces: HashMap<String, Province>,
}

impl ProvinceRegistry {
    /// Creates a registry from a code → province map.
    pub fn new(provinces: HashMap<String, Province>) -> Self {
        Self { provinces }
    }

    /// Looks up a province by code.
    pub fn get(&self, code: &str) -> Option<&Province> {
        self.provinces.get(code)
    }

    /// Looks up a province by code, failing with `ProvinceNotFound`.
    pub fn resolve(&self, code: &str) -> crate::error::EngineResult<&Province> {
        self.provinces
            .get(code)
            .ok_or_else(|| crate::error::EngineError::ProvinceNotFound {
                code: code.to_string(),
            })
    }

    /// Returns the number of provinces in the registry.
    pub fn len(&self) -> usize {
        self.provinces.len()
    }

    /// Returns `true` if the registry contains no provinces.
    pub fn is_empty(&self) -> bool {
        self.provinces.is_empty()
    }

    /// Iterates over `(code, province)` entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Province)> {
        self.provinces.iter().map(|(c, p)| (c.as_str(), p))
    }

    /// Searches the registry with diacritic-insensitive substring matching.
    ///
    /// The query and the haystack (name, code, and region of each entry)
    /// are NFD-decomposed and stripped of combining marks before the
    /// comparison, so "ha noi" matches "Hà Nội". Base letters such as 'đ'
    /// are not folded; they are matched verbatim or via the province code.
    /// An empty query returns the whole registry. Results are sorted by
    /// province name.
    pub fn search(&self, query: &str) -> Vec<(&str, &Province)> {
        let needle = fold_diacritics(query.trim());
        let mut matches: Vec<(&str, &Province)> = self
            .provinces
            .iter()
            .filter(|(code, province)| {
                if needle.is_empty() {
                    return true;
                }
                let haystack = fold_diacritics(&format!(
                    "{} {} {}",
                    province.name,
                    code,
                    province.region.as_str()
                ));
                haystack.contains(&needle)
            })
            .map(|(c, p)| (c.as_str(), p))
            .collect();
        matches.sort_by(|a, b| a.1.name.cmp(&b.1.name).then(a.0.cmp(b.0)));
        matches
    }
}

/// Strips combining marks after NFD decomposition and lowercases.
fn fold_diacritics(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// The charging mode of a weight band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BandMode {
    /// Per-kilogram incremental charge on the weight consumed from the band.
    Increment,
}

/// A weight band beyond the base allowance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightBand {
    /// The tier identifier keying into the rate table.
    pub tier: String,
    /// Lower bound of the band in kilograms (exclusive of the band below).
    pub from_kg: u32,
    /// Upper bound of the band in kilograms (inclusive).
    pub to_kg: u32,
    /// The charging mode of the band.
    pub mode: BandMode,
}

impl WeightBand {
    /// Returns the width of the band in kilograms.
    pub fn span_kg(&self) -> u32 {
        self.to_kg.saturating_sub(self.from_kg)
    }
}

/// The active EMS pricing table.
///
/// Immutable for the lifetime of the process; owned by the config layer
/// and passed into the rating engine by reference.
#[derive(Debug, Clone, Deserialize)]
pub struct PricingTable {
    /// Label identifying which tariff revision is active.
    pub version: String,
    /// Currency code for all amounts in the table.
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Multiplier applied to the base total for remote receivers.
    #[serde(default = "default_remote_multiplier")]
    pub remote_multiplier: Decimal,
    /// Tier identifier → route type → unit price.
    pub rates: HashMap<String, HashMap<RouteType, Decimal>>,
    /// Weight bands beyond the base allowance, ascending.
    pub bands: Vec<WeightBand>,
}

fn default_currency() -> String {
    "VND".to_string()
}

fn default_remote_multiplier() -> Decimal {
    // 1.2, i.e. +20% for remote receivers.
    Decimal::new(12, 1)
}

impl PricingTable {
    /// Looks up the unit price for a tier on a route type.
    pub fn rate(&self, tier: &str, route_type: RouteType) -> Option<Decimal> {
        self.rates.get(tier).and_then(|by_route| by_route.get(&route_type)).copied()
    }

    /// Validates the semantic invariants of the table.
    ///
    /// Checked at load time:
    /// - `remote_multiplier` ≥ 1
    /// - every rate is non-negative
    /// - every band has `to_kg > from_kg` and mode `INCREMENT`
    /// - bands are contiguous and non-overlapping in ascending order,
    ///   starting at the base coverage boundary
    ///
    /// Missing rates for a tier/route combination are not a load error;
    /// they surface as `NO_RATE` at rating time.
    pub fn validate(&self, base_coverage_kg: u32) -> Result<(), String> {
        if self.remote_multiplier < Decimal::ONE {
            return Err(format!(
                "remote_multiplier must be >= 1, got {}",
                self.remote_multiplier
            ));
        }

        for (tier, by_route) in &self.rates {
            for (route_type, price) in by_route {
                if price.is_sign_negative() {
                    return Err(format!(
                        "negative rate {} for tier '{}' on route {}",
                        price, tier, route_type
                    ));
                }
            }
        }

        let mut expected_from = base_coverage_kg;
        for band in &self.bands {
            if band.to_kg <= band.from_kg {
                return Err(format!(
                    "band '{}' has to_kg {} <= from_kg {}",
                    band.tier, band.to_kg, band.from_kg
                ));
            }
            if band.from_kg != expected_from {
                return Err(format!(
                    "band '{}' starts at {} kg, expected {} kg (bands must be contiguous)",
                    band.tier, band.from_kg, expected_from
                ));
            }
            expected_from = band.to_kg;
        }

        Ok(())
    }
}
