//! Route classification.
//!
//! This module maps a (sender, receiver) province pair to exactly one
//! [`RouteType`], which selects the rate column used by the band
//! accumulator.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::Region;

/// The four mutually exclusive route classes of the domestic EMS tariff.
///
/// Derived from the two provinces' codes and regions; never stored in
/// reference data.
///
/// # Example
///
/// ```
/// use ems_pricing::rating::RouteType;
///
/// assert_eq!(RouteType::FarRegion.to_string(), "FAR_REGION");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RouteType {
    /// Same province on both ends.
    IntraProvince,
    /// Different provinces within the same macro-region.
    IntraRegion,
    /// Provinces in neighbouring macro-regions.
    AdjacentRegion,
    /// Provinces in the two geographically farthest macro-regions.
    FarRegion,
}

impl RouteType {
    /// Returns the stable wire identifier for this route type.
    pub fn as_str(&self) -> &'static str {
        match self {
            RouteType::IntraProvince => "INTRA_PROVINCE",
            RouteType::IntraRegion => "INTRA_REGION",
            RouteType::AdjacentRegion => "ADJACENT_REGION",
            RouteType::FarRegion => "FAR_REGION",
        }
    }
}

impl fmt::Display for RouteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The unordered pair of macro-regions priced as "far".
///
/// The three-region partition places R1 in the north and R2 in the south;
/// crossing between them skips the central region entirely. Isolated here
/// as a named constant so the partition can later be externalized without
/// touching the accumulator.
pub const FAR_REGION_PAIR: (Region, Region) = (Region::R1, Region::R2);

/// Classifies the route between two known provinces.
///
/// Priority order:
/// 1. Identical province codes → [`RouteType::IntraProvince`]
/// 2. Equal regions → [`RouteType::IntraRegion`]
/// 3. The unordered region pair equals [`FAR_REGION_PAIR`] →
///    [`RouteType::FarRegion`]; every other distinct pair →
///    [`RouteType::AdjacentRegion`]
///
/// Total over valid region identifiers; never fails once both provinces
/// are known to exist in the registry.
///
/// # Example
///
/// ```
/// use ems_pricing::config::Region;
/// use ems_pricing::rating::{classify_route, RouteType};
///
/// let route = classify_route("HAN", "HCM", Region::R1, Region::R2);
/// assert_eq!(route, RouteType::FarRegion);
/// ```
pub fn classify_route(
    from_code: &str,
    to_code: &str,
    from_region: Region,
    to_region: Region,
) -> RouteType {
    if from_code == to_code {
        return RouteType::IntraProvince;
    }
    if from_region == to_region {
        return RouteType::IntraRegion;
    }

    let pair = if from_region <= to_region {
        (from_region, to_region)
    } else {
        (to_region, from_region)
    };
    if pair == FAR_REGION_PAIR {
        RouteType::FarRegion
    } else {
        RouteType::AdjacentRegion
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// RC-001: same code wins over everything else
    #[test]
    fn test_same_province_code_is_intra_province() {
        let route = classify_route("HAN", "HAN", Region::R1, Region::R1);
        assert_eq!(route, RouteType::IntraProvince);
    }

    /// RC-002: same region, different provinces
    #[test]
    fn test_same_region_is_intra_region() {
        let route = classify_route("HAN", "HPG", Region::R1, Region::R1);
        assert_eq!(route, RouteType::IntraRegion);
    }

    /// RC-003: north-south pair is far
    #[test]
    fn test_north_to_south_is_far_region() {
        let route = classify_route("HAN", "HCM", Region::R1, Region::R2);
        assert_eq!(route, RouteType::FarRegion);
    }

    /// RC-004: far classification is direction-independent
    #[test]
    fn test_south_to_north_is_far_region() {
        let route = classify_route("HCM", "HAN", Region::R2, Region::R1);
        assert_eq!(route, RouteType::FarRegion);
    }

    /// RC-005: any pair touching the central region is adjacent
    #[test]
    fn test_pairs_with_central_region_are_adjacent() {
        assert_eq!(
            classify_route("HAN", "DNG", Region::R1, Region::R3),
            RouteType::AdjacentRegion
        );
        assert_eq!(
            classify_route("DNG", "HCM", Region::R3, Region::R2),
            RouteType::AdjacentRegion
        );
    }

    #[test]
    fn test_route_type_serializes_as_screaming_snake_case() {
        let json = serde_json::to_string(&RouteType::IntraProvince).unwrap();
        assert_eq!(json, "\"INTRA_PROVINCE\"");
        let parsed: RouteType = serde_json::from_str("\"ADJACENT_REGION\"").unwrap();
        assert_eq!(parsed, RouteType::AdjacentRegion);
    }

    #[test]
    fn test_display_matches_wire_identifier() {
        assert_eq!(RouteType::IntraRegion.to_string(), "INTRA_REGION");
        assert_eq!(RouteType::FarRegion.to_string(), "FAR_REGION");
    }
}
