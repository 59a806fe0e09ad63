//! Error types for the EMS pricing engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading reference data or
//! rating a shipment.

use thiserror::Error;

use crate::rating::RouteType;

/// The main error type for the EMS pricing engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application. Rating
/// failures are recoverable by the caller (re-prompt the user or fix the
/// reference data); none are fatal to the process.
///
/// # Example
///
/// ```
/// use ems_pricing::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/tariff.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/tariff.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but violated a semantic invariant.
    #[error("Invalid configuration in '{path}': {message}")]
    ConfigInvalid {
        /// The path to the offending file.
        path: String,
        /// A description of the violated invariant.
        message: String,
    },

    /// Parcel weight was missing, non-numeric, or not strictly positive
    /// after unit conversion.
    #[error("Invalid parcel weight: {message}")]
    InvalidWeight {
        /// A description of what made the weight invalid.
        message: String,
    },

    /// Sender or receiver province code was not found in the registry.
    #[error("Province not found: {code}")]
    ProvinceNotFound {
        /// The province code that was not found.
        code: String,
    },

    /// Chargeable weight exceeds the range covered by the tariff.
    /// The caller must obtain a manual quote.
    #[error("Chargeable weight {chargeable_kg} kg exceeds the {max_kg} kg tariff ceiling")]
    OverMaxWeight {
        /// The chargeable weight that was requested, in kilograms.
        chargeable_kg: u64,
        /// The maximum chargeable weight covered by the tariff.
        max_kg: u32,
    },

    /// The resolved route type has no configured price at a traversed
    /// tier. Indicates incomplete reference data, not user error.
    #[error("No rate configured for tier '{tier}' on route {route_type}")]
    RateNotFound {
        /// The tier identifier with the missing rate.
        tier: String,
        /// The route type for which the rate was requested.
        route_type: RouteType,
    },
}

impl EngineError {
    /// Returns the stable failure code for this error.
    ///
    /// These are the codes the original tariff tool exposed to its callers
    /// and are part of the wire contract: `INVALID_WEIGHT`,
    /// `INVALID_PROVINCE`, `OVER_500KG`, `NO_RATE`, plus `CONFIG_ERROR`
    /// for reference-data loading failures.
    pub fn code(&self) -> &'static str {
        match self {
            EngineError::ConfigNotFound { .. }
            | EngineError::ConfigParseError { .. }
            | EngineError::ConfigInvalid { .. } => "CONFIG_ERROR",
            EngineError::InvalidWeight { .. } => "INVALID_WEIGHT",
            EngineError::ProvinceNotFound { .. } => "INVALID_PROVINCE",
            EngineError::OverMaxWeight { .. } => "OVER_500KG",
            EngineError::RateNotFound { .. } => "NO_RATE",
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/tariff.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/tariff.yaml"
        );
    }

    #[test]
    fn test_province_not_found_displays_code() {
        let error = EngineError::ProvinceNotFound {
            code: "XXX".to_string(),
        };
        assert_eq!(error.to_string(), "Province not found: XXX");
        assert_eq!(error.code(), "INVALID_PROVINCE");
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_weight_displays_message() {
        let error = EngineError::InvalidWeight {
            message: "weight must be strictly positive".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid parcel weight: weight must be strictly positive"
        );
        assert_eq!(error.code(), "INVALID_WEIGHT");
    }

    #[test]
    fn test_over_max_weight_displays_kilograms() {
        let error = EngineError::OverMaxWeight {
            chargeable_kg: 600,
            max_kg: 500,
        };
        assert_eq!(
            error.to_string(),
            "Chargeable weight 600 kg exceeds the 500 kg tariff ceiling"
        );
        assert_eq!(error.code(), "OVER_500KG");
    }

    #[test]
    fn test_rate_not_found_displays_tier_and_route() {
        let error = EngineError::RateNotFound {
            tier: "RATE_5_30".to_string(),
            route_type: RouteType::FarRegion,
        };
        assert_eq!(
            error.to_string(),
            "No rate configured for tier 'RATE_5_30' on route FAR_REGION"
        );
        assert_eq!(error.code(), "NO_RATE");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_config_not_found() -> EngineResult<()> {
            Err(EngineError::ConfigNotFound {
                path: "/test".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_config_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
