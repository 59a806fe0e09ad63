//! Reference-data loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the province
//! registry and pricing table from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::rating::BASE_COVERAGE_KG;

use super::types::{PricingTable, Province, ProvinceRegistry};

/// Loads and provides access to the EMS reference data.
///
/// The `ConfigLoader` reads YAML files from a tariff directory and
/// validates them before the engine ever sees them. The loaded data is
/// immutable for the lifetime of the process.
///
/// # Directory Structure
///
/// ```text
/// config/ems_v4/
/// ├── provinces.yaml   # Province registry (code → name, region)
/// └── tariff.yaml      # Pricing table (rates, bands, surcharge)
/// ```
///
/// # Example
///
/// ```no_run
/// use ems_pricing::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/ems_v4").unwrap();
/// println!("Loaded tariff revision {}", loader.version());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    registry: ProvinceRegistry,
    tariff: PricingTable,
}

impl ConfigLoader {
    /// Loads reference data from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the tariff directory (e.g., "./config/ems_v4")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Either required file is missing (`ConfigNotFound`)
    /// - Either file contains invalid YAML (`ConfigParseError`)
    /// - The registry is empty or the pricing table violates a semantic
    ///   invariant (`ConfigInvalid`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let provinces_path = path.join("provinces.yaml");
        let registry = Self::load_yaml::<ProvinceRegistry>(&provinces_path)?;
        if registry.is_empty() {
            return Err(EngineError::ConfigInvalid {
                path: provinces_path.display().to_string(),
                message: "province registry is empty".to_string(),
            });
        }

        let tariff_path = path.join("tariff.yaml");
        let tariff = Self::load_yaml::<PricingTable>(&tariff_path)?;
        tariff
            .validate(BASE_COVERAGE_KG)
            .map_err(|message| EngineError::ConfigInvalid {
                path: tariff_path.display().to_string(),
                message,
            })?;

        Ok(Self { registry, tariff })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the province registry.
    pub fn registry(&self) -> &ProvinceRegistry {
        &self.registry
    }

    /// Returns the pricing table.
    pub fn tariff(&self) -> &PricingTable {
        &self.tariff
    }

    /// Returns the active tariff revision label.
    pub fn version(&self) -> &str {
        &self.tariff.version
    }
}
