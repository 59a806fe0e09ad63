//! Reference-data loading and management for the EMS pricing engine.
//!
//! This module provides functionality to load the province registry and
//! pricing table from YAML files and validate them before rating begins.
//!
//! # Example
//!
//! ```no_run
//! use ems_pricing::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/ems_v4").unwrap();
//! println!("Loaded tariff revision {}", config.version());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    BandMode, BASE_TIER, PricingTable, Province, ProvinceRegistry, Region, WeightBand,
};
