//! Rating logic for the EMS pricing engine.
//!
//! This module contains the pure computation pipeline: route
//! classification, weight normalization, tiered band accumulation, the
//! remote surcharge, and the orchestrator that sequences them into a
//! single [`quote`] call.

mod bands;
mod engine;
mod route;
mod surcharge;
mod weight;

pub use bands::{BandAccumulation, accumulate_bands};
pub use engine::quote;
pub use route::{FAR_REGION_PAIR, RouteType, classify_route};
pub use surcharge::{SurchargeOutcome, apply_remote_surcharge};
pub use weight::{
    BASE_COVERAGE_KG, MAX_CHARGEABLE_KG, NormalizedWeight, normalize_weight,
};
