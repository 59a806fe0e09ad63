//! EMS Pricing Engine for Vietnam domestic express mail
//!
//! This crate quotes a postal shipping price given a sender province, a
//! receiver province, a parcel weight, and a receiver-location class
//! (central vs. remote). The rating core is a pure, deterministic
//! function over an immutable province registry and pricing table.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod rating;
