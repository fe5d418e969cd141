//! Rule-based risk scoring for identity-record batch statistics.
//!
//! The [`risk`] module holds the scorer and its HTTP surface, [`analytics`] the
//! contract for the component that will eventually supply real feature values.

pub mod analytics;
pub mod config;
pub mod error;
pub mod risk;
pub mod telemetry;
