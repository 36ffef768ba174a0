//! Application service layer - config, pricing, command dispatch, telemetry

pub mod config;
pub mod pricing;
pub mod session;
pub mod telemetry;

mod source;
