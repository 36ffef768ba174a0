//! Error types for parking-garage

use std::path::PathBuf;

use thiserror::Error;

/// Configuration and price list loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// User input rejected before it reaches the garage
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Registration number must not be empty")]
    EmptyRegistration,

    #[error("Unknown vehicle category: '{0}' (expected CAR or MC)")]
    UnknownCategory(String),

    #[error("Invalid space number: '{0}'")]
    InvalidSpace(String),

    #[error("Stay of {0} minutes is out of range")]
    InvalidDuration(i64),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Input error: {0}")]
    Input(#[from] InputError),

    #[error("Telemetry error: {0}")]
    Telemetry(String),
}

pub type Result<T> = std::result::Result<T, Error>;
