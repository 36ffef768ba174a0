//! Shared file reading for configuration and price list sources

use std::fs;
use std::path::Path;

use garage_types::{ConfigError, Result};
use serde::de::DeserializeOwned;

/// Serialization format, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SourceFormat {
    Json,
    Toml,
}

impl SourceFormat {
    pub(crate) fn of(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => SourceFormat::Toml,
            _ => SourceFormat::Json,
        }
    }
}

pub(crate) fn read_source(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()).into());
    }
    Ok(fs::read_to_string(path)?)
}

pub(crate) fn parse_json<T: DeserializeOwned>(content: &str, what: &str) -> Result<T> {
    serde_json::from_str(content)
        .map_err(|e| ConfigError::ParseError(format!("Failed to parse {} JSON: {}", what, e)).into())
}

pub(crate) fn parse_toml<T: DeserializeOwned>(content: &str, what: &str) -> Result<T> {
    toml::from_str(content)
        .map_err(|e| ConfigError::ParseError(format!("Failed to parse {} TOML: {}", what, e)).into())
}

pub(crate) fn parse_file<T: DeserializeOwned>(path: &Path, what: &str) -> Result<T> {
    let content = read_source(path)?;
    match SourceFormat::of(path) {
        SourceFormat::Json => parse_json(&content, what),
        SourceFormat::Toml => parse_toml(&content, what),
    }
}
