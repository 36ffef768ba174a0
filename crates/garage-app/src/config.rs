//! Garage configuration
//!
//! Loaded once at startup from `Config.json` (or a `.toml` file). Lookup
//! order: explicit path, current directory, then
//! `~/.config/parking-garage/`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use garage_domain::model::rules::DEFAULT_SPACE_COUNT;
use garage_domain::CapacityRules;
use garage_types::{ConfigError, Result, VehicleCategory};
use serde::{Deserialize, Serialize};

use crate::source;

pub const APP_DIR: &str = "parking-garage";
pub const DEFAULT_CONFIG_FILE: &str = "Config.json";

/// Max vehicles per space for one category
///
/// Accepts a plain number or the older `{"MaxPerSpace": n}` object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LimitEntry {
    Plain(usize),
    Detailed {
        #[serde(rename = "MaxPerSpace", alias = "maxPerSpace")]
        max_per_space: usize,
    },
}

impl LimitEntry {
    pub fn max_per_space(&self) -> usize {
        match self {
            LimitEntry::Plain(n) => *n,
            LimitEntry::Detailed { max_per_space } => *max_per_space,
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Number of parking spaces
    #[serde(
        default = "default_space_count",
        alias = "NumberOfSpaces",
        alias = "numberOfSpaces"
    )]
    pub space_count: usize,

    /// Category code -> max vehicles per space
    #[serde(default = "default_vehicle_type_limits", alias = "VehicleTypes")]
    pub vehicle_type_limits: BTreeMap<String, LimitEntry>,

    /// Tracing filter used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_space_count() -> usize {
    DEFAULT_SPACE_COUNT
}

fn default_vehicle_type_limits() -> BTreeMap<String, LimitEntry> {
    CapacityRules::default_limits()
        .into_iter()
        .map(|(category, limit)| (category.code().to_string(), LimitEntry::Plain(limit)))
        .collect()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            space_count: default_space_count(),
            vehicle_type_limits: default_vehicle_type_limits(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load and validate config from a file
    pub fn load(path: &Path) -> Result<Self> {
        let config: Config = source::parse_file(path, "configuration")?;
        config.capacity_rules()?;
        Ok(config)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let config: Config = source::parse_json(content, "configuration")?;
        config.capacity_rules()?;
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = source::parse_toml(content, "configuration")?;
        config.capacity_rules()?;
        Ok(config)
    }

    /// Translate category codes into typed capacity rules
    pub fn capacity_rules(&self) -> Result<CapacityRules> {
        let mut limits = BTreeMap::new();
        for (code, entry) in &self.vehicle_type_limits {
            let category = VehicleCategory::from_code(code).map_err(|_| {
                ConfigError::Invalid(format!("unknown vehicle type '{}' in vehicleTypeLimits", code))
            })?;
            if limits.insert(category, entry.max_per_space()).is_some() {
                return Err(ConfigError::Invalid(format!(
                    "vehicle type {} listed more than once",
                    category
                ))
                .into());
            }
        }
        Ok(CapacityRules::new(self.space_count, limits)?)
    }
}

/// Pick the file to load for `file_name`
///
/// Falls back to the current-directory path when nothing exists, so the
/// not-found error names the most obvious location.
pub fn resolve_path(explicit: Option<&Path>, file_name: &str) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }

    let local = PathBuf::from(file_name);
    if local.exists() {
        return local;
    }

    if let Some(dir) = dirs::config_dir() {
        let candidate = dir.join(APP_DIR).join(file_name);
        if candidate.exists() {
            return candidate;
        }
    }

    local
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Parking Garage Configuration")?;
        writeln!(f, "============================")?;
        writeln!(f)?;
        writeln!(f, "Spaces:         {}", self.space_count)?;
        for (code, entry) in &self.vehicle_type_limits {
            writeln!(f, "Max per space:  {:<4} {}", code, entry.max_per_space())?;
        }
        writeln!(f, "Log level:      {}", self.log_level)?;
        Ok(())
    }
}
