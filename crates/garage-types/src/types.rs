//! Vehicle identity types shared by every layer

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::InputError;

/// Vehicle category. Decides capacity per space and the hourly fee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum VehicleCategory {
    Car,
    Motorcycle,
}

impl VehicleCategory {
    pub const ALL: [VehicleCategory; 2] = [VehicleCategory::Car, VehicleCategory::Motorcycle];

    /// Code used in configuration files and at the prompt
    pub fn code(&self) -> &'static str {
        match self {
            VehicleCategory::Car => "CAR",
            VehicleCategory::Motorcycle => "MC",
        }
    }

    /// Get display label
    pub fn label(&self) -> &'static str {
        match self {
            VehicleCategory::Car => "Car",
            VehicleCategory::Motorcycle => "Motorcycle",
        }
    }

    /// Parse a category code, ignoring case and surrounding whitespace
    pub fn from_code(code: &str) -> Result<Self, InputError> {
        match code.trim().to_ascii_uppercase().as_str() {
            "CAR" => Ok(VehicleCategory::Car),
            "MC" | "MOTORCYCLE" | "MOTORBIKE" => Ok(VehicleCategory::Motorcycle),
            _ => Err(InputError::UnknownCategory(code.trim().to_string())),
        }
    }
}

impl fmt::Display for VehicleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for VehicleCategory {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

impl Serialize for VehicleCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for VehicleCategory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::from_code(&raw).map_err(serde::de::Error::custom)
    }
}

/// Case-normalized registration number
///
/// Input is trimmed and uppercased, so `abc123` and ` ABC123 ` refer to the
/// same vehicle.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Registration(String);

impl Registration {
    pub fn parse(raw: &str) -> Result<Self, InputError> {
        let normalized = raw.trim().to_uppercase();
        if normalized.is_empty() {
            return Err(InputError::EmptyRegistration);
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Registration {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<'de> Deserialize<'de> for Registration {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
