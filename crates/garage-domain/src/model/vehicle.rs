//! Parked vehicle record

use chrono::{DateTime, Duration, Utc};
use garage_types::{Registration, VehicleCategory};
use serde::Serialize;

/// A vehicle currently held by the garage
///
/// Created at the moment of assignment and never mutated afterwards. A move
/// keeps the same instance, so `parked_at` survives relocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Vehicle {
    registration: Registration,
    category: VehicleCategory,
    parked_at: DateTime<Utc>,
}

impl Vehicle {
    pub fn new(
        registration: Registration,
        category: VehicleCategory,
        parked_at: DateTime<Utc>,
    ) -> Self {
        Self {
            registration,
            category,
            parked_at,
        }
    }

    pub fn registration(&self) -> &Registration {
        &self.registration
    }

    pub fn category(&self) -> VehicleCategory {
        self.category
    }

    pub fn parked_at(&self) -> DateTime<Utc> {
        self.parked_at
    }

    /// Time spent in the garage as of `now`
    pub fn parked_duration(&self, now: DateTime<Utc>) -> Duration {
        now.signed_duration_since(self.parked_at)
    }
}
