//! Read-only garage snapshot for status reports

use chrono::{DateTime, Utc};
use garage_types::{Registration, VehicleCategory};
use serde::{Deserialize, Serialize};

use super::space::SpaceState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccupantSnapshot {
    pub registration: Registration,
    pub category: VehicleCategory,
    pub parked_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpaceSnapshot {
    pub index: usize,
    pub state: SpaceState,
    pub occupants: Vec<OccupantSnapshot>,
}

impl SpaceSnapshot {
    pub fn is_empty(&self) -> bool {
        self.occupants.is_empty()
    }
}

/// Snapshot of every space, in index order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GarageStatus {
    pub total_spaces: usize,
    pub free_spaces: usize,
    pub parked_vehicles: usize,
    pub spaces: Vec<SpaceSnapshot>,
}

impl GarageStatus {
    /// Spaces holding at least one vehicle
    pub fn occupied(&self) -> impl Iterator<Item = &SpaceSnapshot> {
        self.spaces.iter().filter(|s| !s.is_empty())
    }
}
