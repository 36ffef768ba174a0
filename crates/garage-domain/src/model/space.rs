//! A single parking space

use garage_types::{Registration, VehicleCategory};
use serde::{Deserialize, Serialize};

use super::rules::CapacityRules;
use super::vehicle::Vehicle;

/// Occupancy state of a space relative to the capacity rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpaceState {
    Free,
    Partial,
    Full,
}

impl SpaceState {
    pub fn label(&self) -> &'static str {
        match self {
            SpaceState::Free => "free",
            SpaceState::Partial => "partial",
            SpaceState::Full => "full",
        }
    }
}

/// One addressable slot holding zero or more vehicles of a single category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParkingSpace {
    index: usize,
    occupants: Vec<Vehicle>,
}

impl ParkingSpace {
    pub(crate) fn new(index: usize) -> Self {
        Self {
            index,
            occupants: Vec::new(),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Occupants in the order they arrived
    pub fn occupants(&self) -> &[Vehicle] {
        &self.occupants
    }

    pub fn is_empty(&self) -> bool {
        self.occupants.is_empty()
    }

    /// Category of the current occupants, `None` when free
    pub fn category(&self) -> Option<VehicleCategory> {
        self.occupants.first().map(Vehicle::category)
    }

    /// Whether a vehicle of `category` may be placed here right now
    pub fn accepts(&self, category: VehicleCategory, rules: &CapacityRules) -> bool {
        let Some(limit) = rules.limit(category) else {
            return false;
        };
        match self.category() {
            None => true,
            Some(current) => current == category && self.occupants.len() < limit,
        }
    }

    pub fn state(&self, rules: &CapacityRules) -> SpaceState {
        match self.category() {
            None => SpaceState::Free,
            Some(category) => {
                let limit = rules.limit(category).unwrap_or(self.occupants.len());
                if self.occupants.len() < limit {
                    SpaceState::Partial
                } else {
                    SpaceState::Full
                }
            }
        }
    }

    pub(crate) fn position_of(&self, registration: &Registration) -> Option<usize> {
        self.occupants
            .iter()
            .position(|v| v.registration() == registration)
    }

    pub(crate) fn push(&mut self, vehicle: Vehicle) {
        self.occupants.push(vehicle);
    }

    pub(crate) fn insert(&mut self, slot: usize, vehicle: Vehicle) {
        self.occupants.insert(slot, vehicle);
    }

    pub(crate) fn remove(&mut self, slot: usize) -> Vehicle {
        self.occupants.remove(slot)
    }
}
