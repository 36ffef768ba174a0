//! Space allocation service
//!
//! `ParkingGarage` is the only owner of spaces and the vehicles in them.
//! Placement always scans spaces in index order and takes the first space
//! that accepts the vehicle's category.

use chrono::{DateTime, Utc};
use garage_types::{Registration, VehicleCategory};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::model::{
    CapacityRules, GarageStatus, OccupantSnapshot, ParkingSpace, SpaceSnapshot, SpaceState,
    Vehicle,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParkError {
    #[error("Vehicle {0} is already parked")]
    Duplicate(Registration),

    #[error("No free space for {0}")]
    GarageFull(VehicleCategory),

    #[error("Vehicle category {0} is not admitted")]
    UnsupportedCategory(VehicleCategory),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("Vehicle not found")]
    NotFound,

    #[error("No eligible space to move to")]
    NoEligibleSpace,

    #[error("Space {index} does not exist (garage has {count} spaces)")]
    SpaceOutOfRange { index: usize, count: usize },

    #[error("Space {0} cannot take this vehicle")]
    SpaceUnavailable(usize),
}

/// Source and destination of a successful move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Relocation {
    pub from: usize,
    pub to: usize,
}

/// A vehicle handed back to the caller, with the space it left
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetrievedVehicle {
    pub vehicle: Vehicle,
    pub space: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VehicleLocation<'a> {
    pub space: usize,
    pub vehicle: &'a Vehicle,
}

#[derive(Debug, Clone)]
pub struct ParkingGarage {
    spaces: Vec<ParkingSpace>,
    rules: CapacityRules,
}

impl ParkingGarage {
    pub fn new(rules: CapacityRules) -> Self {
        let spaces = (0..rules.space_count()).map(ParkingSpace::new).collect();
        Self { spaces, rules }
    }

    pub fn rules(&self) -> &CapacityRules {
        &self.rules
    }

    pub fn spaces(&self) -> &[ParkingSpace] {
        &self.spaces
    }

    pub fn vehicle_count(&self) -> usize {
        self.spaces.iter().map(|s| s.occupants().len()).sum()
    }

    pub fn is_parked(&self, registration: &Registration) -> bool {
        self.locate(registration).is_some()
    }

    /// Park a vehicle now. Returns the assigned space index.
    pub fn park(
        &mut self,
        category: VehicleCategory,
        registration: Registration,
    ) -> Result<usize, ParkError> {
        self.park_at(category, registration, Utc::now())
    }

    /// Park a vehicle with an explicit entry time
    pub fn park_at(
        &mut self,
        category: VehicleCategory,
        registration: Registration,
        parked_at: DateTime<Utc>,
    ) -> Result<usize, ParkError> {
        if !self.rules.supports(category) {
            return Err(ParkError::UnsupportedCategory(category));
        }
        if self.is_parked(&registration) {
            return Err(ParkError::Duplicate(registration));
        }
        let index = self
            .first_eligible(category)
            .ok_or(ParkError::GarageFull(category))?;

        debug!(%registration, %category, space = index, "vehicle parked");
        self.spaces[index].push(Vehicle::new(registration, category, parked_at));
        Ok(index)
    }

    /// Move a vehicle to the first eligible space
    ///
    /// The vacated space is a legal destination. When it wins the scan the
    /// vehicle keeps its old slot and the move is a no-op success.
    pub fn move_vehicle(&mut self, registration: &Registration) -> Result<Relocation, MoveError> {
        self.relocate(registration, |garage, category| {
            garage
                .first_eligible(category)
                .ok_or(MoveError::NoEligibleSpace)
        })
    }

    /// Move a vehicle to a specific space
    pub fn move_vehicle_to(
        &mut self,
        registration: &Registration,
        target: usize,
    ) -> Result<Relocation, MoveError> {
        if !self.is_parked(registration) {
            return Err(MoveError::NotFound);
        }
        let count = self.spaces.len();
        if target >= count {
            return Err(MoveError::SpaceOutOfRange {
                index: target,
                count,
            });
        }
        self.relocate(registration, |garage, category| {
            if garage.spaces[target].accepts(category, &garage.rules) {
                Ok(target)
            } else {
                Err(MoveError::SpaceUnavailable(target))
            }
        })
    }

    /// Remove a vehicle and hand it back to the caller
    pub fn retrieve(&mut self, registration: &Registration) -> Option<RetrievedVehicle> {
        let (space, slot) = self.locate(registration)?;
        let vehicle = self.spaces[space].remove(slot);
        debug!(%registration, space, "vehicle retrieved");
        Some(RetrievedVehicle { vehicle, space })
    }

    pub fn search(&self, registration: &Registration) -> Option<VehicleLocation<'_>> {
        let (space, slot) = self.locate(registration)?;
        Some(VehicleLocation {
            space,
            vehicle: &self.spaces[space].occupants()[slot],
        })
    }

    pub fn status(&self) -> GarageStatus {
        let spaces: Vec<SpaceSnapshot> = self
            .spaces
            .iter()
            .map(|space| SpaceSnapshot {
                index: space.index(),
                state: space.state(&self.rules),
                occupants: space
                    .occupants()
                    .iter()
                    .map(|v| OccupantSnapshot {
                        registration: v.registration().clone(),
                        category: v.category(),
                        parked_at: v.parked_at(),
                    })
                    .collect(),
            })
            .collect();

        GarageStatus {
            total_spaces: spaces.len(),
            free_spaces: spaces.iter().filter(|s| s.state == SpaceState::Free).count(),
            parked_vehicles: self.vehicle_count(),
            spaces,
        }
    }

    fn first_eligible(&self, category: VehicleCategory) -> Option<usize> {
        self.spaces
            .iter()
            .position(|space| space.accepts(category, &self.rules))
    }

    /// (space index, slot within the space)
    fn locate(&self, registration: &Registration) -> Option<(usize, usize)> {
        self.spaces.iter().enumerate().find_map(|(index, space)| {
            space.position_of(registration).map(|slot| (index, slot))
        })
    }

    /// Lift the vehicle out, let `choose` pick a destination against the
    /// garage without it, and put it back in its old slot on failure.
    fn relocate<F>(&mut self, registration: &Registration, choose: F) -> Result<Relocation, MoveError>
    where
        F: FnOnce(&Self, VehicleCategory) -> Result<usize, MoveError>,
    {
        let (from, slot) = self.locate(registration).ok_or(MoveError::NotFound)?;
        let vehicle = self.spaces[from].remove(slot);

        match choose(self, vehicle.category()) {
            Ok(to) if to == from => {
                self.spaces[from].insert(slot, vehicle);
                debug!(%registration, space = from, "vehicle moved within same space");
                Ok(Relocation { from, to })
            }
            Ok(to) => {
                self.spaces[to].push(vehicle);
                debug!(%registration, from, to, "vehicle moved");
                Ok(Relocation { from, to })
            }
            Err(err) => {
                self.spaces[from].insert(slot, vehicle);
                debug!(%registration, space = from, %err, "move rejected");
                Err(err)
            }
        }
    }
}
