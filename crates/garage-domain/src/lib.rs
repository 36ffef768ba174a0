//! Parking garage domain: vehicles, spaces, capacity rules and the
//! space-allocation service.

pub mod model;
pub mod service;

pub use model::{
    CapacityRules, GarageStatus, OccupantSnapshot, ParkingSpace, PriceList, SpaceSnapshot,
    SpaceState, Vehicle,
};
pub use service::{
    billable_hours, compute_fee, MoveError, ParkError, ParkingGarage, Relocation,
    RetrievedVehicle, VehicleLocation,
};
