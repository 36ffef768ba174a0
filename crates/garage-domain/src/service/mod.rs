//! Domain services

pub mod fee;
pub mod garage;

pub use fee::{billable_hours, compute_fee};
pub use garage::{
    MoveError, ParkError, ParkingGarage, Relocation, RetrievedVehicle, VehicleLocation,
};
