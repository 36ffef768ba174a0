//! Domain model types

pub mod pricing;
pub mod rules;
pub mod space;
pub mod status;
pub mod vehicle;

pub use pricing::PriceList;
pub use rules::CapacityRules;
pub use space::{ParkingSpace, SpaceState};
pub use status::{GarageStatus, OccupantSnapshot, SpaceSnapshot};
pub use vehicle::Vehicle;
