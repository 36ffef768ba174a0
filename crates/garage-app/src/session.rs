//! Command dispatch over a single garage
//!
//! The interaction loop turns user input into [`Command`]s and renders the
//! returned [`Outcome`]. All input validation happens here, so the garage
//! only ever sees typed registrations and categories.

use chrono::{DateTime, Utc};
use garage_domain::{
    billable_hours, GarageStatus, MoveError, ParkError, ParkingGarage, PriceList,
};
use garage_types::{InputError, Registration, Result, VehicleCategory};
use serde::Serialize;
use tracing::info;

use crate::config::Config;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Park { category: String, registration: String },
    /// `to` is a space number; `None` or blank means first eligible space
    Move { registration: String, to: Option<String> },
    Retrieve { registration: String },
    Search { registration: String },
    Status,
    Quit,
}

/// Why a command did not change anything
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rejection {
    Invalid,
    NotFound,
    GarageFull,
    Duplicate,
    Unsupported,
    CannotMove,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    Parked {
        registration: Registration,
        category: VehicleCategory,
        space: usize,
    },
    Moved {
        registration: Registration,
        from: usize,
        to: usize,
    },
    Retrieved {
        registration: Registration,
        category: VehicleCategory,
        space: usize,
        parked_minutes: i64,
        hours_charged: u64,
        fee: u64,
    },
    Found {
        registration: Registration,
        category: VehicleCategory,
        space: usize,
        parked_at: DateTime<Utc>,
    },
    Status(GarageStatus),
    Rejected {
        reason: Rejection,
        message: String,
    },
    Quit,
}

impl Outcome {
    fn rejected(reason: Rejection, message: impl ToString) -> Self {
        Outcome::Rejected {
            reason,
            message: message.to_string(),
        }
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Outcome::Rejected { .. })
    }
}

impl From<InputError> for Outcome {
    fn from(err: InputError) -> Self {
        Outcome::rejected(Rejection::Invalid, err)
    }
}

impl From<ParkError> for Outcome {
    fn from(err: ParkError) -> Self {
        let reason = match err {
            ParkError::Duplicate(_) => Rejection::Duplicate,
            ParkError::GarageFull(_) => Rejection::GarageFull,
            ParkError::UnsupportedCategory(_) => Rejection::Unsupported,
        };
        Outcome::rejected(reason, err)
    }
}

impl From<MoveError> for Outcome {
    fn from(err: MoveError) -> Self {
        let reason = match err {
            MoveError::NotFound => Rejection::NotFound,
            MoveError::NoEligibleSpace
            | MoveError::SpaceOutOfRange { .. }
            | MoveError::SpaceUnavailable(_) => Rejection::CannotMove,
        };
        Outcome::rejected(reason, err)
    }
}

/// Owns one garage and its price list for the lifetime of the program
pub struct Session {
    garage: ParkingGarage,
    prices: PriceList,
}

impl Session {
    pub fn new(garage: ParkingGarage, prices: PriceList) -> Self {
        Self { garage, prices }
    }

    pub fn from_config(config: &Config, prices: PriceList) -> Result<Self> {
        let garage = ParkingGarage::new(config.capacity_rules()?);
        Ok(Self::new(garage, prices))
    }

    pub fn garage(&self) -> &ParkingGarage {
        &self.garage
    }

    pub fn prices(&self) -> &PriceList {
        &self.prices
    }

    /// Run one command. `now` is the entry time for parks and the exit time
    /// for retrievals.
    pub fn dispatch(&mut self, command: Command, now: DateTime<Utc>) -> Outcome {
        let outcome = match command {
            Command::Park {
                category,
                registration,
            } => self.park(&category, &registration, now),
            Command::Move { registration, to } => self.relocate(&registration, to.as_deref()),
            Command::Retrieve { registration } => self.retrieve(&registration, now),
            Command::Search { registration } => self.search(&registration),
            Command::Status => Outcome::Status(self.garage.status()),
            Command::Quit => Outcome::Quit,
        };

        if let Outcome::Rejected { reason, message } = &outcome {
            info!(?reason, %message, "command rejected");
        }
        outcome
    }

    fn park(&mut self, category: &str, registration: &str, now: DateTime<Utc>) -> Outcome {
        let category = match VehicleCategory::from_code(category) {
            Ok(category) => category,
            Err(err) => return err.into(),
        };
        let registration = match Registration::parse(registration) {
            Ok(registration) => registration,
            Err(err) => return err.into(),
        };

        match self.garage.park_at(category, registration.clone(), now) {
            Ok(space) => {
                info!(%registration, %category, space, "parked");
                Outcome::Parked {
                    registration,
                    category,
                    space,
                }
            }
            Err(err) => err.into(),
        }
    }

    fn relocate(&mut self, registration: &str, to: Option<&str>) -> Outcome {
        let registration = match Registration::parse(registration) {
            Ok(registration) => registration,
            Err(err) => return err.into(),
        };
        let target = match parse_space(to) {
            Ok(target) => target,
            Err(err) => return err.into(),
        };

        let result = match target {
            Some(index) => self.garage.move_vehicle_to(&registration, index),
            None => self.garage.move_vehicle(&registration),
        };

        match result {
            Ok(relocation) => {
                info!(%registration, from = relocation.from, to = relocation.to, "moved");
                Outcome::Moved {
                    registration,
                    from: relocation.from,
                    to: relocation.to,
                }
            }
            Err(err) => err.into(),
        }
    }

    fn retrieve(&mut self, registration: &str, now: DateTime<Utc>) -> Outcome {
        let registration = match Registration::parse(registration) {
            Ok(registration) => registration,
            Err(err) => return err.into(),
        };

        let Some(retrieved) = self.garage.retrieve(&registration) else {
            return Outcome::rejected(Rejection::NotFound, "Vehicle not found");
        };

        let category = retrieved.vehicle.category();
        let elapsed = retrieved.vehicle.parked_duration(now);
        let fee = self.prices.fee_for(category, elapsed);
        info!(%registration, space = retrieved.space, fee, "retrieved");

        Outcome::Retrieved {
            registration,
            category,
            space: retrieved.space,
            parked_minutes: elapsed.num_minutes().max(0),
            hours_charged: billable_hours(elapsed),
            fee,
        }
    }

    fn search(&self, registration: &str) -> Outcome {
        let registration = match Registration::parse(registration) {
            Ok(registration) => registration,
            Err(err) => return err.into(),
        };

        match self.garage.search(&registration) {
            Some(location) => Outcome::Found {
                registration,
                category: location.vehicle.category(),
                space: location.space,
                parked_at: location.vehicle.parked_at(),
            },
            None => Outcome::rejected(Rejection::NotFound, "Vehicle not found"),
        }
    }
}

fn parse_space(raw: Option<&str>) -> std::result::Result<Option<usize>, InputError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse::<usize>()
            .map(Some)
            .map_err(|_| InputError::InvalidSpace(value.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use garage_domain::CapacityRules;
    use std::collections::BTreeMap;

    fn session(spaces: usize) -> Session {
        let rules = CapacityRules::new(spaces, CapacityRules::default_limits()).unwrap();
        let prices = PriceList::new(BTreeMap::from([
            (VehicleCategory::Car, 20),
            (VehicleCategory::Motorcycle, 10),
        ]));
        Session::new(ParkingGarage::new(rules), prices)
    }

    fn park(category: &str, registration: &str) -> Command {
        Command::Park {
            category: category.to_string(),
            registration: registration.to_string(),
        }
    }

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap()
    }

    fn reason(outcome: &Outcome) -> Option<Rejection> {
        match outcome {
            Outcome::Rejected { reason, .. } => Some(*reason),
            _ => None,
        }
    }

    #[test]
    fn test_park_then_retrieve_charges_started_hours() {
        let mut s = session(3);
        let parked = s.dispatch(park("car", "abc123"), t0());
        assert_eq!(
            parked,
            Outcome::Parked {
                registration: Registration::parse("ABC123").unwrap(),
                category: VehicleCategory::Car,
                space: 0,
            }
        );

        let later = t0() + Duration::hours(1) + Duration::minutes(5);
        let retrieved = s.dispatch(
            Command::Retrieve {
                registration: "ABC123".to_string(),
            },
            later,
        );
        match retrieved {
            Outcome::Retrieved {
                parked_minutes,
                hours_charged,
                fee,
                ..
            } => {
                assert_eq!(parked_minutes, 65);
                assert_eq!(hours_charged, 2);
                assert_eq!(fee, 40);
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_immediate_retrieval_is_free() {
        let mut s = session(1);
        s.dispatch(park("MC", "mc1"), t0());
        let outcome = s.dispatch(
            Command::Retrieve {
                registration: "MC1".to_string(),
            },
            t0(),
        );
        assert!(matches!(outcome, Outcome::Retrieved { fee: 0, .. }));
    }

    #[test]
    fn test_invalid_input_rejected_without_change() {
        let mut s = session(2);
        assert_eq!(
            reason(&s.dispatch(park("BUS", "ABC123"), t0())),
            Some(Rejection::Invalid)
        );
        assert_eq!(
            reason(&s.dispatch(park("CAR", "  "), t0())),
            Some(Rejection::Invalid)
        );
        assert_eq!(s.garage().vehicle_count(), 0);
    }

    #[test]
    fn test_full_garage_and_duplicate() {
        let mut s = session(1);
        assert!(!s.dispatch(park("CAR", "CAR1"), t0()).is_rejected());
        assert_eq!(
            reason(&s.dispatch(park("CAR", "CAR2"), t0())),
            Some(Rejection::GarageFull)
        );
        assert_eq!(
            reason(&s.dispatch(park("CAR", "car1"), t0())),
            Some(Rejection::Duplicate)
        );
    }

    #[test]
    fn test_search_after_retrieve_not_found() {
        let mut s = session(2);
        s.dispatch(park("CAR", "ABC123"), t0());
        assert!(matches!(
            s.dispatch(
                Command::Search {
                    registration: "abc123".to_string()
                },
                t0()
            ),
            Outcome::Found { space: 0, .. }
        ));
        s.dispatch(
            Command::Retrieve {
                registration: "ABC123".to_string(),
            },
            t0(),
        );
        let outcome = s.dispatch(
            Command::Search {
                registration: "ABC123".to_string(),
            },
            t0(),
        );
        assert_eq!(reason(&outcome), Some(Rejection::NotFound));
    }

    #[test]
    fn test_move_with_and_without_target() {
        let mut s = session(3);
        s.dispatch(park("MC", "MC1"), t0());

        let moved = s.dispatch(
            Command::Move {
                registration: "mc1".to_string(),
                to: Some("2".to_string()),
            },
            t0(),
        );
        assert!(matches!(moved, Outcome::Moved { from: 0, to: 2, .. }));

        let moved = s.dispatch(
            Command::Move {
                registration: "MC1".to_string(),
                to: Some(" ".to_string()),
            },
            t0(),
        );
        assert!(matches!(moved, Outcome::Moved { from: 2, to: 0, .. }));

        let bad = s.dispatch(
            Command::Move {
                registration: "MC1".to_string(),
                to: Some("two".to_string()),
            },
            t0(),
        );
        assert_eq!(reason(&bad), Some(Rejection::Invalid));

        let missing = s.dispatch(
            Command::Move {
                registration: "NOPE".to_string(),
                to: None,
            },
            t0(),
        );
        assert_eq!(reason(&missing), Some(Rejection::NotFound));
    }

    #[test]
    fn test_outcome_json_is_tagged() {
        let mut s = session(1);
        let outcome = s.dispatch(park("CAR", "abc123"), t0());
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["outcome"], "parked");
        assert_eq!(json["registration"], "ABC123");
        assert_eq!(json["category"], "CAR");
    }
}
