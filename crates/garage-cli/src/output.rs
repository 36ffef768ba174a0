//! Output formatting module

use std::io::Write;

use garage_app::config::Config;
use garage_app::session::Outcome;
use garage_domain::{GarageStatus, PriceList};
use garage_types::{Result, VehicleCategory};
use serde_json::json;

use crate::cli::OutputFormat;

pub fn output_outcome<W: Write>(out: &mut W, format: OutputFormat, outcome: &Outcome) -> Result<()> {
    if format == OutputFormat::Json {
        writeln!(out, "{}", serde_json::to_string_pretty(outcome)?)?;
        return Ok(());
    }

    match outcome {
        Outcome::Parked {
            registration,
            category,
            space,
        } => {
            writeln!(
                out,
                "Vehicle {} ({}) parked in space {}.",
                registration,
                category.label(),
                space
            )?;
        }
        Outcome::Moved {
            registration,
            from,
            to,
        } => {
            if from == to {
                writeln!(out, "Vehicle {} stays in space {}.", registration, from)?;
            } else {
                writeln!(
                    out,
                    "Vehicle {} moved from space {} to space {}.",
                    registration, from, to
                )?;
            }
        }
        Outcome::Retrieved {
            registration,
            category,
            space,
            parked_minutes,
            hours_charged,
            fee,
        } => {
            writeln!(
                out,
                "Vehicle {} ({}) retrieved from space {}.",
                registration,
                category.label(),
                space
            )?;
            writeln!(
                out,
                "Parked time:     {}h {:02}m ({} started hours)",
                parked_minutes / 60,
                parked_minutes % 60,
                hours_charged
            )?;
            writeln!(out, "Parking fee:     {}", fee)?;
        }
        Outcome::Found {
            registration,
            category,
            space,
            parked_at,
        } => {
            writeln!(
                out,
                "Vehicle {} ({}) is in space {}, parked since {}.",
                registration,
                category.label(),
                space,
                parked_at.format("%Y-%m-%d %H:%M UTC")
            )?;
        }
        Outcome::Status(status) => write_status_table(out, status)?,
        Outcome::Rejected { message, .. } => {
            writeln!(out, "{}", message)?;
        }
        Outcome::Quit => {
            writeln!(out, "Exiting...")?;
        }
    }

    Ok(())
}

fn write_status_table<W: Write>(out: &mut W, status: &GarageStatus) -> Result<()> {
    writeln!(out, "\nGarage Status")?;
    writeln!(out, "=============")?;
    writeln!(out, "{:>5}  {:<8} Occupants", "Space", "State")?;
    writeln!(out, "{}", "-".repeat(40))?;

    for space in &status.spaces {
        let occupants = if space.is_empty() {
            "empty".to_string()
        } else {
            space
                .occupants
                .iter()
                .map(|o| format!("{} ({})", o.registration, o.category))
                .collect::<Vec<_>>()
                .join(", ")
        };
        writeln!(out, "{:>5}  {:<8} {}", space.index, space.state.label(), occupants)?;
    }

    writeln!(out, "{}", "-".repeat(40))?;
    writeln!(
        out,
        "{} vehicles parked, {}/{} spaces free",
        status.parked_vehicles, status.free_spaces, status.total_spaces
    )?;
    Ok(())
}

pub fn output_config<W: Write>(
    out: &mut W,
    format: OutputFormat,
    config: &Config,
    prices: &PriceList,
) -> Result<()> {
    if format == OutputFormat::Json {
        let value = json!({
            "config": config,
            "prices": prices,
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
        return Ok(());
    }

    write!(out, "{}", config)?;
    writeln!(out)?;
    writeln!(out, "Hourly prices")?;
    writeln!(out, "-------------")?;
    for category in VehicleCategory::ALL {
        match prices.rate(category) {
            Some(rate) => writeln!(out, "{:<12} {}", category.label(), rate)?,
            None => writeln!(out, "{:<12} (not priced)", category.label())?,
        }
    }
    Ok(())
}

pub fn output_fee<W: Write>(
    out: &mut W,
    format: OutputFormat,
    category: VehicleCategory,
    minutes: i64,
    hours_charged: u64,
    fee: u64,
) -> Result<()> {
    if format == OutputFormat::Json {
        let value = json!({
            "category": category,
            "minutes": minutes,
            "hours_charged": hours_charged,
            "fee": fee,
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
    } else {
        writeln!(
            out,
            "{} for {} min: {} started hours, fee {}",
            category.label(),
            minutes,
            hours_charged,
            fee
        )?;
    }
    Ok(())
}
