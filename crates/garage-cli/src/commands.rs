//! Command handlers

use std::io;

use chrono::Duration;
use garage_app::config::{resolve_path, Config, DEFAULT_CONFIG_FILE};
use garage_app::pricing::{load_price_list, DEFAULT_PRICE_FILE};
use garage_app::session::Session;
use garage_app::telemetry;
use garage_domain::{billable_hours, PriceList};
use garage_types::{InputError, Result, VehicleCategory};
use tracing::info;

use crate::cli::{Cli, Commands, OutputFormat};
use crate::output::{output_config, output_fee};
use crate::shell::run_menu;

/// Execute CLI command
///
/// Configuration and the price list are loaded before anything else; a
/// failure there aborts without entering the menu.
pub fn execute(cli: Cli) -> Result<()> {
    let config_path = resolve_path(cli.config.as_deref(), DEFAULT_CONFIG_FILE);
    let config = Config::load(&config_path)?;

    let log_level = if cli.verbose { "debug" } else { config.log_level.as_str() };
    telemetry::init(log_level)?;
    info!(path = %config_path.display(), spaces = config.space_count, "configuration loaded");

    let prices_path = resolve_path(cli.prices.as_deref(), DEFAULT_PRICE_FILE);
    let prices = load_price_list(&prices_path)?;
    info!(path = %prices_path.display(), "price list loaded");

    let format = cli.format.unwrap_or_default();

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => cmd_run(&config, prices, format),
        Commands::Config => output_config(&mut io::stdout().lock(), format, &config, &prices),
        Commands::Fee { category, minutes } => cmd_fee(&prices, &category, minutes, format),
    }
}

fn cmd_run(config: &Config, prices: PriceList, format: OutputFormat) -> Result<()> {
    let mut session = Session::from_config(config, prices)?;
    let stdin = io::stdin();
    run_menu(&mut session, stdin.lock(), io::stdout().lock(), format)
}

fn cmd_fee(prices: &PriceList, category: &str, minutes: i64, format: OutputFormat) -> Result<()> {
    let quote = fee_quote(prices, category, minutes)?;
    output_fee(
        &mut io::stdout().lock(),
        format,
        quote.category,
        minutes,
        quote.hours_charged,
        quote.fee,
    )
}

#[derive(Debug, PartialEq, Eq)]
struct FeeQuote {
    category: VehicleCategory,
    hours_charged: u64,
    fee: u64,
}

fn fee_quote(prices: &PriceList, category: &str, minutes: i64) -> Result<FeeQuote> {
    let category = VehicleCategory::from_code(category)?;
    let elapsed = Duration::try_minutes(minutes).ok_or(InputError::InvalidDuration(minutes))?;
    Ok(FeeQuote {
        category,
        hours_charged: billable_hours(elapsed),
        fee: prices.fee_for(category, elapsed),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use garage_types::Error;
    use std::collections::BTreeMap;

    fn prices() -> PriceList {
        PriceList::new(BTreeMap::from([(VehicleCategory::Car, 20)]))
    }

    #[test]
    fn test_fee_quote() {
        let quote = fee_quote(&prices(), "car", 65).unwrap();
        assert_eq!(
            quote,
            FeeQuote {
                category: VehicleCategory::Car,
                hours_charged: 2,
                fee: 40,
            }
        );
    }

    #[test]
    fn test_out_of_range_minutes_rejected() {
        let err = fee_quote(&prices(), "CAR", i64::MAX).unwrap_err();
        assert!(matches!(
            err,
            Error::Input(InputError::InvalidDuration(i64::MAX))
        ));
    }

    #[test]
    fn test_unknown_category_rejected() {
        let err = fee_quote(&prices(), "BUS", 10).unwrap_err();
        assert!(matches!(err, Error::Input(InputError::UnknownCategory(_))));
    }
}
