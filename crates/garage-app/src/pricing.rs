//! Price list loader
//!
//! Reads `Pricelist.json` (or `.toml`) into a typed [`PriceList`]. Both a
//! flat `{"CAR": 20, "MC": 10}` map and the older `{"Prices": {...}}`
//! wrapper are accepted.

use std::collections::BTreeMap;
use std::path::Path;

use garage_domain::PriceList;
use garage_types::{ConfigError, Result, VehicleCategory};
use serde::Deserialize;

use crate::source;

pub const DEFAULT_PRICE_FILE: &str = "Pricelist.json";

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PriceListFile {
    Wrapped {
        #[serde(rename = "Prices", alias = "prices")]
        prices: BTreeMap<String, u32>,
    },
    Flat(BTreeMap<String, u32>),
}

impl PriceListFile {
    fn into_price_list(self) -> Result<PriceList> {
        let raw = match self {
            PriceListFile::Wrapped { prices } => prices,
            PriceListFile::Flat(prices) => prices,
        };

        let mut hourly = BTreeMap::new();
        for (code, rate) in raw {
            let category = VehicleCategory::from_code(&code).map_err(|_| {
                ConfigError::Invalid(format!("unknown vehicle type '{}' in price list", code))
            })?;
            if hourly.insert(category, rate).is_some() {
                return Err(ConfigError::Invalid(format!(
                    "vehicle type {} priced more than once",
                    category
                ))
                .into());
            }
        }
        Ok(PriceList::new(hourly))
    }
}

pub fn load_price_list(path: &Path) -> Result<PriceList> {
    let file: PriceListFile = source::parse_file(path, "price list")?;
    file.into_price_list()
}

pub fn price_list_from_json_str(content: &str) -> Result<PriceList> {
    let file: PriceListFile = source::parse_json(content, "price list")?;
    file.into_price_list()
}

pub fn price_list_from_toml_str(content: &str) -> Result<PriceList> {
    let file: PriceListFile = source::parse_toml(content, "price list")?;
    file.into_price_list()
}
