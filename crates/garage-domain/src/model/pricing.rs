//! Hourly price list

use std::collections::BTreeMap;

use chrono::Duration;
use garage_types::VehicleCategory;
use serde::Serialize;

use crate::service::fee::compute_fee;

/// Hourly fee per category
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PriceList {
    hourly: BTreeMap<VehicleCategory, u32>,
}

impl PriceList {
    pub fn new(hourly: BTreeMap<VehicleCategory, u32>) -> Self {
        Self { hourly }
    }

    pub fn rate(&self, category: VehicleCategory) -> Option<u32> {
        self.hourly.get(&category).copied()
    }

    /// Fee for a stay of `elapsed`. Categories without a price are free.
    pub fn fee_for(&self, category: VehicleCategory, elapsed: Duration) -> u64 {
        compute_fee(self.rate(category).unwrap_or(0), elapsed)
    }

    pub fn iter(&self) -> impl Iterator<Item = (VehicleCategory, u32)> + '_ {
        self.hourly.iter().map(|(category, rate)| (*category, *rate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fee_for_priced_category() {
        let prices = PriceList::new(BTreeMap::from([(VehicleCategory::Car, 20)]));
        let elapsed = Duration::hours(1) + Duration::minutes(5);
        assert_eq!(prices.fee_for(VehicleCategory::Car, elapsed), 40);
    }

    #[test]
    fn test_unpriced_category_is_free() {
        let prices = PriceList::new(BTreeMap::from([(VehicleCategory::Car, 20)]));
        assert_eq!(prices.rate(VehicleCategory::Motorcycle), None);
        assert_eq!(
            prices.fee_for(VehicleCategory::Motorcycle, Duration::hours(3)),
            0
        );
    }
}
