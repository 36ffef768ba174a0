//! Capacity rules: garage size and max vehicles per space by category

use std::collections::BTreeMap;

use garage_types::{ConfigError, VehicleCategory};
use serde::Serialize;

pub const DEFAULT_SPACE_COUNT: usize = 100;

/// Read-only capacity settings handed to the garage at construction
///
/// A category without a limit is not admitted at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CapacityRules {
    space_count: usize,
    limits: BTreeMap<VehicleCategory, usize>,
}

impl CapacityRules {
    pub fn new(
        space_count: usize,
        limits: BTreeMap<VehicleCategory, usize>,
    ) -> Result<Self, ConfigError> {
        if space_count == 0 {
            return Err(ConfigError::Invalid(
                "space count must be at least 1".to_string(),
            ));
        }
        if let Some((category, _)) = limits.iter().find(|(_, limit)| **limit == 0) {
            return Err(ConfigError::Invalid(format!(
                "max per space for {} must be at least 1",
                category
            )));
        }
        Ok(Self { space_count, limits })
    }

    /// Default limits: one car or two motorcycles per space
    pub fn default_limits() -> BTreeMap<VehicleCategory, usize> {
        BTreeMap::from([(VehicleCategory::Car, 1), (VehicleCategory::Motorcycle, 2)])
    }

    pub fn space_count(&self) -> usize {
        self.space_count
    }

    pub fn limit(&self, category: VehicleCategory) -> Option<usize> {
        self.limits.get(&category).copied()
    }

    pub fn supports(&self, category: VehicleCategory) -> bool {
        self.limits.contains_key(&category)
    }

    pub fn limits(&self) -> &BTreeMap<VehicleCategory, usize> {
        &self.limits
    }
}

impl Default for CapacityRules {
    fn default() -> Self {
        Self {
            space_count: DEFAULT_SPACE_COUNT,
            limits: Self::default_limits(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let rules = CapacityRules::default();
        assert_eq!(rules.space_count(), 100);
        assert_eq!(rules.limit(VehicleCategory::Car), Some(1));
        assert_eq!(rules.limit(VehicleCategory::Motorcycle), Some(2));
    }

    #[test]
    fn test_zero_spaces_rejected() {
        let result = CapacityRules::new(0, CapacityRules::default_limits());
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_zero_limit_rejected() {
        let limits = BTreeMap::from([(VehicleCategory::Car, 0)]);
        assert!(matches!(
            CapacityRules::new(10, limits),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_missing_category_unsupported() {
        let limits = BTreeMap::from([(VehicleCategory::Car, 1)]);
        let rules = CapacityRules::new(2, limits).unwrap();
        assert!(rules.supports(VehicleCategory::Car));
        assert!(!rules.supports(VehicleCategory::Motorcycle));
    }
}
