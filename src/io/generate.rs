//! Seeded random instances.

use super::instance::Instance;
use crate::dp::{DpConfig, DynamicSolver};
use crate::error::{KnapsackError, Result};
use crate::model::{Item, ItemSet};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Parameters for [`random_instance`].
///
/// # Examples
///
/// ```
/// use u_knapsack::io::{random_instance, GeneratorConfig};
///
/// let config = GeneratorConfig::new(20).with_seed(7);
/// let instance = random_instance(&config).unwrap();
/// assert_eq!(instance.items.len(), 20);
/// assert!(instance.reference.is_some());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneratorConfig {
    /// Number of items.
    pub item_count: usize,
    /// Weights are drawn uniformly from `1..=max_weight`.
    pub max_weight: u64,
    /// Values are drawn uniformly from `1..=max_value`.
    pub max_value: u64,
    /// Capacity as a fraction of the total weight, in `[0, 1]`.
    pub capacity_ratio: f64,
    /// Random seed; `None` draws one.
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new(50)
    }
}

impl GeneratorConfig {
    pub fn new(item_count: usize) -> Self {
        Self {
            item_count,
            max_weight: 100,
            max_value: 1_000,
            capacity_ratio: 0.5,
            seed: None,
        }
    }

    pub fn with_max_weight(mut self, max_weight: u64) -> Self {
        self.max_weight = max_weight;
        self
    }

    pub fn with_max_value(mut self, max_value: u64) -> Self {
        self.max_value = max_value;
        self
    }

    pub fn with_capacity_ratio(mut self, ratio: f64) -> Self {
        self.capacity_ratio = ratio;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.max_weight == 0 {
            return Err(KnapsackError::InvalidInput("max_weight must be positive".into()));
        }
        if self.max_value == 0 {
            return Err(KnapsackError::InvalidInput("max_value must be positive".into()));
        }
        if !(0.0..=1.0).contains(&self.capacity_ratio) {
            return Err(KnapsackError::InvalidInput(format!(
                "capacity_ratio must be in [0, 1], got {}",
                self.capacity_ratio
            )));
        }
        Ok(())
    }
}

/// Draws a random instance and computes its optimum as the reference.
///
/// The reference comes from the rolling-row DP, limited by `dp`.
pub fn random_instance_with(config: &GeneratorConfig, dp: &DpConfig) -> Result<Instance> {
    config.validate()?;
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::seed_from_u64(rand::random()),
    };

    let items: Vec<Item> = (0..config.item_count)
        .map(|_| {
            let weight = rng.random_range(1..=config.max_weight);
            let value = rng.random_range(1..=config.max_value);
            Item::new(value, weight)
        })
        .collect();
    let total_weight = items.iter().fold(0u64, |acc, item| acc.saturating_add(item.weight));
    let capacity = (total_weight as f64 * config.capacity_ratio).floor() as u64;

    let items = ItemSet::new(items, capacity)?;
    let reference = DynamicSolver::optimal_value(&items, dp)?;
    Ok(Instance::new(items, Some(reference)))
}

/// [`random_instance_with`] under the default memory ceiling.
pub fn random_instance(config: &GeneratorConfig) -> Result<Instance> {
    random_instance_with(config, &DpConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_is_reproducible() {
        let config = GeneratorConfig::new(30).with_seed(42);
        let a = random_instance(&config).unwrap();
        let b = random_instance(&config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_ranges_respected() {
        let config = GeneratorConfig::new(100)
            .with_max_weight(10)
            .with_max_value(20)
            .with_capacity_ratio(0.25)
            .with_seed(1);
        let instance = random_instance(&config).unwrap();
        let total_weight: u64 = instance.items.items().iter().map(|i| i.weight).sum();
        assert_eq!(instance.items.capacity(), total_weight / 4);
        for item in instance.items.items() {
            assert!((1..=10).contains(&item.weight));
            assert!((1..=20).contains(&item.value));
        }
    }

    #[test]
    fn test_reference_is_optimum() {
        let config = GeneratorConfig::new(15).with_seed(9);
        let instance = random_instance(&config).unwrap();
        let exact = DynamicSolver::solve(&instance.items, &DpConfig::default()).unwrap();
        assert_eq!(instance.reference, Some(exact.value));
    }

    #[test]
    fn test_validate() {
        assert!(GeneratorConfig::default().validate().is_ok());
        assert!(GeneratorConfig::new(5).with_max_weight(0).validate().is_err());
        assert!(GeneratorConfig::new(5).with_capacity_ratio(1.5).validate().is_err());
    }
}
