//! FPTAS execution.

use super::config::{FptasBackend, FptasConfig};
use crate::dp::DynamicSolver;
use crate::error::Result;
use crate::model::{ItemSet, Solution};
use log::debug;

/// Result of an FPTAS run.
#[derive(Debug, Clone, PartialEq)]
pub struct FptasResult {
    /// Selection and rescaled value, in original value units.
    pub solution: Solution,

    /// Scale factor `K` applied to the values. `1.0` when no scaling happened.
    pub scale_factor: f64,

    /// Optimum of the scaled instance.
    pub scaled_value: u64,
}

/// Fully polynomial-time approximation scheme.
pub struct FptasSolver;

impl FptasSolver {
    /// Runs the FPTAS and returns only the solution.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_knapsack::fptas::{FptasConfig, FptasSolver};
    /// use u_knapsack::model::ItemSet;
    ///
    /// let items = ItemSet::from_pairs([(1, 1), (4, 3), (5, 4), (7, 5)], 7).unwrap();
    /// let solution = FptasSolver::solve(&items, &FptasConfig::new(0.0)).unwrap();
    /// assert_eq!(solution.value, 9);
    /// ```
    pub fn solve(items: &ItemSet, config: &FptasConfig) -> Result<Solution> {
        Self::run(items, config).map(|result| result.solution)
    }

    /// Runs the FPTAS.
    ///
    /// 1. `vmax` is the largest value of an item that fits on its own. Empty
    ///    instances, and instances where no fitting item has value, return
    ///    the trivial solution before a scale factor is computed.
    /// 2. `K` comes from the clamped epsilon, `vmax` and
    ///    [`ScaleRule`](super::ScaleRule).
    ///    Values are never scaled up: if `K <= 1` the instance is solved as is.
    /// 3. A private copy with `value' = floor(value / K)` is solved with the
    ///    original capacity; the caller's items are not modified.
    /// 4. The reported value is `round(scaled_optimum · K)`, capped at the
    ///    true value of the returned selection.
    pub fn run(items: &ItemSet, config: &FptasConfig) -> Result<FptasResult> {
        config.validate()?;

        let max_value = match items.max_fitting_value() {
            Some(v) if v > 0 => v,
            _ => {
                debug!(
                    "fptas: degenerate instance ({} items, no fitting value), trivial solution",
                    items.len()
                );
                return Ok(FptasResult {
                    solution: Solution::empty(items.len()),
                    scale_factor: 1.0,
                    scaled_value: 0,
                });
            }
        };

        let epsilon = config.effective_epsilon();
        let factor = config.scale_rule.factor(epsilon, max_value, items.len());
        debug!(
            "fptas: epsilon {} (requested {}), vmax {}, K = {}",
            epsilon, config.epsilon, max_value, factor
        );

        if factor <= 1.0 {
            let solution = Self::solve_scaled(items, config)?;
            return Ok(FptasResult {
                scaled_value: solution.value,
                solution,
                scale_factor: 1.0,
            });
        }

        let scaled = items.map_values(|v| (v as f64 / factor).floor() as u64)?;
        let scaled_solution = Self::solve_scaled(&scaled, config)?;
        let scaled_value = scaled_solution.value;

        // Rounding noise must not lift the estimate above what is packed.
        let packed = scaled_solution.total_value(items);
        let value = ((scaled_value as f64 * factor).round() as u64).min(packed);

        Ok(FptasResult {
            solution: Solution {
                selection: scaled_solution.selection,
                value,
            },
            scale_factor: factor,
            scaled_value,
        })
    }

    fn solve_scaled(items: &ItemSet, config: &FptasConfig) -> Result<Solution> {
        match config.backend {
            FptasBackend::WeightTable => DynamicSolver::solve(items, &config.dp),
            FptasBackend::ProfitTable => DynamicSolver::solve_by_profit(items, &config.dp),
        }
    }
}
