//! Exact DP entry points.

use super::config::DpConfig;
use super::profit::ProfitTable;
use super::table::{fits, DpTable};
use crate::error::Result;
use crate::model::{ItemSet, Solution};
use log::{debug, trace};

/// Exact 0/1 knapsack solver.
pub struct DynamicSolver;

impl DynamicSolver {
    /// Solves exactly and reconstructs the optimal selection.
    ///
    /// Uses `O(n · capacity)` time and memory. Fails with
    /// [`ResourceExhaustion`](crate::error::KnapsackError::ResourceExhaustion)
    /// before allocating when the table would exceed `config.max_table_cells`;
    /// [`DynamicSolver::optimal_value`] answers value-only queries in
    /// `O(capacity)` memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_knapsack::dp::{DpConfig, DynamicSolver};
    /// use u_knapsack::model::ItemSet;
    ///
    /// let items = ItemSet::from_pairs([(1, 1), (4, 3), (5, 4), (7, 5)], 7).unwrap();
    /// let solution = DynamicSolver::solve(&items, &DpConfig::default()).unwrap();
    /// assert_eq!(solution.value, 9);
    /// assert_eq!(solution.included_indices(), vec![1, 2]);
    /// ```
    pub fn solve(items: &ItemSet, config: &DpConfig) -> Result<Solution> {
        let table = Self::build_table(items, config)?;
        let selection = table.backtrack();
        let value = table.value();
        trace!("dp backtrack selected {:?}", selection);
        Ok(Solution { selection, value })
    }

    /// Fills the full weight-indexed table without reconstructing.
    pub fn build_table(items: &ItemSet, config: &DpConfig) -> Result<DpTable> {
        config.validate()?;
        let cells = config.admit(
            items.capacity().saturating_add(1),
            items.len() as u64 + 1,
        )?;
        // `admit` bounds the cell count by usize, so the capacity fits too.
        let capacity = items.capacity() as usize;

        debug!(
            "dp table: {} items x capacity {} = {} cells",
            items.len(),
            capacity,
            cells
        );
        Ok(DpTable::fill(items.items(), capacity, cells))
    }

    /// Optimal value only, keeping two rolling rows of `capacity + 1` cells.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_knapsack::dp::{DpConfig, DynamicSolver};
    /// use u_knapsack::model::ItemSet;
    ///
    /// let items = ItemSet::from_pairs([(1, 1), (4, 3), (5, 4), (7, 5)], 7).unwrap();
    /// assert_eq!(DynamicSolver::optimal_value(&items, &DpConfig::default()).unwrap(), 9);
    /// ```
    pub fn optimal_value(items: &ItemSet, config: &DpConfig) -> Result<u64> {
        config.validate()?;
        config.admit(items.capacity().saturating_add(1), 2)?;
        let capacity = items.capacity() as usize;
        debug!(
            "dp rolling rows: {} items x capacity {}",
            items.len(),
            capacity
        );

        let mut prev = vec![0u64; capacity + 1];
        let mut next = vec![0u64; capacity + 1];
        for item in items.items() {
            for w in 0..=capacity {
                next[w] = match fits(item, w) {
                    None => prev[w],
                    Some(weight) => prev[w].max(item.value + prev[w - weight]),
                };
            }
            std::mem::swap(&mut prev, &mut next);
        }
        Ok(prev[capacity])
    }

    /// Solves exactly on a profit-indexed table.
    ///
    /// Memory is `(n + 1) × (Σ value + 1)` cells, independent of the capacity,
    /// so this suits instances with small values and a large capacity.
    /// Zero-weight items are always packed.
    pub fn solve_by_profit(items: &ItemSet, config: &DpConfig) -> Result<Solution> {
        config.validate()?;
        let members = ProfitTable::members(items);
        let max_profit: u64 = members.iter().map(|&i| items.items()[i].value).sum();
        let cells = config.admit(members.len() as u64 + 1, max_profit.saturating_add(1))?;
        let max_profit = max_profit as usize;

        debug!(
            "profit table: {} weighted items x profit {} = {} cells",
            members.len(),
            max_profit,
            cells
        );
        Ok(ProfitTable::fill(items, members, max_profit, cells).solve(items))
    }
}
