//! Profit-indexed DP: minimum weight needed to reach each total value.
//!
//! The table has one column per reachable total value instead of one row
//! per unit of capacity, so its size is `(n + 1) × (Σ value + 1)`. Shrinking
//! the values (as the FPTAS does) shrinks the table, which is what makes the
//! approximation scheme polynomial in `n` and `1 / epsilon`.
//!
//! Zero-weight items are packed unconditionally, matching the backtracking
//! policy of the weight-indexed table; the table itself only covers items
//! with positive weight.

use crate::model::{ItemSet, Solution};

const UNREACHABLE: u64 = u64::MAX;

/// `min_weight[i][p]`: lightest subset of the first `i` positive-weight
/// items whose values sum to exactly `p`.
#[derive(Debug, Clone)]
pub(crate) struct ProfitTable {
    cells: Vec<u64>,
    /// Original indices of the positive-weight items, in item set order.
    members: Vec<usize>,
    max_profit: usize,
}

impl ProfitTable {
    /// Original indices of the items with positive weight.
    pub(crate) fn members(items: &ItemSet) -> Vec<usize> {
        items
            .items()
            .iter()
            .enumerate()
            .filter_map(|(i, item)| (item.weight > 0).then_some(i))
            .collect()
    }

    /// Fills the table; `max_profit` and `cells` must already have passed
    /// the memory check.
    pub(crate) fn fill(items: &ItemSet, members: Vec<usize>, max_profit: usize, cells: usize) -> Self {
        let cols = max_profit + 1;
        let mut table = vec![UNREACHABLE; cells];
        table[0] = 0;

        for (row, &index) in members.iter().enumerate() {
            let item = &items.items()[index];
            let value = item.value as usize;
            let (prev, next) = table.split_at_mut((row + 1) * cols);
            let prev = &prev[row * cols..];
            let next = &mut next[..cols];
            for p in 0..cols {
                let take = if p >= value && prev[p - value] != UNREACHABLE {
                    prev[p - value].saturating_add(item.weight)
                } else {
                    UNREACHABLE
                };
                next[p] = prev[p].min(take);
            }
        }

        Self {
            cells: table,
            members,
            max_profit,
        }
    }

    fn get(&self, row: usize, profit: usize) -> u64 {
        self.cells[row * (self.max_profit + 1) + profit]
    }

    /// Builds the solution for `items.capacity()`.
    pub(crate) fn solve(&self, items: &ItemSet) -> Solution {
        let capacity = items.capacity();
        let rows = self.members.len();
        let best = (0..=self.max_profit)
            .rev()
            .find(|&p| self.get(rows, p) <= capacity)
            .unwrap_or(0);

        let mut selection: Vec<bool> = items.items().iter().map(|item| item.weight == 0).collect();
        let mut p = best;
        for row in (1..=rows).rev() {
            if self.get(row, p) != self.get(row - 1, p) {
                let index = self.members[row - 1];
                selection[index] = true;
                p -= items.items()[index].value as usize;
            }
        }
        Solution::from_selection(items, selection)
    }
}
