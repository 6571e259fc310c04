//! Greedy ratio heuristic.

use super::config::{FillRule, GreedyConfig};
use crate::model::{ItemSet, Solution};
use log::debug;

/// Sort key: value per unit of weight.
///
/// A weightless item with value is worth `+inf` and always sorts first; a
/// weightless item without value is worth `0`.
pub fn ratio(value: u64, weight: u64) -> f64 {
    match (value, weight) {
        (0, 0) => 0.0,
        (_, 0) => f64::INFINITY,
        _ => value as f64 / weight as f64,
    }
}

/// Item indices by descending ratio; equal ratios keep item set order.
pub fn ratio_order(items: &ItemSet) -> Vec<usize> {
    let keys: Vec<f64> = items
        .items()
        .iter()
        .map(|item| ratio(item.value, item.weight))
        .collect();
    let mut order: Vec<usize> = (0..items.len()).collect();
    // Stable: ties stay in index order.
    order.sort_by(|&a, &b| keys[b].total_cmp(&keys[a]));
    order
}

/// Greedy ratio heuristic. No optimality guarantee, `O(n log n)`.
pub struct GreedySolver;

impl GreedySolver {
    /// Packs items in ratio order while the fill rule accepts them.
    ///
    /// Scanning continues past rejected items, so a lighter item later in
    /// the order can still be packed.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_knapsack::greedy::{GreedyConfig, GreedySolver};
    /// use u_knapsack::model::ItemSet;
    ///
    /// let items = ItemSet::from_pairs([(1, 1), (4, 3), (5, 4), (7, 5)], 7).unwrap();
    /// let solution = GreedySolver::solve(&items, &GreedyConfig::default());
    /// assert_eq!(solution.included_indices(), vec![0, 3]);
    /// assert_eq!(solution.value, 8);
    /// ```
    pub fn solve(items: &ItemSet, config: &GreedyConfig) -> Solution {
        let capacity = items.capacity();
        let mut selection = vec![false; items.len()];
        let mut packed_weight = 0u64;

        for index in ratio_order(items) {
            let item = &items.items()[index];
            if config.fill_rule.accepts(packed_weight, item.weight, capacity) {
                selection[index] = true;
                packed_weight += item.weight;
            }
        }
        let greedy = Solution::from_selection(items, selection);
        debug!(
            "greedy: packed {} items, weight {}/{}, value {}",
            greedy.selected_count(),
            packed_weight,
            capacity,
            greedy.value
        );

        if !config.best_single_item {
            return greedy;
        }
        match best_single_item(items, config.fill_rule) {
            Some(index) if items.items()[index].value > greedy.value => {
                debug!("greedy: single item {} beats the fill", index);
                let mut selection = vec![false; items.len()];
                selection[index] = true;
                Solution::from_selection(items, selection)
            }
            _ => greedy,
        }
    }
}

/// Most valuable item the fill rule accepts on its own; lowest index wins ties.
fn best_single_item(items: &ItemSet, rule: FillRule) -> Option<usize> {
    items
        .items()
        .iter()
        .enumerate()
        .filter(|(_, item)| rule.accepts(0, item.weight, items.capacity()))
        .fold(None, |best: Option<(usize, u64)>, (index, item)| match best {
            Some((_, value)) if value >= item.value => best,
            _ => Some((index, item.value)),
        })
        .map(|(index, _)| index)
}
