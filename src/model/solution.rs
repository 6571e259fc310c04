//! Solver output.

use super::ItemSet;

/// A selection of items and the value a solver reports for it.
///
/// `selection[i]` tells whether item `i` of the [`ItemSet`] is packed.
/// For exact solvers `value` equals the summed value of the selected items;
/// the FPTAS reports its rescaled estimate, which may fall below that sum.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// One flag per item, in item set order.
    pub selection: Vec<bool>,
    /// Achieved objective value.
    pub value: u64,
}

impl Solution {
    /// The trivial solution: nothing packed, value 0.
    pub fn empty(item_count: usize) -> Self {
        Self {
            selection: vec![false; item_count],
            value: 0,
        }
    }

    /// Builds a solution whose value is the summed value of the selection.
    pub fn from_selection(items: &ItemSet, selection: Vec<bool>) -> Self {
        let value: u64 = selected(items, &selection)
            .map(|i| items.items()[i].value)
            .sum();
        Self { selection, value }
    }

    /// Indices of the packed items, ascending.
    pub fn included_indices(&self) -> Vec<usize> {
        self.selection
            .iter()
            .enumerate()
            .filter_map(|(i, &packed)| packed.then_some(i))
            .collect()
    }

    pub fn selected_count(&self) -> usize {
        self.selection.iter().filter(|&&packed| packed).count()
    }

    /// Summed weight of the selection, saturating at `u64::MAX`.
    pub fn total_weight(&self, items: &ItemSet) -> u64 {
        selected(items, &self.selection)
            .map(|i| items.items()[i].weight)
            .fold(0u64, u64::saturating_add)
    }

    pub fn total_value(&self, items: &ItemSet) -> u64 {
        selected(items, &self.selection)
            .map(|i| items.items()[i].value)
            .sum()
    }

    /// Whether the selection matches the item count and fits the capacity.
    pub fn is_feasible(&self, items: &ItemSet) -> bool {
        self.selection.len() == items.len() && self.total_weight(items) <= items.capacity()
    }
}

fn selected<'a>(items: &'a ItemSet, selection: &'a [bool]) -> impl Iterator<Item = usize> + 'a {
    selection
        .iter()
        .take(items.len())
        .enumerate()
        .filter_map(|(i, &packed)| packed.then_some(i))
}
