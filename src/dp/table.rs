//! Weight-indexed DP table.

use crate::model::Item;

/// The `(capacity + 1) × (n + 1)` table of best values.
///
/// `get(w, i)` is the best value reachable with the first `i` items under
/// capacity `w`. Cells are stored row-major by weight in a single buffer.
///
/// Row `w = 0` runs the same recurrence as every other row, so zero-weight
/// items already carry their value there.
#[derive(Debug, Clone)]
pub struct DpTable {
    cells: Vec<u64>,
    weights: Vec<u64>,
    capacity: usize,
    item_count: usize,
}

impl DpTable {
    /// Fills the table. `capacity` must already have passed the memory check.
    pub(crate) fn fill(items: &[Item], capacity: usize, cells: usize) -> Self {
        let cols = items.len() + 1;
        let mut table = Self {
            cells: vec![0; cells],
            weights: items.iter().map(|item| item.weight).collect(),
            capacity,
            item_count: items.len(),
        };

        for w in 0..=capacity {
            for i in 1..cols {
                let item = &items[i - 1];
                let skip = table.get(w, i - 1);
                table.cells[w * cols + i] = match fits(item, w) {
                    None => skip,
                    Some(weight) => skip.max(item.value + table.get(w - weight, i - 1)),
                };
            }
        }
        table
    }

    pub fn get(&self, weight: usize, items: usize) -> u64 {
        self.cells[weight * (self.item_count + 1) + items]
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Best value over all items at full capacity.
    pub fn value(&self) -> u64 {
        self.get(self.capacity, self.item_count)
    }

    /// Reconstructs the selection by walking back from `(capacity, n)`.
    ///
    /// Item `i - 1` is packed when its weight is zero or when it changed the
    /// table value. Zero-weight items are therefore always packed, whether or
    /// not they add value. The result is in item set order.
    pub fn backtrack(&self) -> Vec<bool> {
        let mut selection = vec![false; self.item_count];
        let mut w = self.capacity;
        for i in (1..=self.item_count).rev() {
            let weight = self.weights[i - 1];
            if weight == 0 || self.get(w, i) != self.get(w, i - 1) {
                selection[i - 1] = true;
                // A value change at (w, i) means the item fit under w.
                w -= weight as usize;
            }
        }
        selection
    }

    /// Whether every row and column is non-decreasing.
    pub fn is_monotone(&self) -> bool {
        (0..=self.capacity).all(|w| {
            (1..=self.item_count).all(|i| self.get(w, i) >= self.get(w, i - 1))
                && (w == 0 || (0..=self.item_count).all(|i| self.get(w, i) >= self.get(w - 1, i)))
        })
    }
}

/// The item's weight as an index if it fits under `w`.
pub(crate) fn fits(item: &Item, w: usize) -> Option<usize> {
    usize::try_from(item.weight).ok().filter(|&weight| weight <= w)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ItemSet, Solution};

    fn sample() -> ItemSet {
        ItemSet::from_pairs([(1, 1), (4, 3), (5, 4), (7, 5)], 7).unwrap()
    }

    fn table_for(set: &ItemSet) -> DpTable {
        let capacity = set.capacity() as usize;
        DpTable::fill(set.items(), capacity, (capacity + 1) * (set.len() + 1))
    }

    #[test]
    fn test_base_cases_are_zero() {
        let table = table_for(&sample());
        for i in 0..=4 {
            assert_eq!(table.get(0, i), 0);
        }
        for w in 0..=7 {
            assert_eq!(table.get(w, 0), 0);
        }
    }

    #[test]
    fn test_known_cells() {
        let table = table_for(&sample());
        assert_eq!(table.get(7, 4), 9);
        assert_eq!(table.get(5, 4), 7);
        assert_eq!(table.get(4, 2), 5);
        assert_eq!(table.get(3, 1), 1);
        assert_eq!(table.value(), 9);
    }

    #[test]
    fn test_monotone() {
        assert!(table_for(&sample()).is_monotone());
    }

    #[test]
    fn test_backtrack_index_order() {
        let set = sample();
        let table = table_for(&set);
        assert_eq!(table.backtrack(), vec![false, true, true, false]);
    }

    #[test]
    fn test_zero_weight_item_always_packed() {
        // The zero-value, zero-weight item adds nothing but is still packed.
        let set = ItemSet::from_pairs([(0, 0), (3, 2), (5, 0)], 1).unwrap();
        let table = table_for(&set);
        assert_eq!(table.value(), 5);
        assert_eq!(table.backtrack(), vec![true, false, true]);
    }

    #[test]
    fn test_zero_weight_value_survives_exact_fill() {
        let set = ItemSet::from_pairs([(5, 0), (3, 2)], 2).unwrap();
        let table = table_for(&set);
        assert_eq!(table.get(0, 1), 5);
        assert_eq!(table.value(), 8);
        let selection = table.backtrack();
        assert_eq!(selection, vec![true, true]);
        assert_eq!(Solution::from_selection(&set, selection).value, 8);
    }

    #[test]
    fn test_zero_capacity_counts_zero_weight_value() {
        let set = ItemSet::from_pairs([(5, 0), (3, 2)], 0).unwrap();
        let table = table_for(&set);
        assert_eq!(table.value(), 5);
        assert_eq!(table.backtrack(), vec![true, false]);
        assert!(table.is_monotone());
    }

    #[test]
    fn test_zero_weight_after_weighted_items() {
        let set = ItemSet::from_pairs([(3, 2), (4, 1), (2, 0)], 2).unwrap();
        let table = table_for(&set);
        assert_eq!(table.value(), 6);
        let selection = table.backtrack();
        assert_eq!(selection, vec![false, true, true]);
        assert!(Solution::from_selection(&set, selection).is_feasible(&set));
    }
}
