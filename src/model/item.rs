//! Items and item sets.

use crate::error::{KnapsackError, Result};

/// A single knapsack item.
///
/// # Examples
///
/// ```
/// use u_knapsack::model::Item;
///
/// let item = Item::new(4, 3);
/// assert_eq!(item.value, 4);
/// assert_eq!(item.weight, 3);
/// assert!(Item::try_from_signed(-1, 3).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    /// Profit gained by packing the item.
    pub value: u64,
    /// Capacity the item consumes.
    pub weight: u64,
}

impl Item {
    pub fn new(value: u64, weight: u64) -> Self {
        Self { value, weight }
    }

    /// Builds an item from signed input, rejecting negative numbers.
    pub fn try_from_signed(value: i64, weight: i64) -> Result<Self> {
        let value = u64::try_from(value)
            .map_err(|_| KnapsackError::InvalidInput(format!("negative value {value}")))?;
        let weight = u64::try_from(weight)
            .map_err(|_| KnapsackError::InvalidInput(format!("negative weight {weight}")))?;
        Ok(Self { value, weight })
    }
}

/// Ordered items plus a capacity: the input to every solver.
///
/// Construction checks that the summed value of all items fits in `u64`,
/// so solvers can add values without overflow checks.
///
/// # Examples
///
/// ```
/// use u_knapsack::model::{Item, ItemSet};
///
/// let set = ItemSet::new(vec![Item::new(1, 1), Item::new(4, 3)], 7).unwrap();
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.total_value(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "ItemSetData"))]
pub struct ItemSet {
    items: Vec<Item>,
    capacity: u64,
}

/// Unchecked wire form of an [`ItemSet`]; deserialization goes through
/// [`ItemSet::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct ItemSetData {
    items: Vec<Item>,
    capacity: u64,
}

#[cfg(feature = "serde")]
impl TryFrom<ItemSetData> for ItemSet {
    type Error = KnapsackError;

    fn try_from(data: ItemSetData) -> Result<Self> {
        Self::new(data.items, data.capacity)
    }
}

impl ItemSet {
    pub fn new(items: Vec<Item>, capacity: u64) -> Result<Self> {
        items.iter().try_fold(0u64, |acc, item| {
            acc.checked_add(item.value).ok_or_else(|| {
                KnapsackError::InvalidInput("total item value overflows u64".into())
            })
        })?;
        Ok(Self { items, capacity })
    }

    /// Builds an item set from `(value, weight)` pairs.
    pub fn from_pairs<I>(pairs: I, capacity: u64) -> Result<Self>
    where
        I: IntoIterator<Item = (u64, u64)>,
    {
        let items = pairs
            .into_iter()
            .map(|(value, weight)| Item::new(value, weight))
            .collect();
        Self::new(items, capacity)
    }

    /// Builds an item set from a signed capacity, rejecting negatives.
    pub fn try_from_signed(items: Vec<Item>, capacity: i64) -> Result<Self> {
        let capacity = u64::try_from(capacity)
            .map_err(|_| KnapsackError::InvalidInput(format!("negative capacity {capacity}")))?;
        Self::new(items, capacity)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Largest single item value, `None` for an empty set.
    pub fn max_value(&self) -> Option<u64> {
        self.items.iter().map(|item| item.value).max()
    }

    /// Largest value among items that fit the capacity on their own.
    pub fn max_fitting_value(&self) -> Option<u64> {
        self.items
            .iter()
            .filter(|item| item.weight <= self.capacity)
            .map(|item| item.value)
            .max()
    }

    pub fn total_value(&self) -> u64 {
        self.items.iter().map(|item| item.value).sum()
    }

    /// Same items with a different capacity.
    pub fn with_capacity(&self, capacity: u64) -> Self {
        Self {
            items: self.items.clone(),
            capacity,
        }
    }

    /// Private copy with every value replaced by `f(value)`.
    ///
    /// The caller's set is left untouched.
    pub(crate) fn map_values<F>(&self, f: F) -> Result<Self>
    where
        F: Fn(u64) -> u64,
    {
        let items = self
            .items
            .iter()
            .map(|item| Item::new(f(item.value), item.weight))
            .collect();
        Self::new(items, self.capacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_from_signed_rejects_negatives() {
        assert!(matches!(
            Item::try_from_signed(-3, 1),
            Err(KnapsackError::InvalidInput(_))
        ));
        assert!(matches!(
            Item::try_from_signed(3, -1),
            Err(KnapsackError::InvalidInput(_))
        ));
        assert_eq!(Item::try_from_signed(3, 1).unwrap(), Item::new(3, 1));
    }

    #[test]
    fn test_negative_capacity() {
        let err = ItemSet::try_from_signed(vec![Item::new(1, 1)], -5).unwrap_err();
        assert!(err.to_string().contains("negative capacity"));
    }

    #[test]
    fn test_value_overflow_rejected() {
        let items = vec![Item::new(u64::MAX, 1), Item::new(1, 1)];
        assert!(ItemSet::new(items, 10).is_err());
    }

    #[test]
    fn test_max_and_total_value() {
        let set = ItemSet::from_pairs([(1, 1), (7, 5), (4, 3)], 7).unwrap();
        assert_eq!(set.max_value(), Some(7));
        assert_eq!(set.total_value(), 12);
        assert_eq!(set.with_capacity(4).max_fitting_value(), Some(4));
        assert_eq!(set.with_capacity(0).max_fitting_value(), None);

        let empty = ItemSet::new(Vec::new(), 7).unwrap();
        assert_eq!(empty.max_value(), None);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_map_values_leaves_original() {
        let set = ItemSet::from_pairs([(10, 1), (20, 2)], 3).unwrap();
        let halved = set.map_values(|v| v / 2).unwrap();
        assert_eq!(halved.items()[1], Item::new(10, 2));
        assert_eq!(set.items()[1], Item::new(20, 2));
        assert_eq!(halved.capacity(), 3);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_wire_form_goes_through_new() {
        let overflowing = ItemSetData {
            items: vec![Item::new(u64::MAX, 1), Item::new(1, 1)],
            capacity: 10,
        };
        assert!(matches!(
            ItemSet::try_from(overflowing),
            Err(KnapsackError::InvalidInput(_))
        ));

        let valid = ItemSetData {
            items: vec![Item::new(4, 3)],
            capacity: 7,
        };
        assert_eq!(
            ItemSet::try_from(valid).unwrap(),
            ItemSet::from_pairs([(4, 3)], 7).unwrap()
        );
    }
}
