//! Shared knapsack data model.
//!
//! - [`Item`]: one `(value, weight)` pair.
//! - [`ItemSet`]: ordered items plus the knapsack capacity. The order
//!   defines the index space used by every selection vector.
//! - [`Solution`]: selection flags plus the achieved value, returned by
//!   every solver.

mod item;
mod solution;

pub use item::{Item, ItemSet};
pub use solution::Solution;
