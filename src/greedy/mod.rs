//! Greedy value/weight ratio heuristic.
//!
//! Items are ranked by [`ratio`] with a stable sort, so equal ratios keep
//! their item set order and the output is deterministic. The knapsack is
//! then filled in that order under a [`FillRule`].
//!
//! # References
//!
//! - Dantzig (1957), "Discrete-Variable Extremum Problems"
//! - Kellerer, Pferschy & Pisinger (2004), "Knapsack Problems", ch. 2.1

mod config;
mod runner;

pub use config::{FillRule, GreedyConfig};
pub use runner::{ratio, ratio_order, GreedySolver};
