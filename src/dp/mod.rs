//! Exact dynamic programming for the 0/1 knapsack.
//!
//! [`DynamicSolver`] fills a `(capacity + 1) × (n + 1)` table with the
//! recurrence
//!
//! ```text
//! table[w][i] = table[w][i-1]                                   if weight[i-1] > w
//!             = max(table[w][i-1], value[i-1] + table[w - weight[i-1]][i-1])  otherwise
//! ```
//!
//! and recovers the optimal selection by walking the table back from
//! `(capacity, n)`. The walk is iterative, so instance size is bounded by
//! memory and not by stack depth.
//!
//! Memory is the limiting resource. [`DpConfig::max_table_cells`] caps the
//! table; value-only queries can use [`DynamicSolver::optimal_value`]
//! (two rolling rows) and instances with small values can use
//! [`DynamicSolver::solve_by_profit`].
//!
//! # References
//!
//! - Kellerer, Pferschy & Pisinger (2004), "Knapsack Problems", ch. 2.3

mod config;
mod profit;
mod runner;
mod table;

pub use config::{DpConfig, DEFAULT_MAX_TABLE_CELLS};
pub use runner::DynamicSolver;
pub use table::DpTable;
