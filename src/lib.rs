//! 0/1 knapsack solvers and a harness to compare them.
//!
//! Provides three solvers over a shared [`model::ItemSet`]:
//!
//! - **Dynamic programming (`dp`)**: exact pseudo-polynomial solver with
//!   iterative backtracking, a rolling-row value-only query and a
//!   profit-indexed variant.
//! - **FPTAS (`fptas`)**: scales values down, solves the coarse instance
//!   exactly and rescales, losing at most a factor `1 - epsilon`.
//! - **Greedy (`greedy`)**: value/weight ratio heuristic, `O(n log n)`, no
//!   guarantee.
//!
//! Every solver returns a [`model::Solution`]; [`metric::relative_error`]
//! scores it against a reference optimum.
//!
//! # Architecture
//!
//! The solvers operate purely on in-memory data, hold no state between
//! calls and never modify their input. Reading instance files (`io`) and
//! timing solver runs (`eval`) are layered on top and used by the
//! `knapsack-eval` binary.

pub mod dp;
pub mod error;
pub mod eval;
pub mod fptas;
pub mod greedy;
pub mod io;
pub mod metric;
pub mod model;

pub use error::{KnapsackError, Result};
