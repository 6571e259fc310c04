//! Fully polynomial-time approximation scheme (FPTAS).
//!
//! Divides every value by a scale factor `K`, rounds down, solves the
//! coarser instance exactly, and multiplies the optimum back by `K`. With
//! the default [`ScaleRule::Epsilon`] the result satisfies
//! `(1 - epsilon) · OPT <= value <= OPT`.
//!
//! # References
//!
//! - Ibarra & Kim (1975), "Fast Approximation Algorithms for the Knapsack
//!   and Sum of Subset Problems"
//! - Kellerer, Pferschy & Pisinger (2004), "Knapsack Problems", ch. 2.6

mod config;
mod runner;

pub use config::{FptasBackend, FptasConfig, ScaleRule};
pub use runner::{FptasResult, FptasSolver};
