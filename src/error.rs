//! Error type shared by every solver and by instance ingestion.

use thiserror::Error;

/// Errors reported at a solver's entry point.
///
/// No solver returns a partial result alongside an error: any variant is
/// terminal for that invocation. Callers may retry with another solver or
/// adjusted parameters (a larger table ceiling, the rolling-row value query,
/// a non-zero epsilon).
#[derive(Debug, Error)]
pub enum KnapsackError {
    /// Negative weight, value or capacity, an out-of-range parameter, or an
    /// instance whose total value does not fit the value type.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The DP table would exceed the configured memory ceiling.
    ///
    /// `limit` is `None` when the table does not even fit the address space.
    #[error("DP table needs {required} cells, exceeding the limit of {}", display_limit(.limit))]
    ResourceExhaustion {
        /// Cells the table would need (saturated at `u128::MAX`).
        required: u128,
        /// Configured ceiling in cells.
        limit: Option<usize>,
    },

    /// Relative error requested against a zero reference value.
    #[error("relative error is undefined for a zero reference value")]
    ZeroReference,

    /// Malformed instance text.
    #[error("line {line}: {message}")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// What went wrong.
        message: String,
    },

    /// Reading an instance file failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

fn display_limit(limit: &Option<usize>) -> String {
    match limit {
        Some(cells) => cells.to_string(),
        None => "the address space".into(),
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, KnapsackError>;
