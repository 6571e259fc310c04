//! DP memory configuration.

use crate::error::{KnapsackError, Result};

/// Default ceiling: 2^26 cells, 512 MiB of `u64` entries.
pub const DEFAULT_MAX_TABLE_CELLS: usize = 1 << 26;

/// Configuration shared by every table-based solver.
///
/// # Examples
///
/// ```
/// use u_knapsack::dp::DpConfig;
///
/// let config = DpConfig::default().with_max_table_cells(1_000_000);
/// assert_eq!(config.max_table_cells, Some(1_000_000));
/// assert!(config.validate().is_ok());
///
/// let unbounded = DpConfig::unbounded();
/// assert_eq!(unbounded.max_table_cells, None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DpConfig {
    /// Largest table, in cells, a solver may allocate.
    ///
    /// `None` removes the ceiling; allocation can then still fail for
    /// tables that do not fit the address space.
    pub max_table_cells: Option<usize>,
}

impl Default for DpConfig {
    fn default() -> Self {
        Self {
            max_table_cells: Some(DEFAULT_MAX_TABLE_CELLS),
        }
    }
}

impl DpConfig {
    pub fn unbounded() -> Self {
        Self {
            max_table_cells: None,
        }
    }

    pub fn with_max_table_cells(mut self, cells: usize) -> Self {
        self.max_table_cells = Some(cells);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.max_table_cells == Some(0) {
            return Err(KnapsackError::InvalidInput(
                "max_table_cells must be positive".into(),
            ));
        }
        Ok(())
    }

    /// Checks a `rows × cols` table against the ceiling and returns its
    /// cell count.
    pub(crate) fn admit(&self, rows: u64, cols: u64) -> Result<usize> {
        let required = u128::from(rows).saturating_mul(u128::from(cols));
        let cells = usize::try_from(required).map_err(|_| KnapsackError::ResourceExhaustion {
            required,
            limit: self.max_table_cells,
        })?;
        match self.max_table_cells {
            Some(limit) if cells > limit => Err(KnapsackError::ResourceExhaustion {
                required,
                limit: Some(limit),
            }),
            _ => Ok(cells),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DpConfig::default();
        assert_eq!(config.max_table_cells, Some(DEFAULT_MAX_TABLE_CELLS));
        assert_eq!(DEFAULT_MAX_TABLE_CELLS, 67_108_864);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_ceiling() {
        assert!(DpConfig::default().with_max_table_cells(0).validate().is_err());
    }

    #[test]
    fn test_admit_within_limit() {
        let config = DpConfig::default().with_max_table_cells(100);
        assert_eq!(config.admit(10, 10).unwrap(), 100);
    }

    #[test]
    fn test_admit_over_limit() {
        let config = DpConfig::default().with_max_table_cells(99);
        match config.admit(10, 10) {
            Err(KnapsackError::ResourceExhaustion { required, limit }) => {
                assert_eq!(required, 100);
                assert_eq!(limit, Some(99));
            }
            other => panic!("expected ResourceExhaustion, got {other:?}"),
        }
    }

    #[test]
    fn test_admit_beyond_address_space() {
        let config = DpConfig::unbounded();
        assert!(matches!(
            config.admit(u64::MAX, u64::MAX),
            Err(KnapsackError::ResourceExhaustion { limit: None, .. })
        ));
    }
}
