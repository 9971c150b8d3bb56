//! Solver configuration.

use crate::model::Limits;
use std::fmt;
use std::str::FromStr;

/// How the DP table stores its cells.
///
/// Both strategies make the same decisions in the same order and return
/// identical selections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Strategy {
    /// Every cell holds its full [`CandidateSet`](super::CandidateSet).
    ///
    /// Item sequences are shared between cells, so this costs one small
    /// allocation per improving cell.
    Materialized,

    /// Every cell holds only `(cost, weight, take)`; the selection is
    /// rebuilt by walking back from the final cell.
    #[default]
    Backpointer,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Materialized => f.write_str("materialized"),
            Strategy::Backpointer => f.write_str("backpointer"),
        }
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "materialized" => Ok(Strategy::Materialized),
            "backpointer" => Ok(Strategy::Backpointer),
            other => Err(format!(
                "unknown strategy `{other}`, expected `materialized` or `backpointer`"
            )),
        }
    }
}

/// Configuration for [`DpRunner`](super::DpRunner) and
/// [`BatchRunner`](super::BatchRunner).
///
/// # Examples
///
/// ```
/// use u_packer::model::Limits;
/// use u_packer::solver::{SolverConfig, Strategy};
///
/// let config = SolverConfig::default()
///     .with_strategy(Strategy::Materialized)
///     .with_limits(Limits::default().with_max_input_items(20))
///     .with_parallel(true);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverConfig {
    /// Bounds checked before any table work.
    pub limits: Limits,

    /// Table storage strategy.
    pub strategy: Strategy,

    /// Whether batches are solved in parallel using rayon.
    ///
    /// Has no effect unless the `parallel` feature is enabled.
    pub parallel: bool,
}

impl SolverConfig {
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        self.limits.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Amount;

    #[test]
    fn test_default_config() {
        let config = SolverConfig::default();
        assert_eq!(config.strategy, Strategy::Backpointer);
        assert!(!config.parallel);
        assert_eq!(config.limits, Limits::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_bad_limits() {
        let config = SolverConfig::default().with_limits(
            Limits::default()
                .with_max_package_weight(Amount::from_whole(10_000_000))
                .with_max_input_items(1_000),
        );
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_strategy_round_trip_text() {
        for strategy in [Strategy::Materialized, Strategy::Backpointer] {
            assert_eq!(strategy.to_string().parse::<Strategy>(), Ok(strategy));
        }
        assert_eq!(
            "Materialized".parse::<Strategy>(),
            Ok(Strategy::Materialized)
        );
        assert!("greedy".parse::<Strategy>().is_err());
    }
}
