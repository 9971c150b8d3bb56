//! Solving many independent instances.

use super::config::SolverConfig;
use super::runner::{DpResult, DpRunner};
use crate::model::{ConstraintViolation, Instance};

/// Solves a batch of instances, one result per instance in input order.
///
/// Instances share no state. With the `parallel` feature enabled and
/// [`SolverConfig::parallel`] set, they are solved on the rayon pool.
pub struct BatchRunner;

impl BatchRunner {
    pub fn run(
        instances: &[Instance],
        config: &SolverConfig,
    ) -> Vec<Result<DpResult, ConstraintViolation>> {
        if config.parallel {
            solve_parallel(instances, config)
        } else {
            solve_sequential(instances, config)
        }
    }
}

fn solve_sequential(
    instances: &[Instance],
    config: &SolverConfig,
) -> Vec<Result<DpResult, ConstraintViolation>> {
    instances
        .iter()
        .map(|instance| DpRunner::run(instance, config))
        .collect()
}

#[cfg(feature = "parallel")]
fn solve_parallel(
    instances: &[Instance],
    config: &SolverConfig,
) -> Vec<Result<DpResult, ConstraintViolation>> {
    use rayon::prelude::*;

    instances
        .par_iter()
        .map(|instance| DpRunner::run(instance, config))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn solve_parallel(
    instances: &[Instance],
    config: &SolverConfig,
) -> Vec<Result<DpResult, ConstraintViolation>> {
    solve_sequential(instances, config)
}
