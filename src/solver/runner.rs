//! DP execution.
//!
//! [`DpRunner`] fills a `(N + 1) × (W + 1)` table where `N` is the item
//! count and `W` the capacity in hundredths. Cell `[i][w]` holds the best
//! selection over the first `i` items that weighs at most `w`: highest
//! total cost first, lowest total weight among equal costs.

use super::candidate::CandidateSet;
use super::config::{SolverConfig, Strategy};
use super::table::DpTable;
use crate::model::{Amount, ConstraintViolation, Instance, Item};

/// Result of a DP solve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DpResult {
    /// The optimal selection, items in input order.
    pub best: CandidateSet,

    /// Capacity in hundredths (the last table column).
    pub quantized_capacity: u32,

    /// Number of table cells evaluated.
    pub cells: usize,

    /// Storage strategy used.
    pub strategy: Strategy,
}

/// Executes the knapsack DP.
///
/// # Usage
///
/// ```
/// use u_packer::model::{Amount, Instance, Item};
/// use u_packer::solver::{DpRunner, SolverConfig};
///
/// let items = vec![
///     Item::new(1, 53.38, 45.0).unwrap(),
///     Item::new(4, 72.30, 76.0).unwrap(),
/// ];
/// let instance = Instance::new(items, Amount::from_whole(81));
/// let result = DpRunner::run(&instance, &SolverConfig::default()).unwrap();
/// assert_eq!(result.best.indices(), vec![4]);
/// ```
pub struct DpRunner;

impl DpRunner {
    /// Solves one instance.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call [`SolverConfig::validate`]
    /// first to get a descriptive error).
    pub fn run(instance: &Instance, config: &SolverConfig) -> Result<DpResult, ConstraintViolation> {
        Self::run_items(&instance.items, instance.capacity, config)
    }

    /// Solves a borrowed item list against `capacity`.
    ///
    /// Limits are checked before the table is allocated; a violation
    /// aborts the solve with no partial result.
    pub fn run_items(
        items: &[Item],
        capacity: Amount,
        config: &SolverConfig,
    ) -> Result<DpResult, ConstraintViolation> {
        config.validate().expect("invalid SolverConfig");

        let limits = &config.limits;
        limits.check_instance(items.len(), capacity)?;
        for item in items {
            limits.check_item(item.index(), item.weight(), item.cost())?;
        }

        let quantized_capacity = capacity.units();
        let cols = quantized_capacity as usize + 1;
        let best = match config.strategy {
            Strategy::Materialized => fill_materialized(items, cols),
            Strategy::Backpointer => fill_backpointer(items, cols),
        };

        Ok(DpResult {
            best,
            quantized_capacity,
            cells: items.len() * cols,
            strategy: config.strategy,
        })
    }
}

/// Solves with the default limits and strategy, returning only the
/// optimal selection.
///
/// An empty item list, or a capacity nothing fits into, yields an empty
/// selection.
pub fn solve(items: &[Item], capacity: Amount) -> Result<CandidateSet, ConstraintViolation> {
    DpRunner::run_items(items, capacity, &SolverConfig::default()).map(|result| result.best)
}

/// Taking an item wins on strictly higher cost, or on equal cost with
/// strictly lower weight. Equal on both keeps the carried selection.
fn improves(cost: Amount, weight: Amount, carried_cost: Amount, carried_weight: Amount) -> bool {
    cost > carried_cost || (cost == carried_cost && weight < carried_weight)
}

/// Fills the table with full selections per cell.
///
/// Column 0 runs through the recurrence like every other column, so
/// zero-weight items are still taken when they add cost.
fn fill_materialized(items: &[Item], cols: usize) -> CandidateSet {
    let mut table = DpTable::new(items.len() + 1, cols, CandidateSet::empty());

    for (row, item) in (1..).zip(items) {
        let wi = item.weight().units() as usize;
        let (prev, cur) = table.split_rows(row);

        for (w, cell) in cur.iter_mut().enumerate() {
            let carried = &prev[w];
            if wi > w {
                *cell = carried.clone();
                continue;
            }

            let base = &prev[w - wi];
            let cost = base.total_cost() + item.cost();
            let weight = base.total_weight() + item.weight();
            *cell = if improves(cost, weight, carried.total_cost(), carried.total_weight()) {
                base.add(*item)
            } else {
                carried.clone()
            };
        }
    }

    table.get(items.len(), cols - 1).clone()
}

#[derive(Debug, Clone, Copy, Default)]
struct Cell {
    cost: Amount,
    weight: Amount,
    take: bool,
}

/// Fills the table with `(cost, weight, take)` cells, then walks back from
/// the last cell to rebuild the selection.
///
/// Column 0 is filled like [`fill_materialized`] fills it, so zero-weight
/// items are handled the same way.
fn fill_backpointer(items: &[Item], cols: usize) -> CandidateSet {
    let mut table = DpTable::new(items.len() + 1, cols, Cell::default());

    for (row, item) in (1..).zip(items) {
        let wi = item.weight().units() as usize;
        let (prev, cur) = table.split_rows(row);

        for (w, cell) in cur.iter_mut().enumerate() {
            let carried = Cell {
                take: false,
                ..prev[w]
            };
            if wi > w {
                *cell = carried;
                continue;
            }

            let base = prev[w - wi];
            let cost = base.cost + item.cost();
            let weight = base.weight + item.weight();
            *cell = if improves(cost, weight, carried.cost, carried.weight) {
                Cell {
                    cost,
                    weight,
                    take: true,
                }
            } else {
                carried
            };
        }
    }

    let mut picked = Vec::new();
    let mut w = cols - 1;
    for row in (1..=items.len()).rev() {
        if table.get(row, w).take {
            let item = items[row - 1];
            w -= item.weight().units() as usize;
            picked.push(item);
        }
    }

    picked.into_iter().rev().collect()
}
