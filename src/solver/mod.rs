//! Exact 0/1 knapsack solver.
//!
//! Picks the subset of items with the highest total cost whose total
//! weight fits the capacity. Among subsets of equal cost the lightest
//! wins. Weights, costs and capacity are integer hundredths, so every
//! comparison in the recurrence is exact.
//!
//! # Complexity
//!
//! Time and space are `O(N·W)` where `W` is the capacity in hundredths.
//! Under the default limits that is at most `16 × 10_001` cells.
//!
//! # References
//!
//! - Bellman (1957), "Dynamic Programming"
//! - Kellerer, Pferschy & Pisinger (2004), "Knapsack Problems", ch. 2

mod batch;
mod candidate;
mod config;
mod runner;
mod table;

pub use batch::BatchRunner;
pub use candidate::CandidateSet;
pub use config::{SolverConfig, Strategy};
pub use runner::{solve, DpResult, DpRunner};
