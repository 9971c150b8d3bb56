//! Exact package selection under a weight limit.
//!
//! Given a package capacity and up to fifteen items, each with an index,
//! a weight and a cost, pick the subset with the highest total cost that
//! fits the capacity. When several subsets reach the same cost, the one
//! with the lowest total weight wins.
//!
//! - **Model** ([`model`]): two-decimal fixed-point [`Amount`]s, validated
//!   [`Item`]s and the packing [`Limits`].
//! - **Solver** ([`solver`]): dynamic-programming knapsack over integer
//!   hundredths with exact tie-breaking, plus a batch runner that can
//!   solve independent packages in parallel.
//! - **IO** ([`io`]): the `capacity : (index,weight,€cost) ...` line
//!   format and the `2,7` / `-` output format.
//!
//! # Examples
//!
//! ```
//! use u_packer::{solve, Amount, Item};
//!
//! let items = vec![
//!     Item::new(1, 15.3, 34.0).unwrap(),
//!     Item::new(2, 6.0, 30.0).unwrap(),
//!     Item::new(3, 4.0, 14.0).unwrap(),
//!     Item::new(4, 3.0, 15.0).unwrap(),
//!     Item::new(5, 2.0, 30.0).unwrap(),
//! ];
//! let best = solve(&items, Amount::from_whole(8)).unwrap();
//! assert_eq!(best.indices(), vec![2, 5]);
//! ```

mod error;
pub mod io;
pub mod model;
mod packer;
pub mod solver;

pub use error::PackError;
pub use model::{Amount, ConstraintViolation, Instance, Item, Limits};
pub use packer::{pack, pack_reader, pack_with};
pub use solver::{solve, BatchRunner, CandidateSet, DpResult, DpRunner, SolverConfig, Strategy};
