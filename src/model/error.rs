//! Constraint violations raised while building items and instances.

use super::amount::Amount;
use thiserror::Error;

/// A value broke one of the packing limits, or could not be represented
/// as a two-decimal amount.
///
/// Every violation is terminal for the instance it was raised on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstraintViolation {
    /// An item weighs more than the per-item limit.
    #[error("max weight of an item is {max} but item {index} weighs {weight}")]
    ItemWeightExceeded {
        index: usize,
        weight: Amount,
        max: Amount,
    },

    /// An item costs more than the per-item limit.
    #[error("max cost of an item is {max} but item {index} costs {cost}")]
    ItemCostExceeded {
        index: usize,
        cost: Amount,
        max: Amount,
    },

    /// An instance offers more items than allowed.
    #[error("there may be up to {max} items to choose from but found {count}")]
    TooManyItems { count: usize, max: usize },

    /// A package capacity is above the package limit.
    #[error("max weight a package can take is {max} but found a capacity of {capacity}")]
    CapacityExceeded { capacity: Amount, max: Amount },

    /// The value carries more than two fractional digits.
    #[error("`{value}` has more than two decimal digits")]
    InvalidPrecision { value: String },

    /// The value is negative, non-finite or malformed.
    #[error("`{value}` is not a valid non-negative amount")]
    InvalidAmount { value: String },
}
