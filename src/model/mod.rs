//! Packing domain model.
//!
//! Items and instances are validated on the way in: an [`Item`] can only
//! be built through the limit checks, and every decimal goes through the
//! [`Amount`] quantizer so that downstream comparisons are exact.

mod amount;
mod error;
mod item;
mod limits;

pub use amount::{Amount, SCALE};
pub use error::ConstraintViolation;
pub use item::{Instance, Item};
pub use limits::{
    check_instance, check_item, Limits, MAX_INPUT_ITEMS, MAX_ITEM_COST, MAX_ITEM_WEIGHT,
    MAX_PACKAGE_WEIGHT,
};
