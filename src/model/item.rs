//! Item and problem instance types.

use super::amount::Amount;
use super::error::ConstraintViolation;
use super::limits::Limits;

/// A candidate item: an index, a weight and a cost.
///
/// Items can only be built through the constraint checks, so every
/// `Item` in circulation respects the limits it was created under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawItem"))]
pub struct Item {
    index: usize,
    weight: Amount,
    cost: Amount,
}

impl Item {
    /// Builds an item from floating-point weight and cost, quantizing both.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_packer::model::Item;
    ///
    /// let item = Item::new(4, 72.30, 76.0).unwrap();
    /// assert_eq!(item.weight().units(), 7230);
    /// assert!(Item::new(1, 100.01, 1.0).is_err());
    /// ```
    pub fn new(index: usize, weight: f64, cost: f64) -> Result<Self, ConstraintViolation> {
        Self::from_amounts(index, Amount::quantize(weight)?, Amount::quantize(cost)?)
    }

    /// Builds an item from already quantized amounts under the default limits.
    pub fn from_amounts(
        index: usize,
        weight: Amount,
        cost: Amount,
    ) -> Result<Self, ConstraintViolation> {
        Self::with_limits(index, weight, cost, &Limits::default())
    }

    /// Builds an item under custom limits.
    pub fn with_limits(
        index: usize,
        weight: Amount,
        cost: Amount,
        limits: &Limits,
    ) -> Result<Self, ConstraintViolation> {
        limits.check_item(index, weight, cost)?;
        Ok(Self {
            index,
            weight,
            cost,
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn weight(&self) -> Amount {
        self.weight
    }

    pub fn cost(&self) -> Amount {
        self.cost
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawItem {
    index: usize,
    weight: Amount,
    cost: Amount,
}

#[cfg(feature = "serde")]
impl TryFrom<RawItem> for Item {
    type Error = ConstraintViolation;

    fn try_from(raw: RawItem) -> Result<Self, Self::Error> {
        Item::from_amounts(raw.index, raw.weight, raw.cost)
    }
}

/// One packing problem: the items to choose from and the package capacity.
///
/// Instance-level limits (item count, capacity) are checked when the
/// instance is solved, not when it is built.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Instance {
    pub items: Vec<Item>,
    pub capacity: Amount,
}

impl Instance {
    pub fn new(items: Vec<Item>, capacity: Amount) -> Self {
        Self { items, capacity }
    }
}
