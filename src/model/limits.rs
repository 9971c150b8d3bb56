//! Packing limits and the checks that enforce them.

use super::amount::Amount;
use super::error::ConstraintViolation;

/// Max weight a package can take.
pub const MAX_PACKAGE_WEIGHT: u32 = 100;

/// Max weight of a single item.
pub const MAX_ITEM_WEIGHT: u32 = 100;

/// Max cost of a single item.
pub const MAX_ITEM_COST: u32 = 100;

/// Max number of items to choose from in one package.
pub const MAX_INPUT_ITEMS: usize = 15;

/// Upper bound on DP table cells, whatever the configured limits.
const MAX_TABLE_CELLS: u64 = 1 << 26;

/// Upper bounds applied to items and instances.
///
/// The default limits are the published packing constraints
/// ([`MAX_PACKAGE_WEIGHT`], [`MAX_ITEM_WEIGHT`], [`MAX_ITEM_COST`],
/// [`MAX_INPUT_ITEMS`]).
///
/// # Examples
///
/// ```
/// use u_packer::model::{Amount, Limits};
///
/// let limits = Limits::default().with_max_input_items(3);
/// assert!(limits.check_instance(4, Amount::from_whole(10)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Limits {
    /// Largest accepted package capacity.
    pub max_package_weight: Amount,

    /// Largest accepted weight of a single item.
    pub max_item_weight: Amount,

    /// Largest accepted cost of a single item.
    pub max_item_cost: Amount,

    /// Most items one package may offer.
    pub max_input_items: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_package_weight: Amount::from_whole(MAX_PACKAGE_WEIGHT),
            max_item_weight: Amount::from_whole(MAX_ITEM_WEIGHT),
            max_item_cost: Amount::from_whole(MAX_ITEM_COST),
            max_input_items: MAX_INPUT_ITEMS,
        }
    }
}

impl Limits {
    pub fn with_max_package_weight(mut self, max: Amount) -> Self {
        self.max_package_weight = max;
        self
    }

    pub fn with_max_item_weight(mut self, max: Amount) -> Self {
        self.max_item_weight = max;
        self
    }

    pub fn with_max_item_cost(mut self, max: Amount) -> Self {
        self.max_item_cost = max;
        self
    }

    pub fn with_max_input_items(mut self, max: usize) -> Self {
        self.max_input_items = max;
        self
    }

    /// Checks a single item against the weight and cost limits.
    pub fn check_item(
        &self,
        index: usize,
        weight: Amount,
        cost: Amount,
    ) -> Result<(), ConstraintViolation> {
        if weight > self.max_item_weight {
            return Err(ConstraintViolation::ItemWeightExceeded {
                index,
                weight,
                max: self.max_item_weight,
            });
        }
        if cost > self.max_item_cost {
            return Err(ConstraintViolation::ItemCostExceeded {
                index,
                cost,
                max: self.max_item_cost,
            });
        }
        Ok(())
    }

    /// Checks an instance's item count and capacity.
    pub fn check_instance(
        &self,
        item_count: usize,
        capacity: Amount,
    ) -> Result<(), ConstraintViolation> {
        if item_count > self.max_input_items {
            return Err(ConstraintViolation::TooManyItems {
                count: item_count,
                max: self.max_input_items,
            });
        }
        if capacity > self.max_package_weight {
            return Err(ConstraintViolation::CapacityExceeded {
                capacity,
                max: self.max_package_weight,
            });
        }
        Ok(())
    }

    /// Validates that a solve under these limits stays tractable and that
    /// item totals cannot overflow.
    pub fn validate(&self) -> Result<(), String> {
        if [self.max_package_weight, self.max_item_weight, self.max_item_cost]
            .contains(&Amount::MAX)
        {
            return Err(format!("limits must stay below {}", Amount::MAX));
        }

        let rows = self.max_input_items as u64 + 1;
        let cols = u64::from(self.max_package_weight.units()) + 1;
        let cells = rows.saturating_mul(cols);
        if cells > MAX_TABLE_CELLS {
            return Err(format!(
                "limits allow a table of {cells} cells, above the maximum of {MAX_TABLE_CELLS}"
            ));
        }

        let items = self.max_input_items as u64;
        let max_total = u64::from(self.max_item_weight.units().max(self.max_item_cost.units()));
        if items.saturating_mul(max_total) > u64::from(u32::MAX) {
            return Err("item totals could overflow under these limits".into());
        }
        Ok(())
    }
}

/// Checks an item against the default limits.
pub fn check_item(index: usize, weight: Amount, cost: Amount) -> Result<(), ConstraintViolation> {
    Limits::default().check_item(index, weight, cost)
}

/// Checks an instance against the default limits.
pub fn check_instance(item_count: usize, capacity: Amount) -> Result<(), ConstraintViolation> {
    Limits::default().check_instance(item_count, capacity)
}
