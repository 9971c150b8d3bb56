//! Persistent candidate selections.

use crate::model::{Amount, Item};
use std::sync::Arc;

#[derive(Debug)]
struct Node {
    item: Item,
    prev: Option<Arc<Node>>,
}

/// An immutable selection of items with its total weight and cost.
///
/// The only way to grow a set is [`CandidateSet::add`], which returns a
/// new set and leaves the original untouched. The item sequence is a
/// shared linked list, so sets derived from a common prefix share it
/// instead of copying it, and cloning a set is O(1).
///
/// # Examples
///
/// ```
/// use u_packer::model::Item;
/// use u_packer::solver::CandidateSet;
///
/// let empty = CandidateSet::empty();
/// let one = empty.add(Item::new(2, 6.0, 30.0).unwrap());
/// let two = one.add(Item::new(5, 2.0, 30.0).unwrap());
///
/// assert!(empty.is_empty());
/// assert_eq!(one.indices(), vec![2]);
/// assert_eq!(two.indices(), vec![2, 5]);
/// assert_eq!(two.total_weight().units(), 800);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CandidateSet {
    last: Option<Arc<Node>>,
    len: usize,
    total_weight: Amount,
    total_cost: Amount,
}

impl CandidateSet {
    /// A set with no items, zero weight and zero cost.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns a new set with `item` appended.
    pub fn add(&self, item: Item) -> Self {
        Self {
            last: Some(Arc::new(Node {
                item,
                prev: self.last.clone(),
            })),
            len: self.len + 1,
            total_weight: self.total_weight + item.weight(),
            total_cost: self.total_cost + item.cost(),
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn total_weight(&self) -> Amount {
        self.total_weight
    }

    pub fn total_cost(&self) -> Amount {
        self.total_cost
    }

    /// Items in selection order.
    pub fn items(&self) -> Vec<Item> {
        let mut items: Vec<Item> = self.iter_rev().collect();
        items.reverse();
        items
    }

    /// Item indices in selection order.
    pub fn indices(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = self.iter_rev().map(|item| item.index()).collect();
        indices.reverse();
        indices
    }

    /// Walks the items from the most recently added one.
    fn iter_rev(&self) -> impl Iterator<Item = Item> + '_ {
        std::iter::successors(self.last.as_deref(), |node| node.prev.as_deref())
            .map(|node| node.item)
    }
}

impl PartialEq for CandidateSet {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len
            && self.total_weight == other.total_weight
            && self.total_cost == other.total_cost
            && self.iter_rev().eq(other.iter_rev())
    }
}

impl Eq for CandidateSet {}

impl FromIterator<Item> for CandidateSet {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        iter.into_iter()
            .fold(CandidateSet::empty(), |set, item| set.add(item))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for CandidateSet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("CandidateSet", 3)?;
        state.serialize_field("items", &self.items())?;
        state.serialize_field("total_weight", &self.total_weight)?;
        state.serialize_field("total_cost", &self.total_cost)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(index: usize, weight: f64, cost: f64) -> Item {
        Item::new(index, weight, cost).unwrap()
    }

    #[test]
    fn test_empty() {
        let set = CandidateSet::empty();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert_eq!(set.total_weight(), Amount::ZERO);
        assert_eq!(set.total_cost(), Amount::ZERO);
        assert!(set.items().is_empty());
    }

    #[test]
    fn test_add_keeps_original() {
        let base = CandidateSet::empty().add(item(1, 10.0, 5.0));
        let grown = base.add(item(2, 2.5, 7.25));

        assert_eq!(base.indices(), vec![1]);
        assert_eq!(base.total_weight(), Amount::from_whole(10));

        assert_eq!(grown.indices(), vec![1, 2]);
        assert_eq!(grown.total_weight(), Amount::from_units(1250));
        assert_eq!(grown.total_cost(), Amount::from_units(1225));
    }

    #[test]
    fn test_branches_share_prefix() {
        let base = CandidateSet::empty().add(item(1, 1.0, 1.0));
        let left = base.add(item(2, 1.0, 1.0));
        let right = base.add(item(3, 1.0, 1.0));

        assert_eq!(left.indices(), vec![1, 2]);
        assert_eq!(right.indices(), vec![1, 3]);
        assert_ne!(left, right);
    }

    #[test]
    fn test_totals_match_items() {
        let set: CandidateSet = [item(4, 72.30, 76.0), item(6, 4.0, 0.5), item(9, 0.01, 99.99)]
            .into_iter()
            .collect();

        let weight: u32 = set.items().iter().map(|i| i.weight().units()).sum();
        let cost: u32 = set.items().iter().map(|i| i.cost().units()).sum();
        assert_eq!(set.total_weight().units(), weight);
        assert_eq!(set.total_cost().units(), cost);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_equality_is_structural() {
        let a = CandidateSet::empty().add(item(1, 1.0, 1.0));
        let b = CandidateSet::empty().add(item(1, 1.0, 1.0));
        assert_eq!(a, b);
        assert_ne!(a, CandidateSet::empty());
    }

    #[test]
    fn test_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CandidateSet>();
    }
}
