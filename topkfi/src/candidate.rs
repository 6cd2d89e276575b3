//! Itemset candidates.
use crate::transaction::{Item, Tid};

/// An itemset with its support count and the transactions known to contain it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Candidate {
    support: usize,
    items: Vec<Item>,
    tids: Vec<Tid>,
}

impl Candidate {
    /// Creates a new candidate.
    ///
    /// `items` must be in ascending order so that the last one is the maximum.
    pub fn new(support: usize, items: Vec<Item>, tids: Vec<Tid>) -> Self {
        debug_assert!(items.windows(2).all(|w| w[0] < w[1]));
        Self {
            support,
            items,
            tids,
        }
    }

    pub(crate) fn singleton(item: Item, tids: Vec<Tid>) -> Self {
        Self::new(tids.len(), vec![item], tids)
    }

    /// Returns a new candidate extended by `item`, which must be greater than
    /// every item of `self`.
    pub(crate) fn extend(&self, item: Item, support: usize, tids: Vec<Tid>) -> Self {
        debug_assert!(self.max_item().map_or(true, |max| max < item));
        let mut items = Vec::with_capacity(self.items.len() + 1);
        items.extend_from_slice(&self.items);
        items.push(item);
        Self::new(support, items, tids)
    }

    /// Gets the support count.
    #[inline(always)]
    pub const fn support(&self) -> usize {
        self.support
    }

    /// Gets the items in ascending order.
    #[inline(always)]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Gets the greatest item, or `None` for the empty itemset.
    #[inline(always)]
    pub fn max_item(&self) -> Option<Item> {
        self.items.last().copied()
    }

    /// Gets the identifiers of the transactions known to contain the itemset
    /// when this candidate was created.
    #[inline(always)]
    pub fn tids(&self) -> &[Tid] {
        &self.tids
    }

    /// Checks if the itemset is empty.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
