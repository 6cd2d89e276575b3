use hashbrown::HashMap;
use tracing::debug;

use crate::candidate::Candidate;
use crate::frontier::Frontier;
use crate::support::support;
use crate::transaction::{Item, TransactionStore};

/// Memo of the last support recorded per item.
#[derive(Default)]
pub(crate) struct SingletonMemo {
    supports: HashMap<Item, usize>,
}

impl SingletonMemo {
    /// Records `support` for `item`, returning `true` if a candidate should be inserted,
    /// i.e., the item is new or its recorded support changed.
    pub fn record(&mut self, item: Item, support: usize) -> bool {
        match self.supports.insert(item, support) {
            None => true,
            Some(prev) => prev != support,
        }
    }

    /// Gets the distinct items seen so far in ascending order.
    pub fn sorted_items(&self) -> Vec<Item> {
        let mut items: Vec<_> = self.supports.keys().copied().collect();
        items.sort_unstable();
        items
    }
}

/// Pushes a 1-item candidate for every distinct item of `store`, visiting every
/// occurrence of every item, and returns the distinct items in ascending order.
pub(crate) fn seed_singletons(store: &TransactionStore, frontier: &mut Frontier) -> Vec<Item> {
    let mut memo = SingletonMemo::default();
    for (_, items) in store.iter() {
        for &item in items {
            let Some(tids) = support(&[item], store) else {
                continue;
            };
            if memo.record(item, tids.len()) {
                frontier.push(Candidate::singleton(item, tids));
            }
        }
    }
    let singletons = memo.sorted_items();
    debug!(
        num_singletons = singletons.len(),
        frontier = frontier.len(),
        "seeded"
    );
    singletons
}
