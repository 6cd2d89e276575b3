//! Support computation by binary search over sorted transactions.
use tracing::warn;

use crate::transaction::{Item, Tid, TransactionStore};

/// Checks if the sorted `items` contain `item`.
#[inline(always)]
pub(crate) fn contains(items: &[Item], item: Item) -> bool {
    items.binary_search(&item).is_ok()
}

/// Computes the identifiers of the transactions containing every item of `itemset`,
/// in ascending order.
///
/// Returns `None` if `store` holds no transaction at all, which is distinct from
/// `Some(vec![])` (no transaction matches).
pub fn support(itemset: &[Item], store: &TransactionStore) -> Option<Vec<Tid>> {
    if store.is_empty() {
        warn!("no transactions found");
        return None;
    }
    Some(
        store
            .iter()
            .filter(|(_, items)| itemset.iter().all(|&item| contains(items, item)))
            .map(|(tid, _)| tid)
            .collect(),
    )
}
