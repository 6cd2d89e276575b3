use crate::candidate::Candidate;
use crate::frontier::Frontier;
use crate::support::contains;
use crate::transaction::{Item, TransactionStore};

/// How an extracted candidate is grown by one item.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExpansionPolicy {
    /// Destructive shared-list drain with one candidate pushed per match.
    ///
    /// A single working copy of the supporting transactions is shared by all the
    /// singletons tried for one expansion. For each singleton, transactions are
    /// removed from the back of the list while the number removed so far is less
    /// than the number remaining, so a list of `n` transactions loses `ceil(n/2)`
    /// of them per singleton. Every hit pushes its own candidate of support 1.
    /// Search order and discovered supports thus depend on the singleton order,
    /// which is ascending here.
    ///
    /// Unlike the original TopKFI tool, every candidate owns its itemset, so itemsets
    /// already reported are never altered by later expansions. The printed results
    /// therefore differ from that tool's output.
    #[default]
    Reference,

    /// Every singleton scans the complete supporting list and pushes one candidate
    /// whose support is the number of matching transactions.
    Aggregated,
}

/// Pushes onto `frontier` the extensions of `cand` by each singleton greater than
/// its maximum item.
///
/// `singletons` must be sorted in ascending order. Nothing is pushed for an
/// empty itemset.
pub(crate) fn expand(
    cand: &Candidate,
    singletons: &[Item],
    store: &TransactionStore,
    frontier: &mut Frontier,
    policy: ExpansionPolicy,
) {
    let Some(max_item) = cand.max_item() else {
        return;
    };
    let start = singletons.partition_point(|&s| s <= max_item);
    let singletons = &singletons[start..];
    match policy {
        ExpansionPolicy::Reference => expand_reference(cand, singletons, store, frontier),
        ExpansionPolicy::Aggregated => expand_aggregated(cand, singletons, store, frontier),
    }
}

fn expand_reference(
    cand: &Candidate,
    singletons: &[Item],
    store: &TransactionStore,
    frontier: &mut Frontier,
) {
    let mut remaining = cand.tids().to_vec();
    for &s in singletons {
        let mut j = 0;
        while j < remaining.len() {
            let Some(tid) = remaining.pop() else {
                break;
            };
            if store.get(tid).map_or(false, |items| contains(items, s)) {
                frontier.push(cand.extend(s, 1, vec![tid]));
            }
            j += 1;
        }
    }
}

fn expand_aggregated(
    cand: &Candidate,
    singletons: &[Item],
    store: &TransactionStore,
    frontier: &mut Frontier,
) {
    for &s in singletons {
        let tids: Vec<_> = cand
            .tids()
            .iter()
            .copied()
            .filter(|&tid| store.get(tid).map_or(false, |items| contains(items, s)))
            .collect();
        if !tids.is_empty() {
            frontier.push(cand.extend(s, tids.len(), tids));
        }
    }
}
