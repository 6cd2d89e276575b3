//! Best-first top-K frequent itemset miner.
mod expander;
mod seed;

use tracing::debug;

use crate::candidate::Candidate;
use crate::errors::{Result, TopKError};
use crate::frontier::Frontier;
use crate::transaction::{Item, TransactionStore};

pub use expander::ExpansionPolicy;

/// The two limits of a run: `k`, the number of itemsets to extract before the
/// boundary tier is drained, and `max_output`, the number of results above which
/// only the count is reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Limits {
    k: usize,
    max_output: usize,
}

impl Limits {
    /// Validates the limits given as signed integers.
    ///
    /// # Errors
    ///
    /// [`TopKError`] is returned when `k` or `max_output` is negative.
    pub fn new(k: i64, max_output: i64) -> Result<Self> {
        let k = usize::try_from(k)
            .map_err(|_| TopKError::invalid_argument("K", "K and M should be positive!"))?;
        let max_output = usize::try_from(max_output)
            .map_err(|_| TopKError::invalid_argument("M", "K and M should be positive!"))?;
        Ok(Self { k, max_output })
    }

    /// Gets K.
    pub const fn k(&self) -> usize {
        self.k
    }

    /// Gets M.
    pub const fn max_output(&self) -> usize {
        self.max_output
    }
}

/// Top-K frequent itemset miner.
///
/// Itemsets are extracted in descending order of support, starting from single items
/// and growing one item at a time. After `k` extractions, every itemset tied with the
/// support of the `k`-th extraction is drained as well, so the result may exceed `k`.
#[derive(Clone, Debug)]
pub struct TopKMiner {
    k: usize,
    policy: ExpansionPolicy,
}

impl TopKMiner {
    /// Creates a new instance.
    ///
    /// # Arguments
    ///
    ///  - `k`: The number of itemsets to extract before draining the boundary tier.
    pub const fn new(k: usize) -> Self {
        Self {
            k,
            policy: ExpansionPolicy::Reference,
        }
    }

    /// Specifies how extracted itemsets are grown.
    /// By default, [`ExpansionPolicy::Reference`] is used.
    pub const fn expansion(mut self, policy: ExpansionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Gets K.
    pub const fn k(&self) -> usize {
        self.k
    }

    /// Gets the expansion policy.
    pub const fn policy(&self) -> ExpansionPolicy {
        self.policy
    }

    /// Mines `store` and returns the results in extraction order.
    pub fn mine(&self, store: &TransactionStore) -> Vec<Candidate> {
        let mut session = MiningSession::new(self, store);
        session.run();
        session.results
    }
}

/// State of a single run.
struct MiningSession<'a> {
    miner: &'a TopKMiner,
    store: &'a TransactionStore,
    frontier: Frontier,
    singletons: Vec<Item>,
    results: Vec<Candidate>,
}

impl<'a> MiningSession<'a> {
    fn new(miner: &'a TopKMiner, store: &'a TransactionStore) -> Self {
        let mut frontier = Frontier::new();
        let singletons = seed::seed_singletons(store, &mut frontier);
        Self {
            miner,
            store,
            frontier,
            singletons,
            results: vec![],
        }
    }

    fn run(&mut self) {
        let k = self.miner.k;
        if k == 0 {
            debug!("k is zero; nothing to extract");
            return;
        }

        let Some(boundary) = self.extract_batch(k) else {
            debug!("frontier is empty");
            return;
        };
        debug!(
            boundary,
            results = self.results.len(),
            "extracted the top-k; draining the boundary tier"
        );

        while self
            .frontier
            .peek()
            .map_or(false, |c| c.support() == boundary && !c.is_empty())
        {
            self.extract_batch(k);
        }
        debug!(
            results = self.results.len(),
            frontier = self.frontier.len(),
            "done"
        );
    }

    /// Runs up to `limit` extraction steps and returns the support of the last
    /// extracted candidate, or `None` if nothing was extracted.
    fn extract_batch(&mut self, limit: usize) -> Option<usize> {
        let mut last = None;
        for _ in 0..limit {
            let Some(cand) = self.frontier.pop_max() else {
                break;
            };
            last = Some(cand.support());
            expander::expand(
                &cand,
                &self.singletons,
                self.store,
                &mut self.frontier,
                self.miner.policy,
            );
            if !cand.is_empty() {
                self.results.push(cand);
            }
        }
        last
    }
}
