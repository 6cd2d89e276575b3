//! # TopKFI
//!
//! Best-first mining of the top-K frequent itemsets.
//!
//! ```
//! use topkfi::{TopKMiner, TransactionStore};
//!
//! let store = TransactionStore::from_reader("1 2 3\n1 2\n2 3\n".as_bytes()).unwrap();
//! let results = TopKMiner::new(2).mine(&store);
//!
//! assert_eq!(results[0].items(), &[2]);
//! assert_eq!(results[0].support(), 3);
//! ```
#![deny(missing_docs)]

pub mod candidate;
pub mod errors;
pub mod frontier;
pub mod miner;
pub mod report;
pub mod support;
pub mod transaction;


pub use candidate::Candidate;
pub use errors::{Result, TopKError};
pub use miner::{ExpansionPolicy, Limits, TopKMiner};
pub use report::write_report;
pub use transaction::TransactionStore;
