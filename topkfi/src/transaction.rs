//! Storage of the transactions of a dataset.
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind, Read};
use std::path::Path;

use tracing::{debug, warn};

use crate::errors::{Result, TopKError};

/// Item identifier.
pub type Item = i32;

/// Transaction identifier, starting at 1 in file order.
pub type Tid = u32;

/// Immutable collection of transactions.
///
/// The items of each transaction are expected to be sorted in ascending order
/// without duplicates. The support computation relies on binary search and does
/// not check this.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct TransactionStore {
    transactions: Vec<Vec<Item>>,
}

impl TransactionStore {
    /// Creates a store from already tokenized transactions.
    ///
    /// The `i`-th transaction receives identifier `i + 1`.
    ///
    /// # Errors
    ///
    /// [`TopKError`] is returned when the identifiers do not fit in [`Tid`].
    pub fn new<I, T>(transactions: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<Vec<Item>>,
    {
        let transactions: Vec<_> = transactions.into_iter().map(Into::into).collect();
        Self::check_num_transactions(transactions.len())?;
        Ok(Self { transactions })
    }

    fn check_num_transactions(len: usize) -> Result<()> {
        Tid::try_from(len)
            .map(|_| ())
            .map_err(|_| TopKError::invalid_argument("transactions", "too many transactions"))
    }

    /// Loads transactions from a whitespace-separated text dataset,
    /// one transaction per line.
    ///
    /// # Errors
    ///
    /// [`TopKError::TransactionFormat`] is returned at the first token that is not
    /// a valid integer, and [`TopKError::StdIo`] on a read failure.
    pub fn from_reader<R>(rdr: R) -> Result<Self>
    where
        R: Read,
    {
        let mut transactions = vec![];
        for (i, line) in BufReader::new(rdr).lines().enumerate() {
            let line = line?;
            Self::check_num_transactions(i + 1)?;
            let tid = i as Tid + 1;
            let items = Self::parse_line(tid, &line)?;
            debug!(tid, %line, "transaction");
            if !items.windows(2).all(|w| w[0] < w[1]) {
                warn!(tid, %line, "items are not strictly ascending; support may be undercounted");
            }
            transactions.push(items);
        }
        Ok(Self { transactions })
    }

    /// Loads transactions from the file at `path`.
    ///
    /// # Errors
    ///
    /// [`TopKError::DatasetNotFound`] is returned if `path` is not a regular file
    /// that can be opened. See [`TransactionStore::from_reader`] for the other cases.
    pub fn from_path<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound | ErrorKind::PermissionDenied => {
                TopKError::dataset_not_found(path, e)
            }
            _ => TopKError::StdIo(e),
        })?;
        // Directories can be opened on some platforms but not read.
        if file.metadata()?.is_dir() {
            return Err(TopKError::dataset_not_found(
                path,
                std::io::Error::new(ErrorKind::Other, "is a directory"),
            ));
        }
        Self::from_reader(file)
    }

    fn parse_line(tid: Tid, line: &str) -> Result<Vec<Item>> {
        line.split_whitespace()
            .map(|token| {
                token
                    .parse()
                    .map_err(|_| TopKError::transaction_format(tid, line, token))
            })
            .collect()
    }

    /// Gets the number of transactions.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Checks if no transaction is loaded.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Gets the items of transaction `tid`, or `None` if no such transaction exists.
    #[inline(always)]
    pub fn get(&self, tid: Tid) -> Option<&[Item]> {
        let idx = usize::try_from(tid).ok()?.checked_sub(1)?;
        self.transactions.get(idx).map(Vec::as_slice)
    }

    /// Iterates transactions in ascending identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (Tid, &[Item])> + '_ {
        // The length fits in `Tid`; checked on construction.
        self.transactions
            .iter()
            .enumerate()
            .map(|(i, items)| (i as Tid + 1, items.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_reader() {
        let data = "1 2 3\n1 2\n\n  2\t3  \n";
        let store = TransactionStore::from_reader(data.as_bytes()).unwrap();
        assert_eq!(store.len(), 4);
        assert_eq!(store.get(1), Some(&[1, 2, 3][..]));
        assert_eq!(store.get(2), Some(&[1, 2][..]));
        assert_eq!(store.get(3), Some(&[][..]));
        assert_eq!(store.get(4), Some(&[2, 3][..]));
        assert_eq!(store.get(0), None);
        assert_eq!(store.get(5), None);
    }

    #[test]
    fn test_negative_items() {
        let store = TransactionStore::from_reader("-5 -1 7".as_bytes()).unwrap();
        assert_eq!(store.get(1), Some(&[-5, -1, 7][..]));
    }

    #[test]
    fn test_iter_ids() {
        let store = TransactionStore::new([vec![4], vec![5, 6]]).unwrap();
        let ids: Vec<_> = store.iter().map(|(tid, _)| tid).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_invalid_token() {
        let data = "1 2\n3 x 4\n5\n";
        let e = TransactionStore::from_reader(data.as_bytes()).unwrap_err();
        match e {
            TopKError::TransactionFormat(e) => {
                assert_eq!(e.tid(), 2);
                assert_eq!(e.line(), "3 x 4");
                assert_eq!(e.token(), "x");
            }
            _ => panic!("unexpected error: {e}"),
        }
    }

    #[test]
    fn test_overflowing_token() {
        let data = "99999999999";
        assert!(matches!(
            TransactionStore::from_reader(data.as_bytes()),
            Err(TopKError::TransactionFormat(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let e = TransactionStore::from_path("/nonexistent/topkfi/dataset.dat").unwrap_err();
        match e {
            TopKError::DatasetNotFound(e) => {
                assert_eq!(e.path(), Path::new("/nonexistent/topkfi/dataset.dat"));
                assert_eq!(
                    e.to_string(),
                    "The file /nonexistent/topkfi/dataset.dat does not exist!"
                );
            }
            _ => panic!("unexpected error: {e}"),
        }
    }

    #[test]
    fn test_directory_path() {
        let dir = std::env::temp_dir();
        match TransactionStore::from_path(&dir).unwrap_err() {
            TopKError::DatasetNotFound(e) => {
                assert_eq!(e.path(), dir.as_path());
                assert!(e.to_string().ends_with("does not exist!"));
            }
            e => panic!("unexpected error: {e}"),
        }
    }

    #[test]
    fn test_too_many_transactions() {
        assert!(TransactionStore::check_num_transactions(u32::MAX as usize).is_ok());
        assert!(matches!(
            TransactionStore::check_num_transactions(u32::MAX as usize + 1),
            Err(TopKError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_empty() {
        let store = TransactionStore::from_reader("".as_bytes()).unwrap();
        assert!(store.is_empty());
    }
}
