//! Definition of errors.

use std::error::Error;
use std::fmt;
use std::path::PathBuf;

use crate::transaction::Tid;

/// A specialized Result type for TopKFI.
pub type Result<T, E = TopKError> = std::result::Result<T, E>;

/// The error type for TopKFI.
#[derive(Debug)]
pub enum TopKError {
    /// The error variant for [`InvalidArgumentError`].
    InvalidArgument(InvalidArgumentError),

    /// The error variant for [`DatasetNotFoundError`].
    DatasetNotFound(DatasetNotFoundError),

    /// The error variant for [`TransactionFormatError`].
    TransactionFormat(TransactionFormatError),

    /// The error variant for [`std::io::Error`].
    StdIo(std::io::Error),
}

impl TopKError {
    pub(crate) fn invalid_argument<S>(arg: &'static str, msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::InvalidArgument(InvalidArgumentError {
            arg,
            msg: msg.into(),
        })
    }

    pub(crate) fn dataset_not_found<P>(path: P, source: std::io::Error) -> Self
    where
        P: Into<PathBuf>,
    {
        Self::DatasetNotFound(DatasetNotFoundError {
            path: path.into(),
            source,
        })
    }

    pub(crate) fn transaction_format<L, T>(tid: Tid, line: L, token: T) -> Self
    where
        L: Into<String>,
        T: Into<String>,
    {
        Self::TransactionFormat(TransactionFormatError {
            tid,
            line: line.into(),
            token: token.into(),
        })
    }
}

impl fmt::Display for TopKError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidArgument(e) => e.fmt(f),
            Self::DatasetNotFound(e) => e.fmt(f),
            Self::TransactionFormat(e) => e.fmt(f),
            Self::StdIo(e) => e.fmt(f),
        }
    }
}

impl Error for TopKError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::DatasetNotFound(e) => Some(&e.source),
            Self::StdIo(e) => Some(e),
            _ => None,
        }
    }
}

/// Error used when the argument is invalid.
#[derive(Debug)]
pub struct InvalidArgumentError {
    /// Name of the argument.
    pub(crate) arg: &'static str,

    /// Error message.
    pub(crate) msg: String,
}

impl InvalidArgumentError {
    /// Name of the rejected argument.
    pub const fn arg(&self) -> &'static str {
        self.arg
    }
}

impl fmt::Display for InvalidArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InvalidArgumentError: {}: {}", self.arg, self.msg)
    }
}

impl Error for InvalidArgumentError {}

/// Error used when the dataset file cannot be opened.
#[derive(Debug)]
pub struct DatasetNotFoundError {
    pub(crate) path: PathBuf,
    pub(crate) source: std::io::Error,
}

impl DatasetNotFoundError {
    /// Path that was requested.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl fmt::Display for DatasetNotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "The file {} does not exist!", self.path.display())
    }
}

impl Error for DatasetNotFoundError {}

/// Error used when a transaction line holds a token that is not an integer.
///
/// Loading stops at the first such line; nothing is returned.
#[derive(Debug)]
pub struct TransactionFormatError {
    /// Identifier of the transaction, i.e., its 1-based line number.
    pub(crate) tid: Tid,

    /// The raw line.
    pub(crate) line: String,

    /// The token that failed to parse.
    pub(crate) token: String,
}

impl TransactionFormatError {
    /// Identifier (line number) of the offending transaction.
    pub const fn tid(&self) -> Tid {
        self.tid
    }

    /// The raw text of the offending line.
    pub fn line(&self) -> &str {
        &self.line
    }

    /// The token that is not a valid integer.
    pub fn token(&self) -> &str {
        &self.token
    }
}

impl fmt::Display for TransactionFormatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Input format of transaction is wrong! transaction {} is {} (invalid token {:?})",
            self.tid, self.line, self.token
        )
    }
}

impl Error for TransactionFormatError {}

impl From<std::io::Error> for TopKError {
    fn from(error: std::io::Error) -> Self {
        Self::StdIo(error)
    }
}
