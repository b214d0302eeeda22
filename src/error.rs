//! Error types for Arbol operations.
//!
//! Provides rich error context for library consumers.

use std::fmt;

use crate::instance::AttrValue;

/// Main error type for Arbol operations.
///
/// Covers dataset validation failures (missing labels, ragged attribute
/// vectors), tree construction misuse, fold-count violations, and I/O or
/// parse failures from the dataset loader.
///
/// # Examples
///
/// ```
/// use arbol::error::ArbolError;
///
/// let err = ArbolError::RaggedInstances { expected: 4, actual: 3 };
/// assert!(err.to_string().contains("varying lengths"));
/// ```
#[derive(Debug)]
pub enum ArbolError {
    /// An operation requiring supervision was given an unlabeled instance.
    MissingLabel,

    /// Training instances disagree on attribute-vector length.
    RaggedInstances {
        /// Attribute count of the first instance
        expected: usize,
        /// Conflicting attribute count
        actual: usize,
    },

    /// A model was asked to train on zero instances.
    EmptyTrainingSet,

    /// A fitted model was required but `fit` has not been called.
    NotFitted,

    /// A child was added under an attribute value that already has one.
    DuplicateChild {
        /// The attribute value that already maps to a child
        value: AttrValue,
    },

    /// A pruned fold was requested without a validation slice.
    MissingValidation,

    /// More folds were requested than there are instances.
    TooManyFolds {
        /// Requested fold count
        folds: usize,
        /// Available instance count
        instances: usize,
    },

    /// Fewer instances than the minimum fold count for the strategy.
    TooFewFolds {
        /// Minimum fold count for the fold strategy
        min_folds: usize,
    },

    /// I/O error (file not found, permission denied, etc.).
    Io(std::io::Error),

    /// Malformed row in a dataset file.
    Parse {
        /// 1-based line number
        line: usize,
        /// Error description
        message: String,
    },

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for ArbolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArbolError::MissingLabel => write!(f, "missing instance label"),
            ArbolError::RaggedInstances { expected, actual } => {
                write!(
                    f,
                    "instances have attribute lists of varying lengths: expected {expected}, got {actual}"
                )
            }
            ArbolError::EmptyTrainingSet => {
                write!(f, "cannot fit on an empty training set")
            }
            ArbolError::NotFitted => write!(f, "model not fitted; call fit() first"),
            ArbolError::DuplicateChild { value } => {
                write!(
                    f,
                    "attempted to add a child with an existing attribute value: {value}"
                )
            }
            ArbolError::MissingValidation => {
                write!(f, "pruned fold requires a validation slice")
            }
            ArbolError::TooManyFolds { .. } => {
                write!(f, "Cannot have more folds than instances")
            }
            ArbolError::TooFewFolds { min_folds } => {
                write!(f, "Need at least {min_folds} folds.")
            }
            ArbolError::Io(e) => write!(f, "I/O error: {e}"),
            ArbolError::Parse { line, message } => {
                write!(f, "parse error on line {line}: {message}")
            }
            ArbolError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for ArbolError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ArbolError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ArbolError {
    fn from(err: std::io::Error) -> Self {
        ArbolError::Io(err)
    }
}

impl From<&str> for ArbolError {
    fn from(msg: &str) -> Self {
        ArbolError::Other(msg.to_string())
    }
}

impl From<String> for ArbolError {
    fn from(msg: String) -> Self {
        ArbolError::Other(msg)
    }
}

impl ArbolError {
    /// Create an empty input error
    #[must_use]
    pub fn empty_input(context: &str) -> Self {
        Self::Other(format!("empty input: {context}"))
    }
}

#[allow(clippy::cmp_owned)]
impl PartialEq<&str> for ArbolError {
    fn eq(&self, other: &&str) -> bool {
        self.to_string() == *other
    }
}

#[allow(clippy::cmp_owned)]
impl PartialEq<ArbolError> for &str {
    fn eq(&self, other: &ArbolError) -> bool {
        *self == other.to_string()
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, ArbolError>;
