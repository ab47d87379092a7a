//! Error types for coref-score.

use thiserror::Error;

/// Result type for coref-score operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for coref-score operations.
///
/// Undefined 0/0 ratios are not errors; they surface as NaN in the resulting
/// [`crate::PrecisionRecall`].
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// An element appears in more than one group of the same partition.
    ///
    /// The key and response partitions must each be internally disjoint.
    /// This indicates broken partition construction upstream and is fatal to
    /// the scoring call.
    #[error("Element {0} appears in more than one equivalence class")]
    DuplicateElement(String),

    /// A scoring method tag was not recognized.
    ///
    /// A configuration bug rather than a data error; there is nothing to
    /// retry.
    #[error("Unknown scoring method: {0}")]
    UnknownMethod(String),
}

impl Error {
    /// Create a duplicate-element error naming the offending element.
    pub fn duplicate_element(element: impl std::fmt::Debug) -> Self {
        Error::DuplicateElement(format!("{element:?}"))
    }

    /// Create an unknown-method error.
    pub fn unknown_method(name: impl Into<String>) -> Self {
        Error::UnknownMethod(name.into())
    }
}
