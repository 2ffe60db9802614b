//! Error types for view access.
//!
//! Only element access can fail at run time. Using a capability a cursor
//! does not provide is a compile error, and walking a view never fails.

/// Represents a failed element access on a view.
///
/// # Examples
///
/// ```rust
/// use pipeview::prelude::*;
///
/// let view = all(vec![1, 2, 3]);
/// assert_eq!(
///     view.at(7),
///     Err(ViewError::OutOfRange { index: 7, len: 3 })
/// );
/// assert_eq!(
///     format!("{}", view.at(7).unwrap_err()),
///     "index 7 is out of range for a view of length 3"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    /// An element was requested from an empty view.
    Empty {
        /// The name of the access that failed (`"front"` or `"back"`).
        operation: &'static str,
    },
    /// A bounds-checked index was not below the view's length.
    OutOfRange {
        /// The requested index.
        index: usize,
        /// The length of the view.
        len: usize,
    },
}

impl std::fmt::Display for ViewError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty { operation } => write!(formatter, "{operation}: the view is empty"),
            Self::OutOfRange { index, len } => write!(
                formatter,
                "index {index} is out of range for a view of length {len}"
            ),
        }
    }
}

impl std::error::Error for ViewError {}
