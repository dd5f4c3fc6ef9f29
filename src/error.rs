use thiserror::Error;

/// Errors raised at the crate's flat-buffer boundary.
///
/// The layout itself never fails; see [`crate::process_events`].
#[derive(Debug, Error, PartialEq)]
pub enum LayoutError {
    #[error("flat event buffer length {len} is not a multiple of {fields}")]
    InvalidLength { len: usize, fields: usize },

    #[error("non-finite value at flat buffer index {index}")]
    NonFiniteValue { index: usize },

    #[error("event id '{id}' is not numeric and cannot be flat-encoded")]
    NonNumericId { id: String },
}

pub type LayoutResult<T> = Result<T, LayoutError>;
