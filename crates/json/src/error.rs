use basalt_array::{AllocError, DataType};
use thiserror::Error;


/// How the decoder treats an element whose JSON type doesn't match
/// the target column.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ErrorPolicy {
    /// Abort decoding at the first mismatched element.
    #[default]
    Fail,
    /// Append a null for a mismatched element and continue.
    NullifySkip
}


/// A JSON value that couldn't be converted to the target type.
#[derive(Clone, Debug, Error)]
#[error("cannot decode {token} as {expected} (element {index}, offset {offset})")]
pub struct TypeMismatch {
    /// Data type of the target column.
    pub expected: DataType,
    /// The offending token, as it appears in the input.
    pub token: String,
    /// Byte offset of the token within the input.
    pub offset: usize,
    /// Zero-based position of the element in the decoded array.
    pub index: usize
}


#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    TypeMismatch(#[from] TypeMismatch),
    #[error(transparent)]
    Alloc(#[from] AllocError)
}


/// Outcome of a completed decode call.
#[derive(Debug, Default)]
pub struct DecodeReport {
    /// Number of elements appended from well-typed tokens.
    pub decoded: usize,
    /// Mismatched elements that were appended as nulls under
    /// [`ErrorPolicy::NullifySkip`].
    pub skipped: Vec<TypeMismatch>
}


impl DecodeReport {
    /// Total number of slots appended to the builder.
    pub fn len(&self) -> usize {
        self.decoded + self.skipped.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
