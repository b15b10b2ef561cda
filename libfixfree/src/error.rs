//! Error types for fixed-to-free conversion.

use thiserror::Error;

/// Result type for conversion operations.
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Why a conversion could not run.
///
/// All of these are recoverable by the user (move the cursor, pick a
/// different line); none of them mutate the document. Missing optional
/// columns are not errors: extraction defaults them to empty text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// The current line has no text at all.
    #[error("empty text")]
    EmptyText,

    /// Fewer than six columns cannot hold a fixed-format spec.
    #[error("line too short")]
    LineTooShort,

    /// The spec letter in column 6 is not one the converter handles.
    #[error("not a convertible specification: {0:?}")]
    NotConvertible(char),

    /// The declaration path was reached on a line that is not a D- or
    /// P-spec.
    #[error("not a D- or P-spec")]
    NotDeclaration,

    /// The declaration's definition type cannot head a conversion; the
    /// cursor is probably in the middle of a structure.
    #[error("unusable spec, cursor in the middle of a structure? def type {0:?}")]
    MidStructure(String),
}
