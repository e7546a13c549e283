//! Fatal errors raised by the grouping transform.
//!
//! Anything not listed here (short rows, unparseable ordering values,
//! unterminated quotes) is recovered where it is found and never surfaces.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegroupError {
    /// The input contained no lines at all.
    #[error("Input is empty")]
    EmptyInput,

    /// A required column name is absent from the header.
    #[error("Header does not contain '{column}' column")]
    MissingColumn { column: String },
}
