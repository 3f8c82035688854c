use thiserror::Error;

/// Fatal conditions raised by the number engine.
///
/// `x`/`z` bits are *not* errors: they are ordinary domain values that flow
/// through every operator. The variants here all abort the evaluation of the
/// current expression; there is no recoverable-parse mode.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NumberError {
    #[error("malformed literal `{literal}`: {reason}")]
    MalformedLiteral { literal: String, reason: String },

    #[error("bit index {index} out of range for width {width}")]
    OutOfRange { index: usize, width: usize },

    #[error("cannot convert `{value}` to a native integer: {reason}")]
    NonConvertible { value: String, reason: String },

    #[error("unsupported operator token `{token}`")]
    UnsupportedOperator { token: String },
}
