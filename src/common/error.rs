use thiserror::Error;

/// Failure to turn a function name and arguments into call data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodingError {
    #[error("failed to load {contract} abi: {reason}")]
    Load {
        contract: &'static str,
        reason: String,
    },
    #[error("failed to pack {function} function: {reason}")]
    Pack {
        function: &'static str,
        reason: String,
    },
}

/// Failure to read node-provided JSON into a typed value.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("expected exactly 2 elements, got {0}")]
    Arity(usize),
    #[error("invalid hex quantity '{input}': {reason}")]
    Quantity { input: String, reason: &'static str },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid address")]
    InvalidAddress,
    #[error(transparent)]
    Encoding(#[from] EncodingError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}
