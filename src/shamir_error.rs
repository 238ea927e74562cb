/// The three failure families every `ShamirError` belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidParameters,
    DivisionByZero,
    IoFailure,
}

#[derive(Debug, thiserror::Error)]
pub enum ShamirError {
    #[error("Invalid threshold {threshold} for {share_count} shares")]
    InvalidThreshold { threshold: usize, share_count: usize },
    #[error("Expected {expected} shares, got {actual}")]
    ShareCountMismatch { expected: usize, actual: usize },
    #[error("Modulus must be at least 3")]
    InvalidModulus,
    #[error("Too many shares ({share_count}) for this field")]
    TooManyShares { share_count: usize },
    #[error("Value is not below the field modulus")]
    ValueOutOfRange,
    #[error("Encoded value is {actual} bytes, expected {expected}")]
    InvalidEncoding { expected: usize, actual: usize },
    #[error("Malformed share: {0}")]
    MalformedShare(String),
    #[error("Division by zero")]
    DivisionByZero,
    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),
}

impl ShamirError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ShamirError::DivisionByZero => ErrorKind::DivisionByZero,
            ShamirError::Io(_) => ErrorKind::IoFailure,
            _ => ErrorKind::InvalidParameters,
        }
    }
}
