/// Precondition failures reported by the checked (`try_*`) entry points.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum KernelError {
    #[error("Invalid span [{left}, {right}) for array of length {len}")]
    InvalidSpan { left: usize, right: usize, len: usize },
    #[error("Rank {k} out of range for span of length {span_len}")]
    RankOutOfRange { k: usize, span_len: usize },
    #[error("Index {index} at position {position} is out of bounds for data of length {len}")]
    IndexOutOfBounds {
        position: usize,
        index: usize,
        len: usize,
    },
    #[error("Empty input")]
    EmptyInput,
    #[error("Length mismatch: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },
}

pub type Result<T> = std::result::Result<T, KernelError>;
