use crate::error::{KernelError, Result};

/// Half-open range `[left, right)` over an array's positions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Span {
    pub left: usize,
    pub right: usize,
}

impl Span {
    pub fn new(left: usize, right: usize) -> Self {
        Self { left, right }
    }

    /// The whole of an array of length `len`.
    pub fn full(len: usize) -> Self {
        Self { left: 0, right: len }
    }

    /// Validates `left <= right <= len`.
    pub fn checked(left: usize, right: usize, len: usize) -> Result<Self> {
        if left > right || right > len {
            return Err(KernelError::InvalidSpan { left, right, len });
        }
        Ok(Self { left, right })
    }

    pub fn len(&self) -> usize {
        self.right.saturating_sub(self.left)
    }

    pub fn is_empty(&self) -> bool {
        self.left >= self.right
    }

    /// Midpoint position, biased toward `left`.
    pub fn midpoint(&self) -> usize {
        self.left + (self.right - self.left) / 2
    }

    pub fn contains(&self, position: usize) -> bool {
        self.left <= position && position < self.right
    }
}
