//! Precondition checks behind the `try_*` entry points.
//!
//! The unchecked kernels trust their arguments; these run first when the
//! caller asks for a [`KernelError`] instead of a panic or a meaningless result.
use log::debug;

use crate::error::{KernelError, Result};
use crate::span::Span;

pub struct Validator;

impl Validator {
    pub fn validate_span(left: usize, right: usize, len: usize) -> Result<Span> {
        Span::checked(left, right, len).inspect_err(|err| debug!("rejected span: {err}"))
    }

    /// `k` may be anything in `0..=span.len()`.
    pub fn validate_rank(span: Span, k: usize) -> Result<()> {
        if k > span.len() {
            let err = KernelError::RankOutOfRange {
                k,
                span_len: span.len(),
            };
            debug!("rejected rank: {err}");
            return Err(err);
        }
        Ok(())
    }

    /// Every index inside `span` must address `data_len`.
    pub fn validate_indices(indices: &[usize], span: Span, data_len: usize) -> Result<()> {
        for position in span.left..span.right {
            let index = indices[position];
            if index >= data_len {
                let err = KernelError::IndexOutOfBounds {
                    position,
                    index,
                    len: data_len,
                };
                debug!("rejected index array: {err}");
                return Err(err);
            }
        }
        Ok(())
    }

    pub fn validate_non_empty(len: usize) -> Result<()> {
        if len == 0 {
            debug!("rejected empty input");
            return Err(KernelError::EmptyInput);
        }
        Ok(())
    }

    pub fn validate_same_len(left: usize, right: usize) -> Result<()> {
        if left != right {
            let err = KernelError::LengthMismatch { left, right };
            debug!("rejected paired input: {err}");
            return Err(err);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_bounds() {
        let span = Span::new(2, 5);
        assert!(Validator::validate_rank(span, 0).is_ok());
        assert!(Validator::validate_rank(span, 3).is_ok());
        assert_eq!(
            Validator::validate_rank(span, 4),
            Err(KernelError::RankOutOfRange { k: 4, span_len: 3 })
        );
    }

    #[test]
    fn indices_checked_only_inside_span() {
        let indices = vec![99, 0, 1, 99];
        assert!(Validator::validate_indices(&indices, Span::new(1, 3), 2).is_ok());
        assert_eq!(
            Validator::validate_indices(&indices, Span::new(0, 3), 2),
            Err(KernelError::IndexOutOfBounds {
                position: 0,
                index: 99,
                len: 2
            })
        );
    }

    #[test]
    fn empty_and_mismatch() {
        assert_eq!(Validator::validate_non_empty(0), Err(KernelError::EmptyInput));
        assert!(Validator::validate_non_empty(1).is_ok());
        assert!(Validator::validate_same_len(3, 3).is_ok());
        assert_eq!(
            Validator::validate_same_len(3, 4),
            Err(KernelError::LengthMismatch { left: 3, right: 4 })
        );
    }
}
