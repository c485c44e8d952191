//! Quicksort over an index permutation.
//!
//! The referenced data is never moved; only the index array is reordered until
//! `data[indices[left]] <= ... <= data[indices[right - 1]]`. Not stable.
use log::trace;

use crate::access::{Indirect, SpanAccess};
use crate::element::Element;
use crate::error::Result;
use crate::index_array;
use crate::partition::{equal_run_start, partition_span};
use crate::pivot::midpoint_pivot;
use crate::validate::Validator;

/// Sorts positions `[left, right)` of `access` into non-decreasing order.
///
/// After partitioning, the run of values equal to the pivot is already in place and is skipped.
/// The smaller of the two remaining sub-spans is sorted recursively and the larger one by the
/// enclosing loop, which caps recursion depth at `log2(right - left)` even when the midpoint
/// pivot keeps picking an extreme.
pub fn sort_span<A: SpanAccess>(access: &mut A, left: usize, right: usize) {
    let mut left = left;
    let mut right = right;
    while right.saturating_sub(left) > 1 {
        let pivot = midpoint_pivot(access, left, right);
        let part = partition_span(access, left, right, pivot);
        let start = equal_run_start(access, left, part, pivot);
        trace!("sort [{left}, {right}): less [{left}, {start}) greater [{part}, {right})");

        if start - left < right - part {
            sort_span(access, left, start);
            left = part;
        } else {
            sort_span(access, part, right);
            right = start;
        }
    }
}

/// Reorders `indices[left..right)` so the values they reference in `data` are non-decreasing.
/// `data` is not modified.
pub fn sort_indices<T: Element>(indices: &mut [usize], data: &[T], left: usize, right: usize) {
    sort_span(&mut Indirect::new(indices, data), left, right);
}

/// Checks the span and that every index in it addresses `data`. Duplicate indices are not
/// detected; see [`index_array::is_permutation`].
pub fn try_sort_indices<T: Element>(
    indices: &mut [usize],
    data: &[T],
    left: usize,
    right: usize,
) -> Result<()> {
    let span = Validator::validate_span(left, right, indices.len())?;
    Validator::validate_indices(indices, span, data.len())?;
    sort_indices(indices, data, left, right);
    Ok(())
}

/// The permutation that sorts `data` (argsort).
pub fn sorted_indices<T: Element>(data: &[T]) -> Vec<usize> {
    let mut indices = index_array::identity(data.len());
    sort_indices(&mut indices, data, 0, data.len());
    indices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::Direct;
    use crate::error::KernelError;

    fn assert_sorted_by<T: Element>(indices: &[usize], data: &[T]) {
        for w in indices.windows(2) {
            assert!(
                !data[w[1]].is_less(data[w[0]]),
                "{:?} before {:?}",
                data[w[0]],
                data[w[1]]
            );
        }
    }

    fn assert_permutation(indices: &[usize]) {
        let mut seen = indices.to_vec();
        seen.sort();
        assert_eq!(seen, (0..indices.len()).collect::<Vec<_>>());
    }

    #[test]
    fn test_sort_three() {
        let data = vec![3.0, 1.0, 2.0];
        let mut indices = vec![0, 1, 2];
        sort_indices(&mut indices, &data, 0, 3);
        assert_eq!(indices, vec![1, 2, 0]);
        assert_eq!(data, vec![3.0, 1.0, 2.0]);
    }

    #[test]
    fn test_sort_trivial_spans() {
        let data = vec![2, 1];
        let mut indices = vec![0, 1];
        sort_indices(&mut indices, &data, 0, 0);
        sort_indices(&mut indices, &data, 1, 2);
        assert_eq!(indices, vec![0, 1]);

        let mut empty: Vec<usize> = vec![];
        sort_indices(&mut empty, &data, 0, 0);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_sort_distinct_values() {
        let data = vec![9, 4, 7, 1, 8, 2, 6, 3, 5, 0];
        let indices = sorted_indices(&data);
        assert_eq!(indices, vec![9, 3, 5, 7, 1, 8, 6, 2, 4, 0]);
    }

    #[test]
    fn test_sort_duplicates() {
        let data = vec![3i64, 1, 3, 2, 1, 3, 2, 2, 1, 3, 3];
        let indices = sorted_indices(&data);
        assert_sorted_by(&indices, &data);
        assert_permutation(&indices);
    }

    #[test]
    fn test_sort_already_sorted_and_reversed() {
        let ascending: Vec<i32> = (0..500).collect();
        assert_eq!(sorted_indices(&ascending), (0..500).collect::<Vec<_>>());

        let descending: Vec<i32> = (0..500).rev().collect();
        assert_eq!(sorted_indices(&descending), (0..500).rev().collect::<Vec<_>>());
    }

    #[test]
    fn test_sort_subspan_only() {
        let data = vec![5.0f32, 4.0, 3.0, 2.0, 1.0];
        let mut indices = vec![0, 1, 2, 3, 4];
        sort_indices(&mut indices, &data, 1, 4);
        assert_eq!(indices, vec![0, 3, 2, 1, 4]);
    }

    #[test]
    fn test_sort_nans_last() {
        let data = vec![f64::NAN, 2.0, -1.0, f64::NAN, 0.5];
        let indices = sorted_indices(&data);
        assert_eq!(&indices[..3], &[2, 4, 1]);
        assert!(data[indices[3]].is_nan() && data[indices[4]].is_nan());
    }

    #[test]
    fn test_sort_span_direct() {
        let mut data = vec![4, 2, 9, 2, 7, 1];
        sort_span(&mut Direct::new(&mut data), 0, 6);
        assert_eq!(data, vec![1, 2, 2, 4, 7, 9]);
    }

    #[test]
    fn test_try_sort_indices_rejects() {
        let data = vec![1, 2];
        let mut indices = vec![0, 2];
        assert_eq!(
            try_sort_indices(&mut indices, &data, 0, 2),
            Err(KernelError::IndexOutOfBounds { position: 1, index: 2, len: 2 })
        );
        assert!(try_sort_indices(&mut indices, &data, 0, 3).is_err());
        let mut indices = vec![1, 0];
        assert!(try_sort_indices(&mut indices, &data, 0, 2).is_ok());
        assert_eq!(indices, vec![0, 1]);
    }
}
