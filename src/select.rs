//! Quickselect moves the k smallest elements of a span to its front without sorting it.
//!
//! Each round partitions three ways around the midpoint value. When the rank lands inside the run
//! of values equal to the pivot the round is done, so inputs made of a few repeated values stay
//! close to linear instead of re-partitioning the same duplicates over and over.
//!
//! A span whose first `k` elements are already no greater than the rest is left exactly as it is,
//! so selecting twice with the same `k` moves nothing the second time.
use log::trace;

use crate::access::{Direct, Indirect, SpanAccess};
use crate::element::Element;
use crate::error::Result;
use crate::index_array;
use crate::partition::{equal_run_start, partition_span};
use crate::pivot::midpoint_pivot;
use crate::validate::Validator;

/// Rearranges `[left, right)` so that `[left, left + k)` holds the `k` smallest elements of the
/// span, in no particular order. `k` counts from `left`.
///
/// `k` must be in `0..=right - left`; anything larger is treated as the whole span.
pub fn select_span<A: SpanAccess>(access: &mut A, left: usize, right: usize, k: usize) {
    if is_selected(access, left, right, k) {
        trace!("select [{left}, {right}) k={k}: already selected");
        return;
    }
    let mut left = left;
    let mut right = right;
    let mut k = k;
    loop {
        if k == 0 || k >= right.saturating_sub(left) {
            return;
        }

        let pivot = midpoint_pivot(access, left, right);
        let part = partition_span(access, left, right, pivot);
        // Number of span elements <= pivot, always at least one since the pivot came from here.
        let below = part - left;
        trace!("select [{left}, {right}) k={k}: boundary {part}");

        if below < k {
            // The prefix is settled, look for the rest past it.
            left = part;
            k -= below;
        } else if k < below {
            let floor = left + k;
            let start = equal_run_start(access, floor, part, pivot);
            if start <= floor {
                // Rank falls inside the equal run.
                return;
            }
            right = start;
        } else {
            return;
        }
    }
}

/// True when no element of `[left, left + k)` is greater than an element of `[left + k, right)`.
fn is_selected<A: SpanAccess>(access: &A, left: usize, right: usize, k: usize) -> bool {
    let split = left.saturating_add(k);
    if k == 0 || split >= right {
        return true;
    }
    let mut prefix_max = access.value(left);
    for pos in left + 1..split {
        let v = access.value(pos);
        if v.is_greater(prefix_max) {
            prefix_max = v;
        }
    }
    (split..right).all(|pos| !access.value(pos).is_less(prefix_max))
}

/// Moves the `k` smallest elements of `data[left..right)` to `data[left..left + k)`.
pub fn select<T: Element>(data: &mut [T], left: usize, right: usize, k: usize) {
    select_span(&mut Direct::new(data), left, right, k);
}

/// Like [`select`], but permutes `indices[left..right)` so that the first `k` of them point at
/// the `k` smallest referenced values. `data` is not modified.
pub fn select_indices<T: Element>(
    indices: &mut [usize],
    data: &[T],
    left: usize,
    right: usize,
    k: usize,
) {
    select_span(&mut Indirect::new(indices, data), left, right, k);
}

pub fn try_select<T: Element>(data: &mut [T], left: usize, right: usize, k: usize) -> Result<()> {
    let span = Validator::validate_span(left, right, data.len())?;
    Validator::validate_rank(span, k)?;
    select(data, left, right, k);
    Ok(())
}

pub fn try_select_indices<T: Element>(
    indices: &mut [usize],
    data: &[T],
    left: usize,
    right: usize,
    k: usize,
) -> Result<()> {
    let span = Validator::validate_span(left, right, indices.len())?;
    Validator::validate_rank(span, k)?;
    Validator::validate_indices(indices, span, data.len())?;
    select_indices(indices, data, left, right, k);
    Ok(())
}

/// Positions of the `k` smallest values of `data`, in no particular order.
/// Asking for more than `data.len()` returns every position.
pub fn smallest_k_indices<T: Element>(data: &[T], k: usize) -> Vec<usize> {
    let k = k.min(data.len());
    let mut indices = index_array::identity(data.len());
    select_indices(&mut indices, data, 0, data.len(), k);
    indices.truncate(k);
    indices
}
