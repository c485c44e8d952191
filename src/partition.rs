//! Three-way partitioning around a pivot value.
//!
//! After a call the span reads `[ < pivot | == pivot | > pivot ]` with no order
//! inside each zone. The returned boundary is where the "greater" zone starts.
use crate::access::{Direct, Indirect, SpanAccess};
use crate::element::Element;
use crate::error::Result;
use crate::validate::Validator;

/// Partitions `[left, right)` of `access` around `pivot` in a single pass and
/// returns one past the last position holding a value `<= pivot`.
///
/// `pivot` does not have to occur in the span. An empty span returns `left`.
pub fn partition_span<A: SpanAccess>(
    access: &mut A,
    left: usize,
    right: usize,
    pivot: A::Elem,
) -> usize {
    // [left, less) < pivot, [less, k) == pivot, [greater, right) > pivot.
    let mut less = left;
    let mut greater = right;
    let mut k = left;
    while k < greater {
        while access.value(k).is_greater(pivot) {
            greater -= 1;
            if greater == k {
                // Everything from k onwards is already known to be greater.
                return greater;
            }
            access.swap(greater, k);
        }
        if access.value(k).is_less(pivot) {
            if less < k {
                access.swap(less, k);
            }
            less += 1;
        }
        k += 1;
    }
    greater
}

/// Start of the run of values tying `pivot` that ends just before `boundary`.
///
/// `boundary` must come from [`partition_span`] with a pivot taken from the
/// span, so `boundary - 1` holds a tie. The walk stops early at `floor`:
/// callers only care whether the run reaches that far down.
pub(crate) fn equal_run_start<A: SpanAccess>(
    access: &A,
    floor: usize,
    boundary: usize,
    pivot: A::Elem,
) -> usize {
    debug_assert!(access.value(boundary - 1).is_tie(pivot));
    let mut start = boundary - 1;
    while start > floor && access.value(start - 1).is_tie(pivot) {
        start -= 1;
    }
    start
}

/// Partitions `data[left..right)` in place around `pivot`.
pub fn partition<T: Element>(data: &mut [T], left: usize, right: usize, pivot: T) -> usize {
    partition_span(&mut Direct::new(data), left, right, pivot)
}

/// Partitions `indices[left..right)` by the values they reference in `data`.
/// `data` is not modified.
pub fn partition_indices<T: Element>(
    indices: &mut [usize],
    data: &[T],
    left: usize,
    right: usize,
    pivot: T,
) -> usize {
    partition_span(&mut Indirect::new(indices, data), left, right, pivot)
}

pub fn try_partition<T: Element>(
    data: &mut [T],
    left: usize,
    right: usize,
    pivot: T,
) -> Result<usize> {
    Validator::validate_span(left, right, data.len())?;
    Ok(partition(data, left, right, pivot))
}

pub fn try_partition_indices<T: Element>(
    indices: &mut [usize],
    data: &[T],
    left: usize,
    right: usize,
    pivot: T,
) -> Result<usize> {
    let span = Validator::validate_span(left, right, indices.len())?;
    Validator::validate_indices(indices, span, data.len())?;
    Ok(partition_indices(indices, data, left, right, pivot))
}
