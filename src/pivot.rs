use crate::access::SpanAccess;
use crate::element::Element;
use crate::span::Span;

/// Value at the midpoint `(left + right) / 2` of a non-empty span.
///
/// Deterministic: sorted input whose midpoint keeps landing on an extreme
/// degrades to quadratic time. Shuffle first if that matters.
#[inline]
pub fn midpoint_pivot<A: SpanAccess>(access: &A, left: usize, right: usize) -> A::Elem {
    access.value(Span::new(left, right).midpoint())
}

pub fn choose_pivot<T: Element>(data: &[T], left: usize, right: usize) -> T {
    data[Span::new(left, right).midpoint()]
}

pub fn choose_pivot_indices<T: Element>(
    indices: &[usize],
    data: &[T],
    left: usize,
    right: usize,
) -> T {
    data[indices[Span::new(left, right).midpoint()]]
}
