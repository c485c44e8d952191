//! Element access over a span, either straight into the data or through an
//! index permutation.
//!
//! The partition, select and sort loops are written once against
//! [`SpanAccess`]. [`Direct`] moves the data itself; [`Indirect`] reads
//! `data[indices[pos]]` and only ever permutes `indices`.
use crate::element::Element;

pub trait SpanAccess {
    type Elem: Element;

    /// Number of addressable positions.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Element seen at `position`.
    fn value(&self, position: usize) -> Self::Elem;

    fn swap(&mut self, a: usize, b: usize);
}

/// In-place access to a data slice.
pub struct Direct<'a, T> {
    data: &'a mut [T],
}

impl<'a, T: Element> Direct<'a, T> {
    pub fn new(data: &'a mut [T]) -> Self {
        Self { data }
    }
}

impl<T: Element> SpanAccess for Direct<'_, T> {
    type Elem = T;

    #[inline(always)]
    fn len(&self) -> usize {
        self.data.len()
    }

    #[inline(always)]
    fn value(&self, position: usize) -> T {
        self.data[position]
    }

    #[inline(always)]
    fn swap(&mut self, a: usize, b: usize) {
        self.data.swap(a, b);
    }
}

/// Access through an index array. The data slice is only ever read.
pub struct Indirect<'a, T> {
    indices: &'a mut [usize],
    data: &'a [T],
}

impl<'a, T: Element> Indirect<'a, T> {
    pub fn new(indices: &'a mut [usize], data: &'a [T]) -> Self {
        Self { indices, data }
    }
}

impl<T: Element> SpanAccess for Indirect<'_, T> {
    type Elem = T;

    #[inline(always)]
    fn len(&self) -> usize {
        self.indices.len()
    }

    #[inline(always)]
    fn value(&self, position: usize) -> T {
        self.data[self.indices[position]]
    }

    #[inline(always)]
    fn swap(&mut self, a: usize, b: usize) {
        self.indices.swap(a, b);
    }
}
