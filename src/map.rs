//! Element-wise maps, in-place fills, and array construction.
use num_traits::{AsPrimitive, NumCast};

use crate::element::Element;

/// New array holding `f(x)` for every element.
pub fn map<T: Element, U>(xs: &[T], f: impl FnMut(T) -> U) -> Vec<U> {
    xs.iter().copied().map(f).collect()
}

/// New array holding `f(i, xs[i])`.
pub fn map_indexed<T: Element, U>(xs: &[T], mut f: impl FnMut(usize, T) -> U) -> Vec<U> {
    xs.iter().enumerate().map(|(i, &x)| f(i, x)).collect()
}

/// Replaces every element with `f(x)` in place.
pub fn fill<T: Element>(xs: &mut [T], mut f: impl FnMut(T) -> T) {
    for x in xs.iter_mut() {
        *x = f(*x);
    }
}

/// Replaces every element with `f(i, x)` in place.
pub fn fill_indexed<T: Element>(xs: &mut [T], mut f: impl FnMut(usize, T) -> T) {
    for (i, x) in xs.iter_mut().enumerate() {
        *x = f(i, *x);
    }
}

/// `xs[i] *= ys[i]` over the common prefix. Integers wrap on overflow.
pub fn multiply_in_place<T: Element>(xs: &mut [T], ys: &[T]) {
    for (x, &y) in xs.iter_mut().zip(ys) {
        *x = x.mul_wrapping(y);
    }
}

/// [`multiply_in_place`] with `ys` of another element type, converted with `as` semantics.
pub fn multiply_in_place_as<T, U>(xs: &mut [T], ys: &[U])
where
    T: Element,
    U: AsPrimitive<T>,
{
    for (x, &y) in xs.iter_mut().zip(ys) {
        *x = x.mul_wrapping(y.as_());
    }
}

/// New array holding `xs[i] * ys[i]` over the common prefix, with `ys` converted to `T`.
pub fn multiply_as<T, U>(xs: &[T], ys: &[U]) -> Vec<T>
where
    T: Element,
    U: AsPrimitive<T>,
{
    xs.iter().zip(ys).map(|(&x, &y)| x.mul_wrapping(y.as_())).collect()
}

/// Array of length `len` with `f(i)` at position `i`.
pub fn make_filled<T>(len: usize, f: impl FnMut(usize) -> T) -> Vec<T> {
    (0..len).map(f).collect()
}

/// `0, 1, ..., len - 1` converted to `T`. Stops early if a position is not
/// representable in `T`.
pub fn make_range<T: Element>(len: usize) -> Vec<T> {
    (0..len).map_while(<T as NumCast>::from).collect()
}
