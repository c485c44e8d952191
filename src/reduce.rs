//! Straight-line reductions over whole slices.
//!
//! Integer sums and products wrap on overflow. `mean` accumulates in `f64`, so it stays
//! accurate where the element-typed sum would wrap.
use num_traits::AsPrimitive;

use crate::element::Element;
use crate::error::Result;
use crate::extremum::{max_index, min_index};
use crate::validate::Validator;

pub fn sum<T: Element>(xs: &[T]) -> T {
    xs.iter().fold(T::zero(), |acc, &x| acc.add_wrapping(x))
}

pub fn sum_square<T: Element>(xs: &[T]) -> T {
    xs.iter().fold(T::zero(), |acc, &x| acc.add_wrapping(x.mul_wrapping(x)))
}

/// Product of all elements; the empty product is one.
pub fn product<T: Element>(xs: &[T]) -> T {
    xs.iter().fold(T::one(), |acc, &x| acc.mul_wrapping(x))
}

/// Sum of pairwise products over the common prefix of `xs` and `ys`.
pub fn dot_product<T: Element>(xs: &[T], ys: &[T]) -> T {
    xs.iter()
        .zip(ys)
        .fold(T::zero(), |acc, (&x, &y)| acc.add_wrapping(x.mul_wrapping(y)))
}

pub fn try_dot_product<T: Element>(xs: &[T], ys: &[T]) -> Result<T> {
    Validator::validate_same_len(xs.len(), ys.len())?;
    Ok(dot_product(xs, ys))
}

/// Dot product against a second array of another element type, converted with `as` semantics.
pub fn dot_product_as<T, U>(xs: &[T], ys: &[U]) -> T
where
    T: Element,
    U: AsPrimitive<T>,
{
    xs.iter()
        .zip(ys)
        .fold(T::zero(), |acc, (&x, &y)| acc.add_wrapping(x.mul_wrapping(y.as_())))
}

/// Arithmetic mean as `f64`. NaN for an empty slice.
pub fn mean<T: Element>(xs: &[T]) -> f64 {
    let total: f64 = xs.iter().map(|x| x.to_f64().unwrap_or(f64::NAN)).sum();
    total / xs.len() as f64
}

pub fn max<T: Element>(xs: &[T]) -> Option<T> {
    if xs.is_empty() {
        return None;
    }
    Some(xs[max_index(xs)])
}

pub fn min<T: Element>(xs: &[T]) -> Option<T> {
    if xs.is_empty() {
        return None;
    }
    Some(xs[min_index(xs)])
}
