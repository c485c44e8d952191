use crate::element::Element;
use crate::error::Result;
use crate::validate::Validator;

/// First index of a largest value in `xs`, which must be non-empty.
///
/// With floats, the first NaN wins since NaN orders above everything.
pub fn max_index<T: Element>(xs: &[T]) -> usize {
    let mut best = 0;
    let mut m = xs[0];
    for (i, &v) in xs.iter().enumerate().skip(1) {
        if v.is_greater(m) {
            m = v;
            best = i;
        }
    }
    best
}

/// First index of a smallest value in `xs`, which must be non-empty.
pub fn min_index<T: Element>(xs: &[T]) -> usize {
    let mut best = 0;
    let mut m = xs[0];
    for (i, &v) in xs.iter().enumerate().skip(1) {
        if v.is_less(m) {
            m = v;
            best = i;
        }
    }
    best
}

pub fn try_max_index<T: Element>(xs: &[T]) -> Result<usize> {
    Validator::validate_non_empty(xs.len())?;
    Ok(max_index(xs))
}

pub fn try_min_index<T: Element>(xs: &[T]) -> Result<usize> {
    Validator::validate_non_empty(xs.len())?;
    Ok(min_index(xs))
}
