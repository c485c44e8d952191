/// Positions `start, start + 1, ..., stop - 1`. Empty when `stop <= start`.
pub fn make(start: usize, stop: usize) -> Vec<usize> {
    (start..stop).collect()
}

/// The identity permutation of length `n`.
pub fn identity(n: usize) -> Vec<usize> {
    make(0, n)
}

pub fn swap(indices: &mut [usize], i: usize, j: usize) {
    indices.swap(i, j);
}

/// True when every value in `0..indices.len()` occurs exactly once.
pub fn is_permutation(indices: &[usize]) -> bool {
    let mut seen = vec![false; indices.len()];
    for &i in indices {
        match seen.get_mut(i) {
            Some(slot) if !*slot => *slot = true,
            _ => return false,
        }
    }
    true
}
