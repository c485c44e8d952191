//! Primitive-array kernels: order statistics, reductions, maps and fills over
//! `f64`, `f32`, `i32` and `i64` slices.
//!
//! The order-statistics engine ([`partition`], [`select`], [`sort_indices`])
//! is written once against [`SpanAccess`] and runs either directly on the data
//! or indirectly through an index permutation, leaving the data untouched.
//!
//! ```
//! let mut data = vec![5, 3, 8, 1, 9, 2];
//! primkern::select(&mut data, 0, 6, 3);
//! let mut smallest = data[..3].to_vec();
//! smallest.sort();
//! assert_eq!(smallest, vec![1, 2, 3]);
//!
//! let prices = [3.0, 1.0, 2.0];
//! let mut order = primkern::index_array::identity(3);
//! primkern::sort_indices(&mut order, &prices, 0, 3);
//! assert_eq!(order, vec![1, 2, 0]);
//! ```
//!
//! Every operation trusts its arguments. The `try_*` variants check spans,
//! ranks and index bounds first and report a [`KernelError`].
pub mod access;
pub mod element;
pub mod error;
pub mod extremum;
pub mod index_array;
pub mod map;
pub mod partition;
pub mod pivot;
pub mod reduce;
pub mod select;
pub mod sort;
pub mod span;
pub mod validate;

pub use access::{Direct, Indirect, SpanAccess};
pub use element::Element;
pub use error::{KernelError, Result};
pub use extremum::{max_index, min_index, try_max_index, try_min_index};
pub use partition::{
    partition, partition_indices, partition_span, try_partition, try_partition_indices,
};
pub use pivot::{choose_pivot, choose_pivot_indices};
pub use select::{
    select, select_indices, select_span, smallest_k_indices, try_select, try_select_indices,
};
pub use sort::{sort_indices, sort_span, sorted_indices, try_sort_indices};
pub use span::Span;
