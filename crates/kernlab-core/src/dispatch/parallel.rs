//! Parallelization helpers for per-element kernels
//!
//! Generic functions that pick between sequential and rayon-parallel execution
//! based on the number of elements. Every helper returns only after all
//! element invocations have finished, so callers can treat the return as a
//! barrier.

use rayon::prelude::*;

use super::PARALLEL_THRESHOLD;

/// Parallel fold/reduce over elements with automatic threshold-based dispatch.
///
/// This function abstracts the common pattern:
/// ```ignore
/// if data.len() >= PARALLEL_THRESHOLD {
///     data.par_iter()
///         .fold(|| init(), |acc, item| fold_fn(acc, item))
///         .reduce(|| init(), |a, b| reduce_fn(a, b))
/// } else {
///     // sequential version
/// }
/// ```
///
/// `reduce_fn` must be associative; the parallel path combines partial
/// accumulators in an unspecified grouping.
pub fn parallel_fold_reduce<T, A, I, F, R>(data: &[T], init: I, fold_fn: F, reduce_fn: R) -> A
where
    T: Sync,
    A: Send,
    I: Fn() -> A + Sync + Send,
    F: Fn(A, &T) -> A + Sync + Send,
    R: Fn(A, A) -> A + Sync + Send,
{
    if data.len() >= PARALLEL_THRESHOLD {
        data.par_iter()
            .fold(&init, &fold_fn)
            .reduce(&init, &reduce_fn)
    } else {
        data.iter().fold(init(), &fold_fn)
    }
}

/// Parallel iteration over mutable elements with automatic threshold-based dispatch.
///
/// # Example
/// ```ignore
/// parallel_for_each_mut(image.pixels_mut(), |pixel| {
///     *pixel = kernel(*pixel);
/// });
/// ```
pub fn parallel_for_each_mut<T, F>(data: &mut [T], f: F)
where
    T: Send + Sync,
    F: Fn(&mut T) + Sync + Send,
{
    if data.len() >= PARALLEL_THRESHOLD {
        data.par_iter_mut().for_each(&f);
    } else {
        for value in data.iter_mut() {
            f(value);
        }
    }
}

/// Build a vector by evaluating `f` for every index in `0..len`.
///
/// Output order always follows the index order, whichever path runs.
pub fn parallel_map_indexed<U, F>(len: usize, f: F) -> Vec<U>
where
    U: Send,
    F: Fn(usize) -> U + Sync + Send,
{
    if len >= PARALLEL_THRESHOLD {
        (0..len).into_par_iter().map(&f).collect()
    } else {
        (0..len).map(&f).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parallel_fold_reduce_small() {
        // Small dataset - should use sequential path
        let data: Vec<u32> = vec![1, 2, 3, 4, 5, 6];

        let sum = parallel_fold_reduce(&data, || 0u64, |acc, &v| acc + v as u64, |a, b| a + b);

        assert_eq!(sum, 21);
    }

    #[test]
    fn test_parallel_fold_reduce_large() {
        // Large dataset - should use parallel path
        let n = PARALLEL_THRESHOLD + 1000;
        let data: Vec<u32> = (0..n as u32).collect();

        let sum = parallel_fold_reduce(&data, || 0u64, |acc, &v| acc + v as u64, |a, b| a + b);

        let n = n as u64;
        assert_eq!(sum, n * (n - 1) / 2);
    }

    #[test]
    fn test_parallel_for_each_mut_large() {
        let mut data = vec![1u32; PARALLEL_THRESHOLD + 1000];

        parallel_for_each_mut(&mut data, |v| *v *= 3);

        assert!(data.iter().all(|&v| v == 3));
    }

    #[test]
    fn test_parallel_map_indexed_preserves_order() {
        let small = parallel_map_indexed(10, |i| i * 2);
        assert_eq!(small, (0..10).map(|i| i * 2).collect::<Vec<_>>());

        let n = PARALLEL_THRESHOLD * 2;
        let large = parallel_map_indexed(n, |i| i as u64);
        assert!(large.iter().enumerate().all(|(i, &v)| v == i as u64));
    }
}
