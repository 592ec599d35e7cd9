//! Thin wrappers selecting between rayon and sequential execution.
//!
//! Both variants produce identical results: only the scheduling differs.

/// Runs `a` and `b`, potentially in parallel, and returns both results.
#[inline]
pub(crate) fn fork_join<A, B, RA, RB>(a: A, b: B) -> (RA, RB)
where
    A: FnOnce() -> RA + Send,
    B: FnOnce() -> RB + Send,
    RA: Send,
    RB: Send,
{
    #[cfg(feature = "parallel")]
    {
        rayon::join(a, b)
    }
    #[cfg(not(feature = "parallel"))]
    {
        (a(), b())
    }
}

/// Maps every index of `0..count` through `f` and keeps the output with the
/// smallest key, the lowest index winning ties.
pub(crate) fn map_min_by_key<T, K, F, G>(count: usize, f: F, key: G) -> Option<T>
where
    T: Send,
    K: Ord + Send,
    F: Fn(usize) -> T + Sync + Send,
    G: Fn(&T) -> K + Sync + Send,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        (0..count)
            .into_par_iter()
            .map(|i| (i, f(i)))
            .min_by_key(|(i, out)| (key(out), *i))
            .map(|(_, out)| out)
    }
    #[cfg(not(feature = "parallel"))]
    {
        (0..count)
            .map(|i| (i, f(i)))
            .min_by_key(|(i, out)| (key(out), *i))
            .map(|(_, out)| out)
    }
}

/// Maps every element of `items` through `f`, preserving their order.
pub(crate) fn map_ordered<T, U, F>(items: &[T], f: F) -> Vec<U>
where
    T: Sync,
    U: Send,
    F: Fn(&T) -> U + Sync + Send,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        items.par_iter().map(f).collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        items.iter().map(f).collect()
    }
}
