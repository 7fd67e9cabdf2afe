//! Static work partitioning and thread-count selection.

use std::ops::Range;

use crate::blocked::tiles::TileGrid;

/// Contiguous share of `len` items for thread `tid` out of `threads`.
///
/// Same split as OpenMP `schedule(static)`: chunks of `len / threads`,
/// with the first `len % threads` threads taking one extra item. Threads
/// past the end of the work get an empty range.
pub fn static_chunk(len: usize, tid: usize, threads: usize) -> Range<usize> {
    debug_assert!(tid < threads);
    let base = len / threads;
    let extra = len % threads;
    let start = tid * base + tid.min(extra);
    let size = base + usize::from(tid < extra);
    start..start + size
}

/// Pick how many threads to actually use for an `n`-vertex run.
///
/// Small problems don't pay for the thread team and the barriers:
/// - < 2M relaxations: 1 thread
/// - < 16M relaxations: up to 2 threads
/// - Otherwise: up to `max_threads`
///
/// Never more threads than the widest phase has tiles to hand out.
pub fn choose_thread_count(n: usize, block: usize, max_threads: usize) -> usize {
    let relaxations = n * n * n;

    const SINGLE_THREAD_THRESHOLD: usize = 2_000_000;
    const TWO_THREAD_THRESHOLD: usize = 16_000_000;

    let optimal_threads = if relaxations < SINGLE_THREAD_THRESHOLD {
        1
    } else if relaxations < TWO_THREAD_THRESHOLD {
        2
    } else {
        max_threads
    };

    let others = TileGrid::new(n, block).count().saturating_sub(1);
    let threads_by_tiles = (others * others).max(2 * others).max(1);

    optimal_threads
        .min(threads_by_tiles)
        .min(max_threads)
        .max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_chunk_covers_everything_once() {
        for len in 0..30 {
            for threads in 1..9 {
                let mut next = 0;
                for tid in 0..threads {
                    let r = static_chunk(len, tid, threads);
                    assert_eq!(r.start, next, "len={} threads={} tid={}", len, threads, tid);
                    next = r.end;
                }
                assert_eq!(next, len);
            }
        }
    }

    #[test]
    fn test_static_chunk_front_loads_remainder() {
        assert_eq!(static_chunk(10, 0, 4), 0..3);
        assert_eq!(static_chunk(10, 1, 4), 3..6);
        assert_eq!(static_chunk(10, 2, 4), 6..8);
        assert_eq!(static_chunk(10, 3, 4), 8..10);
        assert_eq!(static_chunk(2, 3, 4), 2..2);
    }

    #[test]
    fn test_adaptive_threading() {
        // 100^3 = 1M relaxations: one thread
        assert_eq!(choose_thread_count(100, 16, 8), 1);

        // 200^3 = 8M: two threads
        assert_eq!(choose_thread_count(200, 16, 8), 2);

        // 500^3 = 125M: everything requested
        assert_eq!(choose_thread_count(500, 32, 8), 8);

        // a single tile leaves nothing to share
        assert_eq!(choose_thread_count(500, 500, 8), 1);

        // two tiles: widest phase is the two cross tiles
        assert_eq!(choose_thread_count(500, 250, 8), 2);

        // zero requested still yields a worker
        assert_eq!(choose_thread_count(500, 32, 0), 1);
    }
}
