//! Multi-threaded blocked Floyd-Warshall.

use std::sync::Barrier;
use std::thread;
use std::time::Instant;

use log::{debug, trace};

use super::schedule::static_chunk;
use crate::blocked::floyd_blocked::floyd_blocked;
use crate::blocked::phase::Phase;
use crate::blocked::tiles::TileGrid;
use crate::kernels::SharedDist;
use crate::matrix::dist::Weight;

/// Blocked Floyd-Warshall on a team of `num_threads` threads.
///
/// The team is created once for the whole run: the calling thread is
/// worker 0 and `num_threads - 1` scoped threads join it. Every worker
/// walks the same pivot / phase sequence and waits on one shared barrier
/// after each phase, three times per pivot. Within a phase the work items
/// are split statically, so each tile has exactly one writer and the
/// matrix needs no locking.
///
/// `num_threads` is used as given (0 counts as 1); use
/// [`choose_thread_count`](super::schedule::choose_thread_count) to size it
/// to the problem.
///
/// # Panics
///
/// Panics if `dist.len() != n * n` or `block` is outside `1..=n`.
pub fn floyd_blocked_mt(dist: &mut [Weight], n: usize, block: usize, num_threads: usize) {
    assert_eq!(dist.len(), n * n, "expected {}x{}={} elements", n, n, n * n);
    assert!(
        (1..=n).contains(&block),
        "block size {} must be in 1..={}",
        block,
        n
    );

    let threads = num_threads.max(1);
    if threads == 1 {
        floyd_blocked(dist, n, block);
        return;
    }

    let grid = TileGrid::new(n, block);
    debug!(
        "blocked floyd-warshall: n={} block={} tiles={}x{} threads={}",
        n,
        block,
        grid.count(),
        grid.count(),
        threads
    );
    let start = Instant::now();

    let shared = SharedDist::new(dist, n);
    let barrier = Barrier::new(threads);

    thread::scope(|s| {
        for tid in 1..threads {
            let shared = &shared;
            let grid = &grid;
            let barrier = &barrier;
            s.spawn(move || run_worker(tid, threads, shared, grid, barrier));
        }
        run_worker(0, threads, &shared, &grid, &barrier);
    });

    debug!("blocked floyd-warshall done in {:.3?}", start.elapsed());
}

fn run_worker(
    tid: usize,
    threads: usize,
    dist: &SharedDist<'_>,
    grid: &TileGrid,
    barrier: &Barrier,
) {
    for m in 0..grid.count() {
        if tid == 0 {
            trace!("pivot tile {}/{}", m + 1, grid.count());
        }

        let mut phase = Some(Phase::FIRST);
        while let Some(p) = phase {
            // Diagonal has a single item, so only worker 0 gets it.
            for idx in static_chunk(p.work_len(grid), tid, threads) {
                // SAFETY: the static split gives each item to one worker,
                // items of a phase never write what another item of the
                // same phase reads or writes, and the barrier below
                // publishes this phase before the next one starts.
                unsafe { p.work_item(grid, m, idx).run(dist, grid, m) };
            }
            barrier.wait();
            phase = p.next();
        }
    }
}
