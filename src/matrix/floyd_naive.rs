use super::dist::{INF, Weight};

/// Unblocked k-i-j Floyd-Warshall.
///
/// The textbook triple loop: for every intermediate vertex `k`, try to
/// improve every `dist[i][j]` through `k`. Pairs where either leg is
/// [`INF`] are skipped without adding. Used as the correctness oracle the
/// blocked versions are compared against.
///
/// # Arguments
///
/// * `dist` - N×N distance matrix, row-major, relaxed in place
/// * `n` - Number of vertices
///
/// # Example
///
/// ```
/// use apsp::matrix::floyd_naive::floyd_sequential;
/// use apsp::INF;
///
/// let mut dist = vec![0, 5, INF,
///                     INF, 0, 3,
///                     INF, INF, 0];
/// floyd_sequential(&mut dist, 3);
///
/// assert_eq!(dist[2], 8);        // 0 -> 1 -> 2
/// assert_eq!(dist[3], INF);      // no way back from 1 to 0
/// ```
pub fn floyd_sequential(dist: &mut [Weight], n: usize) {
    assert_eq!(dist.len(), n * n, "expected {}x{}={} elements", n, n, n * n);

    for k in 0..n {
        for i in 0..n {
            let dik = dist[i * n + k];
            if dik == INF {
                continue;
            }
            for j in 0..n {
                let dkj = dist[k * n + j];
                if dkj == INF {
                    continue;
                }
                let candidate = dik + dkj;
                if candidate < dist[i * n + j] {
                    dist[i * n + j] = candidate;
                }
            }
        }
    }
}
