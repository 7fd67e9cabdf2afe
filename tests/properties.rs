use apsp::threaded::engine::floyd_blocked_mt;
use apsp::verify::check_triangle_inequality;
use apsp::{INF, Weight, floyd_sequential};
use proptest::prelude::*;

/// (n, block, threads, row-major matrix) with a zero diagonal, ~30% INF
/// off the diagonal and small positive weights elsewhere.
fn graph_strategy() -> impl Strategy<Value = (usize, usize, usize, Vec<Weight>)> {
    (1usize..=20).prop_flat_map(|n| {
        (
            Just(n),
            1..=n,
            1usize..=6,
            proptest::collection::vec(prop_oneof![3 => Just(INF), 7 => 1..=50 as Weight], n * n),
        )
            .prop_map(|(n, block, threads, mut data)| {
                for i in 0..n {
                    data[i * n + i] = 0;
                }
                (n, block, threads, data)
            })
    })
}

/// Vertices reachable from `start` following finite input edges.
fn reachable_from(data: &[Weight], n: usize, start: usize) -> Vec<bool> {
    let mut seen = vec![false; n];
    let mut stack = vec![start];
    seen[start] = true;
    while let Some(u) = stack.pop() {
        for v in 0..n {
            if !seen[v] && data[u * n + v] != INF {
                seen[v] = true;
                stack.push(v);
            }
        }
    }
    seen
}

proptest! {
    #[test]
    fn prop_matches_sequential((n, block, threads, data) in graph_strategy()) {
        let mut expected = data.clone();
        floyd_sequential(&mut expected, n);

        let mut got = data.clone();
        floyd_blocked_mt(&mut got, n, block, threads);
        prop_assert_eq!(expected, got);
    }

    #[test]
    fn prop_block_size_does_not_matter((n, _block, threads, data) in graph_strategy()) {
        let mut first = data.clone();
        floyd_blocked_mt(&mut first, n, 1, threads);
        for block in 2..=n {
            let mut got = data.clone();
            floyd_blocked_mt(&mut got, n, block, threads);
            prop_assert_eq!(&first, &got, "block {}", block);
        }
    }

    #[test]
    fn prop_triangle_inequality((n, block, threads, data) in graph_strategy()) {
        let mut got = data;
        floyd_blocked_mt(&mut got, n, block, threads);
        prop_assert!(check_triangle_inequality(&got, n).is_ok());
    }

    #[test]
    fn prop_unreachable_stays_inf((n, block, threads, data) in graph_strategy()) {
        let mut got = data.clone();
        floyd_blocked_mt(&mut got, n, block, threads);
        for i in 0..n {
            let seen = reachable_from(&data, n, i);
            for j in 0..n {
                prop_assert_eq!(got[i * n + j] == INF, !seen[j], "pair ({}, {})", i, j);
            }
        }
    }

    #[test]
    fn prop_idempotent((n, block, threads, data) in graph_strategy()) {
        let mut once = data;
        floyd_blocked_mt(&mut once, n, block, threads);
        let mut twice = once.clone();
        floyd_blocked_mt(&mut twice, n, block, threads);
        prop_assert_eq!(once, twice);
    }
}
