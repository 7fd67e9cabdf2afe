//! Benchmark runner for blocked all-pairs shortest paths.

use std::time::Instant;

use apsp::matrix::generate::random_dense;
use apsp::threaded::engine::floyd_blocked_mt;
use apsp::verify::verify_against_reference;
use apsp::{Result, Weight, floyd_sequential};
use clap::Parser;
use log::{debug, error, info};

/// Times the unblocked and blocked Floyd-Warshall on random dense graphs.
#[derive(Parser, Debug)]
#[command(name = "apsp")]
#[command(about = "Benchmark blocked parallel Floyd-Warshall against the sequential version")]
struct Cli {
    /// Graph sizes (vertices)
    #[arg(long, value_delimiter = ',', default_value = "500,1000,1500")]
    sizes: Vec<usize>,

    /// Candidate block sizes; the fastest one is reported per size
    #[arg(long, value_delimiter = ',', default_value = "32,48,64")]
    blocks: Vec<usize>,

    /// Worker threads (defaults to the number of CPUs)
    #[arg(short, long)]
    threads: Option<usize>,

    /// Seed for the random graphs
    #[arg(long, default_value_t = 1234)]
    seed: u64,

    /// Timed runs per measurement
    #[arg(long, default_value_t = 1)]
    iterations: usize,

    /// Don't time the sequential version (speedup is not reported)
    #[arg(long)]
    skip_sequential: bool,

    /// Don't check blocked results against the sequential version
    #[arg(long)]
    no_verify: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .target(env_logger::Target::Stderr)
        .init();

    if let Err(e) = run(&cli) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let threads = cli.threads.unwrap_or_else(num_cpus::get).max(1);
    let iterations = cli.iterations.max(1);

    println!("=== Blocked Floyd-Warshall Benchmark ===\n");
    println!("Threads: {}", threads);
    println!("INF = {}\n", apsp::INF);

    let mut summary = Vec::new();

    for &n in &cli.sizes {
        if n == 0 {
            continue;
        }
        println!("==== N = {} ====", n);
        println!("{}", "-".repeat(50));

        let base = random_dense(n, cli.seed);
        debug!("generated {}x{} graph with seed {}", n, n, cli.seed);

        let t_seq = if cli.skip_sequential {
            None
        } else {
            let t = bench_fn(base.as_slice(), iterations, |d| floyd_sequential(d, n));
            println!("Sequential time: {:.3} s", t);
            Some(t)
        };

        let mut best: Option<(usize, f64)> = None;
        for &block in &cli.blocks {
            if block == 0 || block > n {
                info!("skipping block size {} for n = {}", block, n);
                continue;
            }

            let t = bench_fn(base.as_slice(), iterations, |d| {
                floyd_blocked_mt(d, n, block, threads)
            });
            println!("  Block size {:>3} -> {:.3} s", block, t);

            if !cli.no_verify {
                let mut out = base.as_slice().to_vec();
                floyd_blocked_mt(&mut out, n, block, threads);
                verify_against_reference(base.as_slice(), &out, n)?;
                debug!("block size {} verified against sequential result", block);
            }

            if best.is_none_or(|(_, best_t)| t < best_t) {
                best = Some((block, t));
            }
        }

        if let Some((block, t)) = best {
            println!("Best blocked time: {:.3} s  (B = {})", t, block);
            if let Some(t_seq) = t_seq {
                println!("Speedup (seq / best_blocked) = {:.2}x", t_seq / t);
            }
            summary.push((n, t_seq, block, t));
        }
        println!();
    }

    print_summary_table(&summary);
    Ok(())
}

/// Average wall time in seconds of `f` over `iterations` runs, each on a
/// fresh copy of `base`.
fn bench_fn<F>(base: &[Weight], iterations: usize, f: F) -> f64
where
    F: Fn(&mut [Weight]),
{
    let mut total = 0.0;
    for _ in 0..iterations {
        let mut dist = base.to_vec();
        let start = Instant::now();
        f(&mut dist);
        total += start.elapsed().as_secs_f64();
    }
    total / iterations as f64
}

fn print_summary_table(summary: &[(usize, Option<f64>, usize, f64)]) {
    if summary.is_empty() {
        return;
    }
    println!("{}", "=".repeat(64));
    println!("SUMMARY");
    println!("{}", "=".repeat(64));
    println!(
        "{:>8} {:>14} {:>8} {:>14} {:>12}",
        "N", "Sequential", "Best B", "Blocked", "Speedup"
    );
    println!("{}", "-".repeat(64));
    for &(n, t_seq, block, t) in summary {
        match t_seq {
            Some(t_seq) => println!(
                "{:>8} {:>12.3} s {:>8} {:>12.3} s {:>11.2}x",
                n,
                t_seq,
                block,
                t,
                t_seq / t
            ),
            None => println!(
                "{:>8} {:>14} {:>8} {:>12.3} s {:>12}",
                n, "-", block, t, "-"
            ),
        }
    }
    println!("{}", "=".repeat(64));
}
