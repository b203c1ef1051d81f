//! Quick timing report for fit and transform.
//!
//! Usage: cargo run --release --package benchmarks [-- path/to/laptops.csv]
//!
//! Without a path, synthetic tables of several sizes are used. For
//! statistically sound numbers run `cargo bench --package benchmarks`.

use benchmarks::{benchmark_with_warmup, load_or_generate, time_fn, Timer};
use laptop_features::dataset::RawTable;
use laptop_features::{FeaturePipeline, PipelineError};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const SIZES: [usize; 3] = [1_000, 10_000, 50_000];
const WARMUP: usize = 2;
const ITERATIONS: usize = 10;

fn report(label: &str, table: &RawTable) -> Result<(), PipelineError> {
    let pipeline = FeaturePipeline::default();
    let (fitted, cold_fit) = time_fn(|| pipeline.fit(table));
    let (state, features) = fitted?;

    println!(
        "{label}: {} rows -> {} x {} (cold fit {:.3} ms)",
        table.len(),
        features.n_rows(),
        features.n_columns(),
        cold_fit.as_secs_f64() * 1000.0
    );

    let (fits, fit_stats) = benchmark_with_warmup(WARMUP, ITERATIONS, || pipeline.fit(table));
    if let Some(err) = fits.into_iter().find_map(Result::err) {
        return Err(err);
    }
    let (transforms, transform_stats) =
        benchmark_with_warmup(WARMUP, ITERATIONS, || state.transform(table));
    if let Some(err) = transforms.into_iter().find_map(Result::err) {
        return Err(err);
    }

    if let Some(stats) = fit_stats {
        println!("  fit       {}", stats);
    }
    if let Some(stats) = transform_stats {
        println!("  transform {}", stats);
    }
    Ok(())
}

fn main() -> Result<(), PipelineError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    println!("Laptop feature pipeline timings");
    println!();

    let mut reporting = Timer::new();

    match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => {
            let (table, load_time) = time_fn(|| load_or_generate(Some(&path), 0));
            let table = table?;
            info!(path = %path.display(), ms = load_time.as_secs_f64() * 1000.0, "loaded listings");
            reporting.start();
            report(&path.display().to_string(), &table)?;
            reporting.stop();
        }
        None => {
            for n in SIZES {
                let table = load_or_generate(None, n)?;
                reporting.start();
                let outcome = report("synthetic", &table);
                let lap = reporting.stop();
                match outcome {
                    Ok(()) => info!(rows = n, ms = lap.as_secs_f64() * 1000.0, "size done"),
                    Err(err) => warn!(rows = n, error = %err, "skipping size"),
                }
            }
        }
    }

    println!();
    println!("Total measuring time: {:.1} ms", reporting.total_ms());
    println!("Criterion benches: cargo bench --package benchmarks --bench feature_pipeline");
    Ok(())
}
