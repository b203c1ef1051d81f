//! Benchmark support for the laptop feature pipeline.
//!
//! - Deterministic synthetic listings (or a CSV of real ones)
//! - Timing utilities for the `benchmarks` report binary
//!
//! Criterion benches live under `benches/`.

pub mod data;
pub mod utils;

pub use data::{load_or_generate, synthetic_listings, SyntheticListings};
pub use laptop_features::metrics::{Metrics, RegressionMetrics};
pub use utils::{benchmark_with_warmup, time_fn, BenchmarkStats, Timer};
