use std::fmt;
use std::time::{Duration, Instant};

/// Accumulating stopwatch.
#[derive(Debug, Default)]
pub struct Timer {
    start: Option<Instant>,
    total: Duration,
}

impl Timer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self) {
        self.start = Some(Instant::now());
    }

    /// Stop the timer and add the lap to the total. Returns the lap.
    pub fn stop(&mut self) -> Duration {
        match self.start.take() {
            Some(start) => {
                let lap = start.elapsed();
                self.total += lap;
                lap
            }
            None => Duration::ZERO,
        }
    }

    pub fn total(&self) -> Duration {
        self.total
    }

    pub fn total_ms(&self) -> f64 {
        self.total.as_secs_f64() * 1000.0
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Run `f` once and return its result with the elapsed time.
pub fn time_fn<F, R>(f: F) -> (R, Duration)
where
    F: FnOnce() -> R,
{
    let start = Instant::now();
    let result = f();
    (result, start.elapsed())
}

/// Run `f` `warmup` times unmeasured, then `iterations` times measured.
///
/// Returns the measured results and their timing statistics, or `None` for
/// zero iterations.
pub fn benchmark_with_warmup<F, R>(
    warmup: usize,
    iterations: usize,
    mut f: F,
) -> (Vec<R>, Option<BenchmarkStats>)
where
    F: FnMut() -> R,
{
    for _ in 0..warmup {
        let _ = f();
    }

    let mut results = Vec::with_capacity(iterations);
    let mut times = Vec::with_capacity(iterations);
    for _ in 0..iterations {
        let (result, elapsed) = time_fn(&mut f);
        results.push(result);
        times.push(elapsed.as_secs_f64() * 1000.0);
    }

    (results, BenchmarkStats::from_times(times))
}

/// Timing statistics in milliseconds.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkStats {
    pub runs: usize,
    pub mean_ms: f64,
    pub std_dev_ms: f64,
    pub min_ms: f64,
    pub max_ms: f64,
    pub median_ms: f64,
    pub p95_ms: f64,
}

impl BenchmarkStats {
    /// Summarize a list of times in milliseconds. `None` if the list is empty.
    pub fn from_times(mut times: Vec<f64>) -> Option<Self> {
        if times.is_empty() {
            return None;
        }
        times.sort_by(f64::total_cmp);

        let n = times.len();
        let mean = times.iter().sum::<f64>() / n as f64;
        let variance = times.iter().map(|&t| (t - mean).powi(2)).sum::<f64>() / n as f64;
        let median = if n % 2 == 0 {
            (times[n / 2 - 1] + times[n / 2]) / 2.0
        } else {
            times[n / 2]
        };
        let p95 = times[((n as f64 * 0.95) as usize).min(n - 1)];

        Some(Self {
            runs: n,
            mean_ms: mean,
            std_dev_ms: variance.sqrt(),
            min_ms: times[0],
            max_ms: times[n - 1],
            median_ms: median,
            p95_ms: p95,
        })
    }
}

impl fmt::Display for BenchmarkStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>9.3} ms ± {:.3} (median {:.3}, p95 {:.3}, min {:.3}, max {:.3}, n={})",
            self.mean_ms,
            self.std_dev_ms,
            self.median_ms,
            self.p95_ms,
            self.min_ms,
            self.max_ms,
            self.runs
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_accumulates() {
        let mut timer = Timer::new();
        timer.start();
        std::thread::sleep(Duration::from_millis(5));
        let lap = timer.stop();
        assert!(lap.as_millis() >= 5);
        assert_eq!(timer.stop(), Duration::ZERO);
        assert!(timer.total_ms() >= 5.0);

        timer.reset();
        assert_eq!(timer.total(), Duration::ZERO);
    }

    #[test]
    fn test_benchmark_with_warmup() {
        let mut calls = 0;
        let (results, stats) = benchmark_with_warmup(3, 10, || {
            calls += 1;
            calls
        });
        assert_eq!(results.len(), 10);
        assert_eq!(results[0], 4);
        let stats = stats.unwrap();
        assert_eq!(stats.runs, 10);
        assert!(stats.max_ms >= stats.min_ms);

        let (none, stats): (Vec<()>, _) = benchmark_with_warmup(0, 0, || ());
        assert!(none.is_empty());
        assert!(stats.is_none());
    }

    #[test]
    fn test_benchmark_stats() {
        let stats = BenchmarkStats::from_times(vec![5.0, 1.0, 3.0, 2.0, 4.0]).unwrap();
        assert!((stats.mean_ms - 3.0).abs() < 1e-9);
        assert!((stats.median_ms - 3.0).abs() < 1e-9);
        assert_eq!(stats.min_ms, 1.0);
        assert_eq!(stats.max_ms, 5.0);
        assert_eq!(stats.p95_ms, 5.0);

        let even = BenchmarkStats::from_times(vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        assert!((even.median_ms - 2.5).abs() < 1e-9);
        assert!(BenchmarkStats::from_times(Vec::new()).is_none());
    }
}
