use laptop_features::dataset::RawTable;
use laptop_features::PipelineError;
use std::path::Path;

const COMPANIES: &[&str] = &["Apple", "HP", "Acer", "Asus", "Dell", "Lenovo", "MSI", "Toshiba"];
const INCHES: &[&str] = &["11.6", "12.5", "13.3", "14", "15.6", "17.3"];
const SCREENS: &[&str] = &[
    "1366x768",
    "Full HD 1920x1080",
    "IPS Panel Full HD 1920x1080",
    "IPS Panel Full HD / Touchscreen 1920x1080",
    "IPS Panel Retina Display 2560x1600",
    "IPS Panel 4K Ultra HD 3840x2160",
    "Touchscreen 2256x1504",
];
const CPUS: &[&str] = &[
    "Intel Core i3 6006U 2GHz",
    "Intel Core i5 7200U 2.5GHz",
    "Intel Core i5 8250U 1.6GHz",
    "Intel Core i7 7700HQ 2.8GHz",
    "Intel Core i7 8550U 1.8GHz",
    "AMD Ryzen 5 2500U 2GHz",
    "AMD A9-Series 9420 3GHz",
    "Intel Celeron Dual Core N3350 1.1GHz",
];
const RAMS: &[&str] = &["4GB", "8GB", "12GB", "16GB", "32GB"];
const MEMORIES: &[&str] = &[
    "128GB SSD",
    "256GB SSD",
    "512GB SSD",
    "500GB HDD",
    "1TB HDD",
    "256GB SSD +  1TB HDD",
    "32GB Flash Storage",
    "1.0TB Hybrid",
];
const GPUS: &[&str] = &[
    "Intel HD Graphics 620",
    "Intel UHD Graphics 620",
    "Nvidia GeForce GTX 1050",
    "Nvidia GeForce MX150",
    "AMD Radeon 530",
];
const OPSYS: &[&str] = &[
    "Windows 10",
    "Windows 7",
    "macOS",
    "Mac OS X",
    "Linux",
    "No OS",
    "Chrome OS",
];

/// Headers of generated tables.
pub const HEADERS: [&str; 10] = [
    "Company",
    "Inches",
    "ScreenResolution",
    "Cpu",
    "Ram",
    "Memory",
    "Gpu",
    "OpSys",
    "Weight",
    "Price",
];

/// Deterministic generator of plausible laptop listings.
///
/// Uses a 64-bit LCG so benchmark inputs are identical across runs.
#[derive(Debug, Clone)]
pub struct SyntheticListings {
    state: u64,
}

impl SyntheticListings {
    pub fn new(seed: u64) -> Self {
        Self {
            state: seed ^ 0x9E37_79B9_7F4A_7C15,
        }
    }

    fn next(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        self.state >> 33
    }

    fn pick<'a>(&mut self, options: &[&'a str]) -> &'a str {
        options[self.next() as usize % options.len()]
    }

    /// One row, in [`HEADERS`] order.
    pub fn row(&mut self) -> Vec<String> {
        let ram = self.pick(RAMS);
        let cpu = self.pick(CPUS);
        let weight = 1.0 + (self.next() % 250) as f64 / 100.0;
        let ram_gb: f64 = ram.trim_end_matches("GB").parse().unwrap_or(8.0);
        let premium = if cpu.contains("i7") { 400.0 } else { 0.0 };
        let price = 250.0 + ram_gb * 60.0 + premium + (self.next() % 300) as f64;

        vec![
            self.pick(COMPANIES).to_string(),
            self.pick(INCHES).to_string(),
            self.pick(SCREENS).to_string(),
            cpu.to_string(),
            ram.to_string(),
            self.pick(MEMORIES).to_string(),
            self.pick(GPUS).to_string(),
            self.pick(OPSYS).to_string(),
            format!("{:.2}kg", weight),
            format!("{:.2}", price),
        ]
    }

    /// A table of `n_rows` listings.
    pub fn table(&mut self, n_rows: usize) -> RawTable {
        let headers = HEADERS.iter().map(|h| h.to_string()).collect();
        let rows = (0..n_rows).map(|_| self.row()).collect();
        // Every generated row has one cell per header.
        RawTable::new(headers, rows).unwrap_or_default()
    }
}

/// `n_rows` synthetic listings from a fixed seed.
pub fn synthetic_listings(n_rows: usize) -> RawTable {
    SyntheticListings::new(42).table(n_rows)
}

/// Load listings from `path` if given, else generate `n_rows` of them.
pub fn load_or_generate(path: Option<&Path>, n_rows: usize) -> Result<RawTable, PipelineError> {
    match path {
        Some(path) => RawTable::from_csv_path(path),
        None => Ok(synthetic_listings(n_rows)),
    }
}
