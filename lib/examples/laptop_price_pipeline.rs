//! End-to-end feature pipeline: Laptop Price Prediction
//!
//! This example demonstrates:
//! - Loading raw listings from CSV (or a built-in sample)
//! - Fitting the feature pipeline on a training split
//! - Applying the frozen state to held-out listings, including unseen categories
//! - Saving and reloading the fitted state
//! - Scoring a mean-price baseline on the held-out target
//!
//! Run with: cargo run --example laptop_price_pipeline [-- path/to/laptops.csv]
//! Set `RUST_LOG=laptop_features=debug` to see pipeline logs.

use laptop_features::dataset::RawTable;
use laptop_features::metrics::Metrics;
use laptop_features::{FeaturePipeline, FittedState, PipelineConfig, SerializableParams};
use std::error::Error;
use tracing_subscriber::EnvFilter;

const SAMPLE: &str = "\
Company,TypeName,Inches,ScreenResolution,Cpu,Ram,Memory,Gpu,OpSys,Weight,Price
Apple,Ultrabook,13.3,IPS Panel Retina Display 2560x1600,Intel Core i5 2.3GHz,8GB,128GB SSD,Intel Iris Plus Graphics 640,Mac OS X,1.37kg,1339.69
HP,Notebook,15.6,Full HD 1920x1080,Intel Core i5 7200U 2.5GHz,8GB,256GB SSD,Intel HD Graphics 620,No OS,1.86kg,575.00
Acer,Notebook,15.6,1366x768,AMD A9-Series 9420 3GHz,4GB,500GB HDD,AMD Radeon R5,Windows 10,2.1kg,400.00
Asus,Gaming,17.3,Full HD 1920x1080,Intel Core i7 7700HQ 2.8GHz,16GB,256GB SSD +  1TB HDD,Nvidia GeForce GTX 1070,Windows 10,2.9kg,1999.00
Lenovo,2 in 1 Convertible,14,IPS Panel Full HD / Touchscreen 1920x1080,Intel Core i5 8250U 1.6GHz,8GB,256GB SSD,Intel UHD Graphics 620,Windows 10,1.6kg,1099.00
Dell,Notebook,15.6,Full HD 1920x1080,AMD Ryzen 5 2500U 2GHz,8GB,1TB HDD,AMD Radeon Vega 8,Linux,2.2kg,649.00
HP,Netbook,11.6,1366x768,Intel Celeron Dual Core N3060 1.6GHz,4GB,32GB Flash Storage,Intel HD Graphics 400,Chrome OS,1.17kg,269.00
MSI,Gaming,15.6,Full HD 1920x1080,Intel Core i7 7700HQ 2.8GHz,16GB,256GB SSD +  1TB HDD,Nvidia GeForce GTX 1060,Windows 10,2.4kg,1599.00
Samsung,2 in 1 Convertible,12.3,Touchscreen 2400x1600,Samsung Cortex A72&A53 2.0GHz,4GB,32GB Flash Storage,ARM Mali T860 MP4,Chrome OS,1.15kg,659.00
Xiaomi,Ultrabook,13.3,IPS Panel Full HD 1920x1080,Intel Core i5 8250U 1.6GHz,8GB,256GB SSD,Nvidia GeForce MX150,No OS,1.28kg,999.00
";

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Laptop Price Feature Pipeline ===\n");

    // 1. Load listings
    let table = match std::env::args().nth(1) {
        Some(path) => {
            println!("Loading listings from {}", path);
            RawTable::from_csv_path(path)?
        }
        None => {
            println!("No CSV given, using the built-in sample");
            RawTable::from_csv_reader(SAMPLE.as_bytes())?
        }
    };
    println!("{} listings, columns: {:?}\n", table.len(), table.headers());

    // 2. Split: the held-out rows include a Samsung CPU and an ARM GPU never seen in training
    let (train, test) = table.train_test_split(0.8)?;
    println!("Train: {} rows, Test: {} rows", train.len(), test.len());

    // 3. Fit
    let config = PipelineConfig::default().with_passthrough_columns(["TypeName"]);
    let (state, train_features) = FeaturePipeline::new(config).fit(&train)?;
    println!("\nFitted {} output columns:", state.fitted_columns().len());
    for name in state.fitted_columns() {
        println!("  {}", name);
    }
    if !state.degenerate_columns().is_empty() {
        println!("Zero-variance columns: {:?}", state.degenerate_columns());
    }

    // 4. Save and reload the state, as a serving process would
    let path = std::env::temp_dir().join("laptop_features_state.bin");
    state.save_to_file(&path)?;
    let loaded = FittedState::load_from_file(&path)?;
    println!("\nState saved to {} and reloaded", path.display());

    // 5. Transform held-out listings with the reloaded state
    let test_features = loaded.transform(&test)?;
    assert_eq!(test_features.columns(), train_features.columns());
    println!(
        "Test matrix: {} x {}",
        test_features.n_rows(),
        test_features.n_columns()
    );
    for row in test_features.to_rows().iter().take(2) {
        let preview: Vec<String> = row.iter().take(8).map(|v| format!("{:+.2}", v)).collect();
        println!("  [{} ...]", preview.join(", "));
    }

    // 6. Baseline: predict the training mean for every held-out listing
    if let (Some(y_train), Some(y_test)) = (train_features.target(), test_features.target()) {
        if !y_test.is_empty() {
            let mean_price = y_train.mean().unwrap_or(0.0);
            let predictions = vec![mean_price; y_test.len()];
            let metrics = Metrics::calculate_all(&y_test.to_vec(), &predictions)?;
            println!("\nMean-price baseline on test: {}", metrics);
        }
    }

    std::fs::remove_file(&path).ok();
    println!("\n=== Pipeline Complete ===");
    Ok(())
}
