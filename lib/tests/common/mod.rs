#![allow(dead_code)]

use laptop_features::dataset::RawTable;
use tracing_subscriber::EnvFilter;

pub const LISTINGS_CSV: &str = "\
laptop_ID,Company,TypeName,Inches,ScreenResolution,Cpu,Ram,Memory,Gpu,OpSys,Weight,Price
1,Apple,Ultrabook,13.3,IPS Panel Retina Display 2560x1600,Intel Core i5 2.3GHz,8GB,128GB SSD,Intel Iris Plus Graphics 640,macOS,1.37kg,1339.69
2,Apple,Ultrabook,13.3,1440x900,Intel Core i5 1.8GHz,8GB,128GB Flash Storage,Intel HD Graphics 6000,macOS,1.34kg,898.94
3,HP,Notebook,15.6,Full HD 1920x1080,Intel Core i5 7200U 2.5GHz,8GB,256GB SSD,Intel HD Graphics 620,No OS,1.86kg,575.00
4,Apple,Ultrabook,15.4,IPS Panel Retina Display 2880x1800,Intel Core i7 2.7GHz,16GB,512GB SSD,AMD Radeon Pro 455,Mac OS X,1.83kg,2537.45
5,Acer,Notebook,15.6,1366x768,AMD A9-Series 9420 3GHz,4GB,500GB HDD,AMD Radeon R5,Windows 10,2.1kg,400.00
6,Asus,Gaming,17.3,Full HD 1920x1080,Intel Core i7 7700HQ 2.8GHz,16GB,256GB SSD +  1TB HDD,Nvidia GeForce GTX 1070,Windows 10,2.9kg,1999.00
7,Lenovo,2 in 1 Convertible,14,IPS Panel Full HD / Touchscreen 1920x1080,Intel Core i5 8250U 1.6GHz,8GB,256GB SSD,Intel UHD Graphics 620,Windows 10,1.6kg,1099.00
8,Dell,Notebook,15.6,Full HD 1920x1080,AMD Ryzen 5 2500U 2GHz,8GB,1TB HDD,AMD Radeon Vega 8,Linux,2.2kg,649.00
9,HP,Netbook,11.6,1366x768,Intel Celeron Dual Core N3060 1.6GHz,4GB,32GB Flash Storage,Intel HD Graphics 400,Chrome OS,1.17kg,269.00
";

/// Route library logs to the test harness. Set `RUST_LOG` to see them.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn listings() -> RawTable {
    RawTable::from_csv_reader(LISTINGS_CSV.as_bytes()).expect("fixture parses")
}

/// The fixture with a single cell replaced.
pub fn with_cell(table: &RawTable, row: usize, column: &str, value: &str) -> RawTable {
    let mut cells: Vec<String> = table
        .column(column)
        .expect("column exists")
        .into_iter()
        .map(str::to_string)
        .collect();
    cells[row] = value.to_string();
    table.clone().with_column(column, cells).expect("same length")
}

pub fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol
}
