//! Raw laptop listings as they arrive from storage.
//!
//! This module provides the untyped [`RawTable`] (a header row plus string
//! cells, as read from a CSV export) and the typed [`RawRecord`] the field
//! parsers consume.
//!
//! # Core Concepts
//!
//! - **RawTable**: one row per listing, one column per raw field. Column names
//!   are kept as given; lookups are case-insensitive.
//! - **RawRecord**: the fields of one listing after the table has been checked
//!   against the required schema. Everything except `inches` and `price` is
//!   still a human-entered string.
//!
//! # Example
//!
//! ```rust
//! use laptop_features::dataset::{RawRecord, RawTable};
//!
//! let record = RawRecord {
//!     ram: "8GB".into(),
//!     weight: "1.37kg".into(),
//!     screenresolution: "IPS Panel Retina Display 2560x1600".into(),
//!     cpu: "Intel Core i5 2.3GHz".into(),
//!     gpu: "Intel Iris Plus Graphics 640".into(),
//!     memory: "128GB SSD".into(),
//!     opsys: "macOS".into(),
//!     inches: 13.3,
//!     price: Some(1339.69),
//! };
//! let table = RawTable::from_records(&[record]);
//! assert_eq!(table.len(), 1);
//! assert!(table.column_index("PRICE").is_some());
//! ```

mod record;
mod table;

pub use self::record::RawRecord;
pub use self::table::{header_key, RawTable};

/// Lower-cased names of the raw columns.
pub mod columns {
    pub const RAM: &str = "ram";
    pub const WEIGHT: &str = "weight";
    pub const SCREEN_RESOLUTION: &str = "screenresolution";
    pub const CPU: &str = "cpu";
    pub const GPU: &str = "gpu";
    pub const MEMORY: &str = "memory";
    pub const OPSYS: &str = "opsys";
    pub const INCHES: &str = "inches";

    /// Columns every table must carry, in fit and in apply mode.
    pub const REQUIRED: [&str; 8] = [
        RAM,
        WEIGHT,
        SCREEN_RESOLUTION,
        CPU,
        GPU,
        MEMORY,
        OPSYS,
        INCHES,
    ];
}
