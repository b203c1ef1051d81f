//! Storage descriptions such as `"256GB SSD +  1TB HDD"`.
//!
//! Units are normalized to whole GB first (`1TB` becomes `1000`, `1.0TB`
//! becomes `1000`), then each storage kind is searched for independently. A
//! kind that does not appear is 0: listings often report only one drive.

use crate::dataset::columns;
use crate::error::ParseError;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

static UNIT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+(?:\.\d+)?)\s*(TB|GB)").expect("unit pattern is valid"));
static SSD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)\s*SSD").expect("ssd pattern is valid"));
static HDD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)\s*HDD").expect("hdd pattern is valid"));
static FLASH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)\s*Flash Storage").expect("flash pattern is valid"));

/// Capacity per storage kind, in GB.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageFeatures {
    pub ssd: u32,
    pub hdd: u32,
    pub flash_storage: u32,
}

impl StorageFeatures {
    /// True when no storage kind was recognized.
    pub fn is_empty(&self) -> bool {
        self.ssd == 0 && self.hdd == 0 && self.flash_storage == 0
    }
}

/// Rewrite every `<n>TB` / `<n>GB` token as a bare GB count.
pub fn normalize_units(raw: &str) -> Cow<'_, str> {
    UNIT.replace_all(raw, |caps: &Captures| {
        let factor = if &caps[2] == "TB" { 1000.0 } else { 1.0 };
        match caps[1].parse::<f64>() {
            Ok(amount) => format_gb(amount * factor),
            Err(_) => caps[0].to_string(),
        }
    })
}

fn format_gb(gb: f64) -> String {
    if gb.fract() == 0.0 {
        format!("{:.0}", gb)
    } else {
        gb.to_string()
    }
}

fn capacity(pattern: &Regex, normalized: &str, raw: &str) -> Result<u32, ParseError> {
    match pattern.captures(normalized) {
        Some(caps) => caps[1].parse::<u32>().map_err(|_| {
            ParseError::new(columns::MEMORY, raw, "storage capacity does not fit in 32 bits")
        }),
        None => Ok(0),
    }
}

/// Parse a memory description into per-kind capacities.
pub fn parse_storage(raw: &str) -> Result<StorageFeatures, ParseError> {
    let normalized = normalize_units(raw);
    Ok(StorageFeatures {
        ssd: capacity(&SSD, &normalized, raw)?,
        hdd: capacity(&HDD, &normalized, raw)?,
        flash_storage: capacity(&FLASH, &normalized, raw)?,
    })
}
