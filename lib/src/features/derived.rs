use crate::dataset::{columns, RawRecord};
use crate::error::ParseError;
use crate::parsing::{
    classify_os, parse_cpu, parse_gpu_brand, parse_ram, parse_screen, parse_storage,
    parse_weight, CpuTier, OsCategory, StorageFeatures,
};
use serde::{Deserialize, Serialize};

/// Typed features of one listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DerivedFeatures {
    pub ram_gb: u32,
    pub weight_kg: f64,
    pub inches: f64,
    pub touchscreen: u8,
    pub ips_panel: u8,
    pub x_res: u32,
    pub y_res: u32,
    pub ppi: f64,
    pub cpu_brand: String,
    pub cpu_tier: CpuTier,
    pub gpu_brand: String,
    pub ssd: u32,
    pub hdd: u32,
    pub flash_storage: u32,
    pub os_category: OsCategory,
}

impl DerivedFeatures {
    /// Run every field parser over one record.
    ///
    /// Screen size is validated before the resolution is parsed, because
    /// `ppi` divides by it.
    pub fn from_record(record: &RawRecord) -> Result<Self, ParseError> {
        if !(record.inches.is_finite() && record.inches > 0.0) {
            return Err(ParseError::new(
                columns::INCHES,
                record.inches.to_string(),
                "expected a positive screen size",
            ));
        }

        let ram_gb = parse_ram(&record.ram)?;
        let weight_kg = parse_weight(&record.weight)?;
        let screen = parse_screen(&record.screenresolution, record.inches)?;
        let cpu = parse_cpu(&record.cpu)?;
        let gpu_brand = parse_gpu_brand(&record.gpu)?;
        let storage = parse_storage(&record.memory)?;
        let os_category = classify_os(&record.opsys);

        Ok(Self {
            ram_gb,
            weight_kg,
            inches: record.inches,
            touchscreen: screen.touchscreen,
            ips_panel: screen.ips_panel,
            x_res: screen.x_res,
            y_res: screen.y_res,
            ppi: screen.ppi,
            cpu_brand: cpu.brand,
            cpu_tier: cpu.tier,
            gpu_brand,
            ssd: storage.ssd,
            hdd: storage.hdd,
            flash_storage: storage.flash_storage,
            os_category,
        })
    }

    /// Storage capacities as parsed from the memory field.
    pub fn storage(&self) -> StorageFeatures {
        StorageFeatures {
            ssd: self.ssd,
            hdd: self.hdd,
            flash_storage: self.flash_storage,
        }
    }
}
