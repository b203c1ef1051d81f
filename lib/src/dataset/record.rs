use serde::{Deserialize, Serialize};

/// One laptop listing with its raw, human-entered fields.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    /// e.g. `"8GB"`
    pub ram: String,
    /// e.g. `"2.5kg"`
    pub weight: String,
    /// e.g. `"1920x1080 IPS Panel Touchscreen"`
    pub screenresolution: String,
    /// e.g. `"Intel Core i7 7700HQ 2.8GHz"`
    pub cpu: String,
    /// e.g. `"Nvidia GeForce GTX 1050"`
    pub gpu: String,
    /// e.g. `"256GB SSD +  1TB HDD"`
    pub memory: String,
    /// e.g. `"Windows 10"`
    pub opsys: String,
    /// Screen diagonal.
    pub inches: f64,
    /// Listing price; absent at inference time.
    pub price: Option<f64>,
}

impl RawRecord {
    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn without_price(mut self) -> Self {
        self.price = None;
        self
    }
}
