//! Screen resolution strings such as `"IPS Panel Full HD / Touchscreen 1920x1080"`.

use crate::dataset::columns;
use crate::error::ParseError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static RESOLUTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)x(\d+)").expect("resolution pattern is valid"));

/// Features derived from the `screenresolution` and `inches` fields.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScreenFeatures {
    pub touchscreen: u8,
    pub ips_panel: u8,
    pub x_res: u32,
    pub y_res: u32,
    pub ppi: f64,
}

/// Pixels per inch of a `x_res` by `y_res` panel with the given diagonal.
pub fn ppi(x_res: u32, y_res: u32, inches: f64) -> f64 {
    let (x, y) = (f64::from(x_res), f64::from(y_res));
    (x * x + y * y).sqrt() / inches
}

/// Parse a screen description. `inches` must already be validated as positive.
pub fn parse_screen(raw: &str, inches: f64) -> Result<ScreenFeatures, ParseError> {
    let caps = RESOLUTION.captures(raw).ok_or_else(|| {
        ParseError::new(
            columns::SCREEN_RESOLUTION,
            raw,
            "expected a <width>x<height> resolution",
        )
    })?;

    let dimension = |i: usize| {
        caps[i].parse::<u32>().map_err(|_| {
            ParseError::new(
                columns::SCREEN_RESOLUTION,
                raw,
                "resolution does not fit in 32 bits",
            )
        })
    };
    let x_res = dimension(1)?;
    let y_res = dimension(2)?;

    Ok(ScreenFeatures {
        touchscreen: u8::from(raw.contains("Touchscreen")),
        ips_panel: u8::from(raw.contains("IPS")),
        x_res,
        y_res,
        ppi: ppi(x_res, y_res, inches),
    })
}
