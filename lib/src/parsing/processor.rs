//! CPU and GPU descriptions.

use super::classify::{Category, Rule};
use crate::dataset::columns;
use crate::error::ParseError;
use serde::{Deserialize, Serialize};

/// Coarse CPU performance tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CpuTier {
    IntelCoreI7I9,
    IntelCoreI5,
    IntelCoreI3,
    AmdRyzen,
    Other,
}

/// Tier rules in priority order. The Ryzen rule and the fallback must stay last.
pub const CPU_TIER_RULES: &[Rule<CpuTier>] = &[
    Rule {
        patterns: &["Intel Core i7", "Intel Core i9"],
        label: CpuTier::IntelCoreI7I9,
    },
    Rule {
        patterns: &["Intel Core i5"],
        label: CpuTier::IntelCoreI5,
    },
    Rule {
        patterns: &["Intel Core i3"],
        label: CpuTier::IntelCoreI3,
    },
    Rule {
        patterns: &["AMD Ryzen"],
        label: CpuTier::AmdRyzen,
    },
];

impl Category for CpuTier {
    const RULES: &'static [Rule<Self>] = CPU_TIER_RULES;
    const FALLBACK: Self = CpuTier::Other;

    fn label(self) -> &'static str {
        match self {
            CpuTier::IntelCoreI7I9 => "Intel Core i7/i9",
            CpuTier::IntelCoreI5 => "Intel Core i5",
            CpuTier::IntelCoreI3 => "Intel Core i3",
            CpuTier::AmdRyzen => "AMD Ryzen",
            CpuTier::Other => "Other",
        }
    }
}

/// Features derived from the `cpu` field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CpuFeatures {
    pub brand: String,
    pub tier: CpuTier,
}

fn first_token(column: &str, raw: &str) -> Result<String, ParseError> {
    raw.split_whitespace()
        .next()
        .map(str::to_string)
        .ok_or_else(|| ParseError::new(column, raw, "expected at least one word"))
}

/// Parse a CPU description: brand is the first word, tier comes from [`CPU_TIER_RULES`].
pub fn parse_cpu(raw: &str) -> Result<CpuFeatures, ParseError> {
    Ok(CpuFeatures {
        brand: first_token(columns::CPU, raw)?,
        tier: CpuTier::classify(raw),
    })
}

/// GPU brand: the first word. The model name is discarded.
pub fn parse_gpu_brand(raw: &str) -> Result<String, ParseError> {
    first_token(columns::GPU, raw)
}
