//! Stateless field parsers.
//!
//! One extractor per raw field. Every parser is a pure function of its input
//! string: the same listing parses identically whether the pipeline is fitting
//! or applying a fitted state.
//!
//! | Raw field          | Parser                 | Derived fields                                   |
//! |--------------------|------------------------|--------------------------------------------------|
//! | `ram`              | [`parse_ram`]          | `ram_gb`                                         |
//! | `weight`           | [`parse_weight`]       | `weight_kg`                                      |
//! | `screenresolution` | [`parse_screen`]       | `touchscreen`, `ips_panel`, `x_res`, `y_res`, `ppi` |
//! | `cpu`              | [`parse_cpu`]          | `cpu_brand`, `cpu_tier`                          |
//! | `gpu`              | [`parse_gpu_brand`]    | `gpu_brand`                                      |
//! | `memory`           | [`parse_storage`]      | `ssd`, `hdd`, `flash_storage`                    |
//! | `opsys`            | [`classify_os`]        | `os_category`                                    |
//!
//! Malformed required fields produce a [`ParseError`](crate::error::ParseError).
//! The one deliberate exception is storage: a missing storage kind is 0.

pub mod classify;
mod os;
mod processor;
mod screen;
mod storage;
mod units;

pub use classify::{first_match, Category, Rule};
pub use os::{classify_os, OsCategory, OS_RULES};
pub use processor::{parse_cpu, parse_gpu_brand, CpuFeatures, CpuTier, CPU_TIER_RULES};
pub use screen::{parse_screen, ppi, ScreenFeatures};
pub use storage::{normalize_units, parse_storage, StorageFeatures};
pub use units::{parse_inches, parse_ram, parse_weight};
