//! Declarative table of derived feature columns.
//!
//! Each entry names one output column, its kind, and how to read it from
//! [`DerivedFeatures`]. Adding a feature is one entry here; the assembler and
//! the encoder pick it up from the table.

use super::derived::DerivedFeatures;
use crate::parsing::Category;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeatureKind {
    /// Standardized with fit-time mean and std.
    Numeric,
    /// One-hot expanded.
    Categorical,
}

/// How a feature value is read from [`DerivedFeatures`].
#[derive(Clone, Copy)]
pub enum Accessor {
    Numeric(fn(&DerivedFeatures) -> f64),
    Categorical(for<'a> fn(&'a DerivedFeatures) -> &'a str),
}

/// One derived feature column.
#[derive(Clone, Copy)]
pub struct FeatureSpec {
    pub name: &'static str,
    pub accessor: Accessor,
}

impl FeatureSpec {
    pub fn kind(&self) -> FeatureKind {
        match self.accessor {
            Accessor::Numeric(_) => FeatureKind::Numeric,
            Accessor::Categorical(_) => FeatureKind::Categorical,
        }
    }
}

impl std::fmt::Debug for FeatureSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeatureSpec")
            .field("name", &self.name)
            .field("kind", &self.kind())
            .finish()
    }
}

/// Derived feature columns in output order.
pub const FEATURE_SCHEMA: &[FeatureSpec] = &[
    FeatureSpec {
        name: "inches",
        accessor: Accessor::Numeric(|f| f.inches),
    },
    FeatureSpec {
        name: "ram_gb",
        accessor: Accessor::Numeric(|f| f64::from(f.ram_gb)),
    },
    FeatureSpec {
        name: "weight_kg",
        accessor: Accessor::Numeric(|f| f.weight_kg),
    },
    FeatureSpec {
        name: "touchscreen",
        accessor: Accessor::Numeric(|f| f64::from(f.touchscreen)),
    },
    FeatureSpec {
        name: "ips_panel",
        accessor: Accessor::Numeric(|f| f64::from(f.ips_panel)),
    },
    FeatureSpec {
        name: "x_res",
        accessor: Accessor::Numeric(|f| f64::from(f.x_res)),
    },
    FeatureSpec {
        name: "y_res",
        accessor: Accessor::Numeric(|f| f64::from(f.y_res)),
    },
    FeatureSpec {
        name: "ppi",
        accessor: Accessor::Numeric(|f| f.ppi),
    },
    FeatureSpec {
        name: "ssd",
        accessor: Accessor::Numeric(|f| f64::from(f.ssd)),
    },
    FeatureSpec {
        name: "hdd",
        accessor: Accessor::Numeric(|f| f64::from(f.hdd)),
    },
    FeatureSpec {
        name: "flash_storage",
        accessor: Accessor::Numeric(|f| f64::from(f.flash_storage)),
    },
    FeatureSpec {
        name: "cpu_brand",
        accessor: Accessor::Categorical(|f| f.cpu_brand.as_str()),
    },
    FeatureSpec {
        name: "cpu_tier",
        accessor: Accessor::Categorical(|f| f.cpu_tier.label()),
    },
    FeatureSpec {
        name: "gpu_brand",
        accessor: Accessor::Categorical(|f| f.gpu_brand.as_str()),
    },
    FeatureSpec {
        name: "os_category",
        accessor: Accessor::Categorical(|f| f.os_category.label()),
    },
];

/// Look up a schema entry by column name.
pub fn feature(name: &str) -> Option<&'static FeatureSpec> {
    FEATURE_SCHEMA.iter().find(|spec| spec.name == name)
}
