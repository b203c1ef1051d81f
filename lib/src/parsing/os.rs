//! Operating system collapse.

use super::classify::{Category, Rule};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OsCategory {
    Windows,
    Mac,
    Linux,
    Other,
}

/// OS rules in priority order.
pub const OS_RULES: &[Rule<OsCategory>] = &[
    Rule {
        patterns: &["Windows"],
        label: OsCategory::Windows,
    },
    Rule {
        patterns: &["Mac"],
        label: OsCategory::Mac,
    },
    Rule {
        patterns: &["Linux"],
        label: OsCategory::Linux,
    },
];

impl Category for OsCategory {
    const RULES: &'static [Rule<Self>] = OS_RULES;
    const FALLBACK: Self = OsCategory::Other;

    fn label(self) -> &'static str {
        match self {
            OsCategory::Windows => "Windows",
            OsCategory::Mac => "Mac",
            OsCategory::Linux => "Linux",
            OsCategory::Other => "Other/No OS",
        }
    }
}

/// Collapse an `opsys` value. Never fails: anything unrecognized is `Other/No OS`.
pub fn classify_os(raw: &str) -> OsCategory {
    OsCategory::classify(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_os_categories() {
        assert_eq!(classify_os("Windows 10"), OsCategory::Windows);
        assert_eq!(classify_os("Windows 10 S"), OsCategory::Windows);
        assert_eq!(classify_os("Windows 7"), OsCategory::Windows);
        assert_eq!(classify_os("Mac OS X"), OsCategory::Mac);
        assert_eq!(classify_os("Linux"), OsCategory::Linux);
        assert_eq!(classify_os("No OS"), OsCategory::Other);
        assert_eq!(classify_os("Chrome OS"), OsCategory::Other);
        assert_eq!(classify_os("Android"), OsCategory::Other);
    }

    #[test]
    fn test_substring_match_is_case_sensitive() {
        // "macOS" does not contain "Mac".
        assert_eq!(classify_os("macOS"), OsCategory::Other);
    }

    #[test]
    fn test_windows_takes_priority() {
        assert_eq!(classify_os("Windows on Mac"), OsCategory::Windows);
        assert_eq!(classify_os("Linux or Mac"), OsCategory::Mac);
    }

    #[test]
    fn test_labels() {
        assert_eq!(OsCategory::Other.label(), "Other/No OS");
        assert_eq!(OsCategory::Windows.label(), "Windows");
    }
}
