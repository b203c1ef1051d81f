//! Ordered substring classifiers.
//!
//! A classifier is a list of [`Rule`]s evaluated top to bottom; the first rule
//! with a matching pattern decides the label, and a fallback label covers
//! everything else. Keeping the rules in a plain slice makes the tie-break
//! order visible and testable on its own.

/// One classification rule: any of `patterns` occurring in the input selects `label`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rule<L> {
    pub patterns: &'static [&'static str],
    pub label: L,
}

impl<L: Copy> Rule<L> {
    /// Whether any pattern occurs in `text` (case-sensitive substring match).
    pub fn matches(&self, text: &str) -> bool {
        self.patterns.iter().any(|p| text.contains(p))
    }
}

/// Evaluate `rules` in order and return the label of the first match.
pub fn first_match<L: Copy>(rules: &[Rule<L>], text: &str, fallback: L) -> L {
    rules
        .iter()
        .find(|rule| rule.matches(text))
        .map(|rule| rule.label)
        .unwrap_or(fallback)
}

/// A closed set of labels produced by an ordered rule list.
pub trait Category: Copy + PartialEq + 'static {
    /// Rules in priority order.
    const RULES: &'static [Rule<Self>];
    /// Label when no rule matches.
    const FALLBACK: Self;

    /// Human-readable label, used as the one-hot category name.
    fn label(self) -> &'static str;

    /// Classify a raw string.
    fn classify(text: &str) -> Self {
        first_match(Self::RULES, text, Self::FALLBACK)
    }
}
