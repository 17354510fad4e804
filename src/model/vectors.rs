use std::sync::LazyLock;

use regex::Regex;

static COMPAT_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-?[0-9]\.[0-9]+").expect("valid compat number pattern"));
static DECIMAL_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-?[0-9]+\.[0-9]+").expect("valid decimal number pattern"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VectorRecord {
    pub cui: String,
    pub values: Vec<String>,
}

impl VectorRecord {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// How vector components are recognised inside a vector line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum NumberPattern {
    /// Exactly one integer digit: `12.34` yields `2.34`.
    #[default]
    Compat,
    /// Any number of integer digits: `12.34` yields `12.34`.
    Decimal,
}

impl NumberPattern {
    pub fn regex(self) -> &'static Regex {
        match self {
            NumberPattern::Compat => &COMPAT_NUMBER,
            NumberPattern::Decimal => &DECIMAL_NUMBER,
        }
    }

    /// All non-overlapping matches, left to right.
    pub fn extract(self, text: &str) -> Vec<String> {
        self.regex()
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    pub fn name(self) -> &'static str {
        match self {
            NumberPattern::Compat => "compat",
            NumberPattern::Decimal => "decimal",
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/vectors.rs"]
mod tests;
