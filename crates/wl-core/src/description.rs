//! Indented description bullets: `  * text`.

use std::sync::LazyLock;

use regex::Regex;

use crate::matcher::{LineMatcher, capture_with, required};

static DESCRIPTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^ +\* (?P<desc>.+?) *$").unwrap());

/// Matches one description-bullet grammar.
#[derive(Debug, Clone)]
pub struct DescriptionParser {
    regex: Regex,
}

impl DescriptionParser {
    /// Wraps a grammar with a `desc` group.
    pub const fn new(regex: Regex) -> Self {
        Self { regex }
    }

    pub fn standard() -> Vec<Self> {
        vec![Self::new(DESCRIPTION_RE.clone())]
    }
}

impl LineMatcher for DescriptionParser {
    type Output = String;

    fn try_match(&self, line: &str) -> Option<String> {
        capture_with(&self.regex, line, |captures| {
            required(captures, "desc").map(str::to_string)
        })
    }
}
