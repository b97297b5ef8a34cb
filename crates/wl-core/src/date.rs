//! Date headings: `# [TODO:] <date>` in ISO, US or long form.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::{Captures, Regex};

use crate::error::ExtractError;
use crate::matcher::{LineMatcher, capture_with, optional, required};

static ISO_DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^# +(?P<todo>TODO:)? *(?P<year>[0-9]{4})-(?P<month>[0-9]{2})-(?P<day>[0-9]{2}) *$")
        .unwrap()
});

static US_DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^# +(?P<todo>TODO:)? *(?P<month>[0-9]{2})-(?P<day>[0-9]{2})-(?P<year>[0-9]{4}) *$")
        .unwrap()
});

static LONG_DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^# +(?P<todo>TODO:)? *",
        r"(?P<month>January|February|March|April|May|June|July|August|September|October|November|December) ",
        r"(?P<day>(?:[1-3]?(?:1st|2nd|3rd|[04-9]th))|(?:[0-9]{2})),? ",
        r"(?P<year>[0-9]{4}) *$",
    ))
    .unwrap()
});

static LEADING_DIGITS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]+").unwrap());

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Maps an English month name (exact case) to its number, 1 to 12.
pub fn month_number(name: &str) -> Option<u32> {
    MONTH_NAMES
        .iter()
        .position(|&month| month == name)
        .and_then(|idx| u32::try_from(idx + 1).ok())
}

/// A recognised date heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateHeading {
    pub date: NaiveDate,
    pub is_todo: bool,
}

/// Matches one date-heading grammar.
#[derive(Debug, Clone)]
pub struct DateParser {
    regex: Regex,
}

impl DateParser {
    /// Wraps a grammar with `todo`, `year`, `month` and `day` groups.
    pub const fn new(regex: Regex) -> Self {
        Self { regex }
    }

    /// `# 2024-01-31`
    pub fn iso() -> Self {
        Self::new(ISO_DATE_RE.clone())
    }

    /// `# 01-31-2024`
    pub fn us() -> Self {
        Self::new(US_DATE_RE.clone())
    }

    /// `# January 31st, 2024`
    pub fn long_form() -> Self {
        Self::new(LONG_DATE_RE.clone())
    }

    /// The built-in grammars in priority order.
    pub fn standard() -> Vec<Self> {
        vec![Self::iso(), Self::us(), Self::long_form()]
    }
}

impl LineMatcher for DateParser {
    type Output = DateHeading;

    fn try_match(&self, line: &str) -> Option<DateHeading> {
        capture_with(&self.regex, line, extract_heading)
    }
}

fn extract_heading(captures: &Captures<'_>) -> Result<DateHeading, ExtractError> {
    let is_todo = optional(captures, "todo").is_some();

    let year = required(captures, "year")?;
    let year: i32 = parse_number(year)?;

    let month = required(captures, "month")?;
    let month = match month_number(month) {
        Some(number) => number,
        None => parse_number(month)?,
    };

    let day = required(captures, "day")?;
    let digits = LEADING_DIGITS_RE
        .find(day)
        .ok_or_else(|| ExtractError::NotANumber {
            text: day.to_string(),
        })?;
    let day: u32 = parse_number(digits.as_str())?;

    let invalid = ExtractError::InvalidDate { year, month, day };
    if year < 1 {
        return Err(invalid);
    }
    let date = NaiveDate::from_ymd_opt(year, month, day).ok_or(invalid)?;

    Ok(DateHeading { date, is_todo })
}

fn parse_number<T: std::str::FromStr>(text: &str) -> Result<T, ExtractError> {
    text.parse().map_err(|_| ExtractError::NotANumber {
        text: text.to_string(),
    })
}
