//! Event headings: `* HHMM-HHMM [with ...] [at ...] [: description]`.

use std::sync::LazyLock;

use chrono::NaiveTime;
use regex::{Captures, Regex};

use crate::error::ExtractError;
use crate::matcher::{LineMatcher, capture_with, optional, required};
use crate::model::Event;

static EVENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^\* (?P<begin>[0-9]{4})-(?P<end>[0-9]{4})",
        r"(?: +with +(?P<company>.+?))?",
        r"(?: +at +(?P<location>.+?))?",
        r"(?: *: *(?P<desc>.+))? *$",
    ))
    .unwrap()
});

/// Matches one event-heading grammar.
#[derive(Debug, Clone)]
pub struct EventParser {
    regex: Regex,
}

impl EventParser {
    /// Wraps a grammar with `begin` and `end` groups and optional
    /// `company`, `location` and `desc` groups.
    pub const fn new(regex: Regex) -> Self {
        Self { regex }
    }

    /// The built-in grammars in priority order.
    pub fn standard() -> Vec<Self> {
        vec![Self::new(EVENT_RE.clone())]
    }
}

impl LineMatcher for EventParser {
    type Output = Event;

    fn try_match(&self, line: &str) -> Option<Event> {
        capture_with(&self.regex, line, extract_event)
    }
}

fn extract_event(captures: &Captures<'_>) -> Result<Event, ExtractError> {
    let begin = clock_time(required(captures, "begin")?)?;
    let end = clock_time(required(captures, "end")?)?;

    Ok(Event {
        begin,
        end,
        companies: optional(captures, "company").map_or_else(Vec::new, split_list),
        locations: optional(captures, "location").map_or_else(Vec::new, split_list),
        descriptions: optional(captures, "desc")
            .map(str::to_string)
            .into_iter()
            .collect(),
    })
}

/// Reads `HHMM` as a time of day.
fn clock_time(text: &str) -> Result<NaiveTime, ExtractError> {
    let invalid = || ExtractError::InvalidTime {
        text: text.to_string(),
    };
    let (hour, minute) = text.split_at_checked(2).ok_or_else(invalid)?;
    let hour: u32 = hour.parse().map_err(|_| invalid())?;
    let minute: u32 = minute.parse().map_err(|_| invalid())?;
    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(invalid)
}

fn split_list(text: &str) -> Vec<String> {
    text.split(',').map(|item| item.trim().to_string()).collect()
}
