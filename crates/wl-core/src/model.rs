//! Parsed work-log records: days and the events worked on them.

use chrono::{NaiveDate, NaiveTime, TimeDelta};
use serde::{Deserialize, Serialize};

/// A block of work between two clock times.
///
/// `Default` yields a midnight-to-midnight event with every list empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Clock time the work started.
    pub begin: NaiveTime,
    /// Clock time the work ended. May be earlier than `begin` when the
    /// event runs past midnight.
    pub end: NaiveTime,
    /// Who the work was done with, in the order written.
    #[serde(default)]
    pub companies: Vec<String>,
    /// Where the work was done, in the order written.
    #[serde(default)]
    pub locations: Vec<String>,
    /// Free-text notes: the inline `: desc` first, then each bullet.
    #[serde(default)]
    pub descriptions: Vec<String>,
}

impl Event {
    /// Creates an event with no companions, locations or notes.
    pub const fn new(begin: NaiveTime, end: NaiveTime) -> Self {
        Self {
            begin,
            end,
            companies: Vec::new(),
            locations: Vec::new(),
            descriptions: Vec::new(),
        }
    }

    /// Time worked.
    ///
    /// An end that is not strictly after the begin wraps past midnight, so
    /// identical clock times count as a full 24 hours.
    pub fn duration(&self) -> TimeDelta {
        let elapsed = self.end.signed_duration_since(self.begin);
        if self.begin < self.end {
            elapsed
        } else {
            elapsed + TimeDelta::days(1)
        }
    }
}

/// One dated section of the log and the events recorded under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Day {
    /// The heading was marked `TODO:`; the day is not ready to report.
    pub is_todo: bool,
    pub date: NaiveDate,
    #[serde(default)]
    pub events: Vec<Event>,
}

impl Day {
    pub const fn new(date: NaiveDate, is_todo: bool) -> Self {
        Self {
            is_todo,
            date,
            events: Vec::new(),
        }
    }

    /// Sum of every event's duration.
    pub fn total_duration(&self) -> TimeDelta {
        self.events.iter().map(Event::duration).sum()
    }

    /// Every description of every event, in event order.
    pub fn descriptions(&self) -> impl Iterator<Item = &str> {
        self.events
            .iter()
            .flat_map(|event| event.descriptions.iter().map(String::as_str))
    }
}
