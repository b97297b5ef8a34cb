//! Sorting raw lines into date headings, event headings and bullets.

use crate::date::{DateHeading, DateParser};
use crate::description::DescriptionParser;
use crate::event::EventParser;
use crate::matcher::first_match;
use crate::model::Event;

/// A line recognised as one of the three log line kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Date(DateHeading),
    Event(Event),
    Description(String),
}

/// Ordered grammars for each line kind.
///
/// Kinds are tried date first, then event, then description; within a
/// kind the first listed grammar that matches wins.
#[derive(Debug, Clone)]
pub struct LineClassifier {
    dates: Vec<DateParser>,
    events: Vec<EventParser>,
    descriptions: Vec<DescriptionParser>,
}

impl Default for LineClassifier {
    fn default() -> Self {
        Self::new(
            DateParser::standard(),
            EventParser::standard(),
            DescriptionParser::standard(),
        )
    }
}

impl LineClassifier {
    pub const fn new(
        dates: Vec<DateParser>,
        events: Vec<EventParser>,
        descriptions: Vec<DescriptionParser>,
    ) -> Self {
        Self {
            dates,
            events,
            descriptions,
        }
    }

    /// Classifies one line, or returns `None` if no grammar accepts it.
    pub fn classify(&self, line: &str) -> Option<Line> {
        if let Some(heading) = first_match(&self.dates, line) {
            return Some(Line::Date(heading));
        }
        if let Some(event) = first_match(&self.events, line) {
            return Some(Line::Event(event));
        }
        first_match(&self.descriptions, line).map(Line::Description)
    }
}
