//! Folding classified lines into the day/event tree.

use crate::classify::{Line, LineClassifier};
use crate::model::{Day, Event};

/// Line-at-a-time builder of [`Day`] records.
///
/// At most one day and one event are open at a time. A new heading seals
/// whatever it supersedes; [`LogParser::finish`] seals the rest.
#[derive(Debug)]
pub struct LogParser<'a> {
    classifier: &'a LineClassifier,
    current_day: Option<Day>,
    current_event: Option<Event>,
    days: Vec<Day>,
    dropped: usize,
}

impl<'a> LogParser<'a> {
    pub const fn new(classifier: &'a LineClassifier) -> Self {
        Self {
            classifier,
            current_day: None,
            current_event: None,
            days: Vec::new(),
            dropped: 0,
        }
    }

    /// Classifies one line and applies it.
    pub fn feed(&mut self, line: &str) {
        match self.classifier.classify(line) {
            Some(line) => self.apply(line),
            None => {
                if !line.trim().is_empty() {
                    tracing::trace!(line, "dropping unrecognised line");
                }
                self.dropped += 1;
            }
        }
    }

    /// Applies an already-classified line.
    pub fn apply(&mut self, line: Line) {
        match line {
            Line::Date(heading) => {
                self.seal_event();
                self.seal_day();
                self.current_day = Some(Day::new(heading.date, heading.is_todo));
            }
            Line::Event(event) => {
                self.seal_event();
                self.current_event = Some(event);
            }
            Line::Description(text) => match self.current_event.as_mut() {
                Some(event) => event.descriptions.push(text),
                None => {
                    tracing::trace!(text, "dropping description outside an event");
                }
            },
        }
    }

    /// Seals anything still open and returns the days in input order.
    pub fn finish(mut self) -> Vec<Day> {
        self.seal_event();
        self.seal_day();
        tracing::debug!(
            days = self.days.len(),
            dropped = self.dropped,
            "finished parsing work log"
        );
        self.days
    }

    fn seal_event(&mut self) {
        let Some(event) = self.current_event.take() else {
            return;
        };
        match self.current_day.as_mut() {
            Some(day) => day.events.push(event),
            None => tracing::trace!(?event, "dropping event before first date heading"),
        }
    }

    fn seal_day(&mut self) {
        if let Some(day) = self.current_day.take() {
            tracing::debug!(date = %day.date, events = day.events.len(), todo = day.is_todo, "sealed day");
            self.days.push(day);
        }
    }
}

/// Parses a sequence of lines with the given classifier.
pub fn parse_lines_with<I, S>(classifier: &LineClassifier, lines: I) -> Vec<Day>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parser = LogParser::new(classifier);
    for line in lines {
        parser.feed(line.as_ref());
    }
    parser.finish()
}

/// Parses a sequence of lines with the built-in grammars.
pub fn parse_lines<I, S>(lines: I) -> Vec<Day>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    parse_lines_with(&LineClassifier::default(), lines)
}

/// Parses a whole work-log text.
pub fn parse_str(text: &str) -> Vec<Day> {
    parse_lines(text.lines())
}
