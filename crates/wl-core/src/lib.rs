//! Core logic for turning a plain-text work log into dated records.
//!
//! This crate contains:
//! - Model: days, events and the midnight-aware event duration
//! - Line grammars: date headings, event headings and description bullets
//! - Parsing: the state machine that folds lines into days and events

mod classify;
pub mod date;
pub mod description;
mod error;
pub mod event;
mod matcher;
mod model;
mod parser;

pub use classify::{Line, LineClassifier};
pub use date::{DateHeading, DateParser};
pub use description::DescriptionParser;
pub use error::ExtractError;
pub use event::EventParser;
pub use matcher::{LineMatcher, first_match};
pub use model::{Day, Event};
pub use parser::{LogParser, parse_lines, parse_lines_with, parse_str};
