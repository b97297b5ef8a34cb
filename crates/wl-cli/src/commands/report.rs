//! Report command for printing time worked per day.
//!
//! Days whose heading is marked `TODO:` are left out of both the listing
//! and the grand total. Output is either human-readable text or JSON.

use std::fmt::Write as _;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{NaiveTime, TimeDelta};
use serde::Serialize;
use wl_core::{Day, Event};

// ========== Duration Formatting ==========

/// Formats a duration as `H:MM:SS`. Hours are not wrapped at 24.
pub fn format_duration(duration: TimeDelta) -> String {
    let seconds = duration.num_seconds().max(0);
    let hours = seconds / 3600;
    let minutes = seconds % 3600 / 60;
    let seconds = seconds % 60;
    format!("{hours}:{minutes:02}:{seconds:02}")
}

// ========== Report Generation ==========

/// A finished day and its time worked.
#[derive(Debug)]
pub struct DayReport<'a> {
    pub day: &'a Day,
    pub worked: TimeDelta,
}

/// Computed report data.
#[derive(Debug)]
pub struct ReportData<'a> {
    pub days: Vec<DayReport<'a>>,
    pub total: TimeDelta,
}

/// Totals every finished day, in log order.
pub fn generate_report_data(days: &[Day]) -> ReportData<'_> {
    let days: Vec<_> = days
        .iter()
        .filter(|day| !day.is_todo)
        .map(|day| DayReport {
            day,
            worked: day.total_duration(),
        })
        .collect();
    let total = days.iter().map(|report| report.worked).sum();

    ReportData { days, total }
}

/// Formats the human-readable report output.
pub fn format_report(data: &ReportData<'_>) -> String {
    let mut output = String::new();

    for report in &data.days {
        writeln!(
            output,
            "{} (worked {})",
            report.day.date.format("%Y-%m-%d"),
            format_duration(report.worked)
        )
        .unwrap();
        for description in report.day.descriptions() {
            writeln!(output, "* {description}").unwrap();
        }
        writeln!(output).unwrap();
    }

    writeln!(output, "Total time worked: {}", format_duration(data.total)).unwrap();
    output
}

// ========== JSON Output ==========

/// JSON report structure.
#[derive(Debug, Serialize)]
pub struct JsonReport {
    pub days: Vec<JsonDay>,
    pub total: String,
    pub total_seconds: i64,
}

#[derive(Debug, Serialize)]
pub struct JsonDay {
    pub date: String,
    pub worked: String,
    pub worked_seconds: i64,
    pub descriptions: Vec<String>,
    pub events: Vec<JsonEvent>,
}

#[derive(Debug, Serialize)]
pub struct JsonEvent {
    pub begin: String,
    pub end: String,
    pub companies: Vec<String>,
    pub locations: Vec<String>,
    pub descriptions: Vec<String>,
    pub duration_seconds: i64,
}

fn clock(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

impl From<&Event> for JsonEvent {
    fn from(event: &Event) -> Self {
        Self {
            begin: clock(event.begin),
            end: clock(event.end),
            companies: event.companies.clone(),
            locations: event.locations.clone(),
            descriptions: event.descriptions.clone(),
            duration_seconds: event.duration().num_seconds(),
        }
    }
}

/// Formats report data as JSON.
pub fn format_report_json(data: &ReportData<'_>) -> Result<String> {
    let report = JsonReport {
        days: data
            .days
            .iter()
            .map(|report| JsonDay {
                date: report.day.date.format("%Y-%m-%d").to_string(),
                worked: format_duration(report.worked),
                worked_seconds: report.worked.num_seconds(),
                descriptions: report.day.descriptions().map(str::to_string).collect(),
                events: report.day.events.iter().map(JsonEvent::from).collect(),
            })
            .collect(),
        total: format_duration(data.total),
        total_seconds: data.total.num_seconds(),
    };

    Ok(serde_json::to_string_pretty(&report)?)
}

// ========== Public Interface ==========

/// Reads the work log at `path` and writes its report.
pub fn run<W: Write>(writer: &mut W, path: &Path, json: bool) -> Result<()> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read work log {}", path.display()))?;
    let days = wl_core::parse_str(&text);
    tracing::debug!(path = %path.display(), days = days.len(), "parsed work log");

    let data = generate_report_data(&days);
    if json {
        let output = format_report_json(&data)?;
        writeln!(writer, "{output}")?;
    } else {
        write!(writer, "{}", format_report(&data))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use insta::assert_snapshot;

    const SAMPLE: &str = "\
# 2024-01-01
* 0900-1700 with Acme, Co at HQ: Wrote spec
  * Reviewed PR

# TODO: 2024-02-02
* 2200-0200: Night shift

# January 3rd, 2024
* 2330-0030: Deploy
* 0900-0930
  * Standup
# 01-04-2024
";

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(TimeDelta::zero()), "0:00:00");
        assert_eq!(format_duration(TimeDelta::hours(8)), "8:00:00");
        assert_eq!(format_duration(TimeDelta::minutes(90)), "1:30:00");
        assert_eq!(format_duration(TimeDelta::seconds(3_725)), "1:02:05");
    }

    #[test]
    fn test_format_duration_does_not_wrap_days() {
        assert_eq!(format_duration(TimeDelta::hours(24)), "24:00:00");
        assert_eq!(format_duration(TimeDelta::minutes(53 * 60 + 30)), "53:30:00");
    }

    #[test]
    fn test_format_duration_negative_is_zero() {
        assert_eq!(format_duration(TimeDelta::minutes(-5)), "0:00:00");
    }

    #[test]
    fn test_todo_days_are_excluded_from_totals() {
        let days = wl_core::parse_str(SAMPLE);
        assert_eq!(days.len(), 4);

        let data = generate_report_data(&days);
        let dates: Vec<_> = data.days.iter().map(|r| r.day.date.to_string()).collect();
        assert_eq!(dates, ["2024-01-01", "2024-01-03", "2024-01-04"]);
        assert_eq!(data.days[0].worked, TimeDelta::hours(8));
        assert_eq!(data.days[1].worked, TimeDelta::minutes(90));
        assert_eq!(data.days[2].worked, TimeDelta::zero());
        assert_eq!(data.total, TimeDelta::minutes(8 * 60 + 90));
    }

    #[test]
    fn test_only_todo_days_gives_zero_total() {
        let days = wl_core::parse_str("# TODO: 2024-02-02\n* 2200-0200: Night shift\n");
        let output = format_report(&generate_report_data(&days));
        assert_eq!(output, "Total time worked: 0:00:00\n");
    }

    #[test]
    fn test_report_text() {
        let days = wl_core::parse_str(SAMPLE);
        let output = format_report(&generate_report_data(&days));
        assert_snapshot!(output, @r"
2024-01-01 (worked 8:00:00)
* Wrote spec
* Reviewed PR

2024-01-03 (worked 1:30:00)
* Deploy
* Standup

2024-01-04 (worked 0:00:00)

Total time worked: 9:30:00
");
    }

    #[test]
    fn test_report_json_output() {
        let days = wl_core::parse_str(
            "# 2024-01-01\n* 0900-1700 with Acme, Co at HQ: Wrote spec\n  * Reviewed PR\n",
        );
        let output = format_report_json(&generate_report_data(&days)).unwrap();
        assert_snapshot!(output, @r#"
{
  "days": [
    {
      "date": "2024-01-01",
      "worked": "8:00:00",
      "worked_seconds": 28800,
      "descriptions": [
        "Wrote spec",
        "Reviewed PR"
      ],
      "events": [
        {
          "begin": "09:00",
          "end": "17:00",
          "companies": [
            "Acme",
            "Co"
          ],
          "locations": [
            "HQ"
          ],
          "descriptions": [
            "Wrote spec",
            "Reviewed PR"
          ],
          "duration_seconds": 28800
        }
      ]
    }
  ],
  "total": "8:00:00",
  "total_seconds": 28800
}
"#);
    }

    #[test]
    fn test_run_reads_file() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("log.md");
        std::fs::write(&path, "# 2024-01-01\n* 0900-0915: Call\n").unwrap();

        let mut output = Vec::new();
        run(&mut output, &path, false).unwrap();

        let output = String::from_utf8(output).unwrap();
        assert_eq!(
            output,
            "2024-01-01 (worked 0:15:00)\n* Call\n\nTotal time worked: 0:15:00\n"
        );
    }

    #[test]
    fn test_run_missing_file_errors() {
        let temp = tempfile::tempdir().unwrap();
        let mut output = Vec::new();
        let err = run(&mut output, &temp.path().join("absent.md"), false).unwrap_err();
        assert!(err.to_string().contains("failed to read work log"));
        assert!(output.is_empty());
    }
}
