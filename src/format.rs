//! Record formatting
//!
//! Renders a [`Record`] into one display line:
//!
//! ```text
//! [INFO] (Jan  2 15:04:05.000000000) request served status=200
//! [WARN] (Jan  2 15:04:05.000000000) slow request
//!     → took_ms=1200
//!     → route=/index
//! [VERBOS][lvl 2/3] (Jan  2 15:04:05.000000000) cache probe
//! ```
//!
//! How the header and keys are decorated is chosen per destination with
//! [`Style`].

use std::fmt::Write as _;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local};

use crate::error::{LogError, Result};
use crate::level::Level;
use crate::record::{Record, Value};

/// strftime equivalent of a stamp with nanoseconds: `Jan  2 15:04:05.000000000`
pub const DEFAULT_TIME_FORMAT: &str = "%b %e %H:%M:%S%.9f";

const RESET: &str = "\u{1b}[0m";
const GRAY: &str = "\u{1b}[90m";

/// Presentation strategy for a destination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    /// ANSI color escape sequences around the header and keys
    #[default]
    Ansi,

    /// Same text, no escape sequences
    Plain,
}

impl Style {
    fn header_color(self, level: Level) -> Option<&'static str> {
        match self {
            Style::Plain => None,
            Style::Ansi => Some(match level {
                Level::DEBUG => "\u{1b}[35m",
                Level::INFO => "\u{1b}[36m",
                Level::WARN => "\u{1b}[33m",
                Level::ERROR => "\u{1b}[31m",
                _ => GRAY,
            }),
        }
    }

    fn key_color(self) -> Option<&'static str> {
        match self {
            Style::Plain => None,
            Style::Ansi => Some(GRAY),
        }
    }
}

/// Reject strftime layouts chrono cannot render
pub fn validate_time_format(layout: &str) -> Result<()> {
    if StrftimeItems::new(layout).any(|item| matches!(item, Item::Error)) {
        return Err(LogError::Config(format!("invalid time format: {:?}", layout)));
    }
    Ok(())
}

/// Turns records into text lines
#[derive(Debug, Clone)]
pub struct RecordFormatter {
    time_format: String,
    max_verbosity: u32,
}

impl RecordFormatter {
    /// `max_verbosity` is only printed, in the `lvl <n>/<max>` tag of verbose
    /// records; gating is the router's job.
    pub fn new(time_format: impl Into<String>, max_verbosity: u32) -> Self {
        Self {
            time_format: time_format.into(),
            max_verbosity,
        }
    }

    /// Render one newline-terminated line
    pub fn format(&self, record: &Record, style: Style) -> String {
        let mut line = String::with_capacity(64 + record.message.len());

        if let Some(color) = style.header_color(record.level) {
            line.push_str(color);
        }
        self.push_tag(&mut line, record.level);
        line.push_str(" (");
        line.push_str(&self.timestamp(&record.time));
        line.push(')');
        if style.header_color(record.level).is_some() {
            line.push_str(RESET);
        }

        line.push(' ');
        line.push_str(&record.message);
        push_attrs(&mut line, record, style);
        line.push('\n');
        line
    }

    fn push_tag(&self, line: &mut String, level: Level) {
        match level.verbosity() {
            Some(verbosity) if level.is_verbose() => {
                let _ = write!(
                    line,
                    "[VERBOS][lvl {}/{}]",
                    verbosity, self.max_verbosity
                );
            }
            _ => {
                let _ = write!(line, "[{}]", level);
            }
        }
    }

    fn timestamp(&self, time: &DateTime<Local>) -> String {
        let mut out = String::new();
        if write!(out, "{}", time.format(&self.time_format)).is_err() {
            out.clear();
            out.push_str(&time.to_rfc3339());
        }
        out
    }
}

impl Default for RecordFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_TIME_FORMAT, 0)
    }
}

/// A lone valued attribute stays on the message line; otherwise every
/// attribute gets its own indented line, in record order.
fn push_attrs(line: &mut String, record: &Record, style: Style) {
    let inline = record.valued_attr_count() == 1;

    if inline {
        if let Some((key, value)) = record
            .attrs
            .iter()
            .find_map(|a| a.value.as_ref().map(|v| (&a.key, v)))
        {
            line.push(' ');
            push_pair(line, key, value, style);
        }
    }

    for attr in &record.attrs {
        match &attr.value {
            None => {
                line.push_str("\n\t→ ");
                line.push_str(&attr.key);
            }
            Some(value) if !inline => {
                line.push_str("\n\t→ ");
                push_pair(line, &attr.key, value, style);
            }
            Some(_) => {}
        }
    }
}

fn push_pair(line: &mut String, key: &str, value: &Value, style: Style) {
    let _ = match style.key_color() {
        Some(color) => write!(line, "{}{}={}{}", color, key, RESET, value),
        None => write!(line, "{}={}", key, value),
    };
}
