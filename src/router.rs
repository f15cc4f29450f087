//! Output Router
//!
//! Gates records by level and fans each enabled, rendered line out to its
//! destinations.
//!
//! ## Destinations
//! ```text
//!   ERROR              ──► stderr sink ──► [file writer]
//!   WARN/INFO/DEBUG    ──► stdout sink ──► [file writer]
//!   verbose (enabled)  ──► stdout sink ──► [file writer]
//! ```
//!
//! Writes within a fan-out are sequential and independent. Every target is
//! attempted; the first failure in fan-out order is the one reported.

use std::sync::Arc;

use crate::config::LoggerOptions;
use crate::error::Result;
use crate::format::{RecordFormatter, Style};
use crate::handler::{unsupported, Handler};
use crate::level::Level;
use crate::record::{Attr, Record};
use crate::rotation::RotatingFileWriter;
use crate::sink::LineSink;

/// One destination and the style it is rendered with
#[derive(Clone)]
struct Target {
    sink: Arc<dyn LineSink>,
    style: Style,
}

/// Level gate plus stdout / stderr fan-out
pub struct OutputRouter {
    formatter: RecordFormatter,

    /// Lowest verbose level still printed
    verbosity_floor: Level,

    stdout_targets: Vec<Target>,
    stderr_targets: Vec<Target>,

    file: Option<Arc<RotatingFileWriter>>,
}

impl OutputRouter {
    /// Build a router writing to the given console sinks and, when present,
    /// mirroring every line into `file`
    pub fn new(
        options: &LoggerOptions,
        stdout: Arc<dyn LineSink>,
        stderr: Arc<dyn LineSink>,
        file: Option<Arc<RotatingFileWriter>>,
    ) -> Self {
        let console_style = options.console_style;
        let mut stdout_targets = vec![Target { sink: stdout, style: console_style }];
        let mut stderr_targets = vec![Target { sink: stderr, style: console_style }];

        if let Some(writer) = &file {
            let file_target = Target {
                sink: Arc::clone(writer) as Arc<dyn LineSink>,
                style: options.file_style,
            };
            stdout_targets.push(file_target.clone());
            stderr_targets.push(file_target);
        }

        Self {
            formatter: RecordFormatter::new(
                options.effective_time_format(),
                options.current_verbosity_level,
            ),
            verbosity_floor: Level::verbose(options.current_verbosity_level),
            stdout_targets,
            stderr_targets,
            file,
        }
    }

    /// Standard severities are always enabled. Verbose levels are enabled
    /// up to the configured verbosity; anything else never is.
    pub fn enabled(&self, level: Level) -> bool {
        if level.is_standard() {
            return true;
        }
        level.is_verbose() && level >= self.verbosity_floor
    }

    /// Render and fan out one record. Disabled records are dropped.
    pub fn route(&self, record: &Record) -> Result<()> {
        if !self.enabled(record.level) {
            return Ok(());
        }

        let targets = if record.level == Level::ERROR {
            &self.stderr_targets
        } else {
            &self.stdout_targets
        };
        self.fan_out(targets, record)
    }

    fn fan_out(&self, targets: &[Target], record: &Record) -> Result<()> {
        let mut rendered: Vec<(Style, String)> = Vec::with_capacity(2);
        let mut first_err = None;

        for target in targets {
            let slot = match rendered.iter().position(|(style, _)| *style == target.style) {
                Some(slot) => slot,
                None => {
                    let line = self.formatter.format(record, target.style);
                    rendered.push((target.style, line));
                    rendered.len() - 1
                }
            };

            if let Err(e) = target.sink.write_line(rendered[slot].1.as_bytes()) {
                first_err.get_or_insert(e);
            }
        }

        match first_err {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// The file mirror, when persistence is configured
    pub fn file_writer(&self) -> Option<&Arc<RotatingFileWriter>> {
        self.file.as_ref()
    }
}

impl Handler for OutputRouter {
    fn enabled(&self, level: Level) -> bool {
        OutputRouter::enabled(self, level)
    }

    fn handle(&self, record: &Record) -> Result<()> {
        self.route(record)
    }

    fn with_attrs(&self, _attrs: &[Attr]) -> Box<dyn Handler> {
        unsupported("with_attrs")
    }

    fn with_group(&self, _name: &str) -> Box<dyn Handler> {
        unsupported("with_group")
    }
}
