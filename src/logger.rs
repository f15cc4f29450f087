//! Logger
//!
//! The emission surface callers use: one method per standard severity plus
//! [`Logger::log`] for explicit (usually verbose) levels.
//!
//! ## Responsibilities
//! - Build the file mirror when a log directory is configured
//! - Skip records the handler would not print, before building them
//! - Expose explicit rotation and shutdown of the file mirror

use std::sync::Arc;

use tracing::debug;

use crate::config::LoggerOptions;
use crate::error::{LogError, Result};
use crate::handler::Handler;
use crate::level::Level;
use crate::record::{Attr, Record};
use crate::rotation::RotatingFileWriter;
use crate::router::OutputRouter;
use crate::sink::{ConsoleSink, LineSink};

/// A leveled logger owning its handler and, optionally, a file mirror
pub struct Logger {
    handler: Box<dyn Handler>,

    /// Same writer the handler fans out to; kept for rotate/close
    file: Option<Arc<RotatingFileWriter>>,
}

impl Logger {
    /// Create a logger printing to the process stdout / stderr
    ///
    /// When `options.rotation.log_directory` is set every printed line is
    /// mirrored into rotated files in that directory, which must exist.
    pub fn new(options: LoggerOptions) -> Result<Self> {
        Self::with_sinks(
            options,
            Arc::new(ConsoleSink::stdout()),
            Arc::new(ConsoleSink::stderr()),
        )
    }

    /// Create a logger printing to caller-provided console sinks
    pub fn with_sinks(
        options: LoggerOptions,
        stdout: Arc<dyn LineSink>,
        stderr: Arc<dyn LineSink>,
    ) -> Result<Self> {
        options.validate()?;

        let file = if options.rotation.is_enabled() {
            let writer = RotatingFileWriter::new(options.rotation.clone())?;
            debug!(
                dir = %writer.config().log_directory.display(),
                max_files = writer.config().max_file_count,
                max_bytes = writer.config().max_file_size_bytes,
                "persistent logging enabled"
            );
            Some(Arc::new(writer))
        } else {
            None
        };

        let router = OutputRouter::new(&options, stdout, stderr, file.clone());
        Ok(Self {
            handler: Box::new(router),
            file,
        })
    }

    // =========================================================================
    // Emission
    // =========================================================================

    pub fn error(&self, message: &str, attrs: &[Attr]) -> Result<()> {
        self.log(Level::ERROR, message, attrs)
    }

    pub fn warn(&self, message: &str, attrs: &[Attr]) -> Result<()> {
        self.log(Level::WARN, message, attrs)
    }

    pub fn info(&self, message: &str, attrs: &[Attr]) -> Result<()> {
        self.log(Level::INFO, message, attrs)
    }

    pub fn debug(&self, message: &str, attrs: &[Attr]) -> Result<()> {
        self.log(Level::DEBUG, message, attrs)
    }

    /// Emit at an explicit level, e.g. `Level::verbose(2)`
    pub fn log(&self, level: Level, message: &str, attrs: &[Attr]) -> Result<()> {
        if !self.handler.enabled(level) {
            return Ok(());
        }
        let record = Record::new(level, message, attrs.to_vec());
        self.handler.handle(&record)
    }

    pub fn enabled(&self, level: Level) -> bool {
        self.handler.enabled(level)
    }

    // =========================================================================
    // Capability extensions
    // =========================================================================

    /// Panics unless the handler supports persistent attributes
    pub fn with_attrs(&self, attrs: &[Attr]) -> Logger {
        Logger {
            handler: self.handler.with_attrs(attrs),
            file: self.file.clone(),
        }
    }

    /// Panics unless the handler supports groups
    pub fn with_group(&self, name: &str) -> Logger {
        Logger {
            handler: self.handler.with_group(name),
            file: self.file.clone(),
        }
    }

    // =========================================================================
    // File mirror
    // =========================================================================

    /// Force the file mirror onto its next file
    pub fn rotate(&self) -> Result<()> {
        match &self.file {
            Some(writer) => writer.rotate(),
            None => Err(LogError::Config(
                "file persistence is not configured".to_string(),
            )),
        }
    }

    /// Close the file mirror. Console output is unaffected; lines that
    /// would have gone to the file report `WriterClosed`.
    pub fn close(&self) -> Result<()> {
        match &self.file {
            Some(writer) => writer.close(),
            None => Ok(()),
        }
    }

    pub fn file_writer(&self) -> Option<&Arc<RotatingFileWriter>> {
        self.file.as_ref()
    }
}
