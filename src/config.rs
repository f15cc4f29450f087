//! Configuration for sblog
//!
//! Centralized options with sensible defaults. Zero or empty values mean
//! "unset" and are replaced by the defaults below when a logger or writer is
//! built.

use std::path::PathBuf;

use crate::error::Result;
use crate::format::{self, Style, DEFAULT_TIME_FORMAT};

/// Default file name prefix for rotated logs
pub const DEFAULT_LOG_NAME_PREFIX: &str = "sblog";

/// Default number of files in the rotation
pub const DEFAULT_MAX_FILE_COUNT: u32 = 1;

/// Default size threshold per file (1 MB)
pub const DEFAULT_MAX_FILE_SIZE_BYTES: u64 = 1_000_000;

/// Options for the rotating file writer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RotationConfig {
    /// Directory the log files are placed in. It must already exist; it is
    /// never created. Empty disables file persistence.
    pub log_directory: PathBuf,

    /// Files are named `<log_name_prefix>.<N>.log`
    pub log_name_prefix: String,

    /// Number of files in the rotation. Once reached, old files are reused
    /// and truncated.
    pub max_file_count: u32,

    /// Byte count after which the writer moves to the next file. A line is
    /// never split, so a file may end up slightly larger.
    pub max_file_size_bytes: u64,
}

impl RotationConfig {
    /// Config for `dir` with every other field defaulted
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            log_directory: dir.into(),
            ..Self::default()
        }
    }

    /// True when a log directory was configured
    pub fn is_enabled(&self) -> bool {
        !self.log_directory.as_os_str().is_empty()
    }

    /// Copy with unset fields replaced by their defaults
    pub fn with_defaults(&self) -> Self {
        let mut config = self.clone();
        if config.log_name_prefix.is_empty() {
            config.log_name_prefix = DEFAULT_LOG_NAME_PREFIX.to_string();
        }
        if config.max_file_count == 0 {
            config.max_file_count = DEFAULT_MAX_FILE_COUNT;
        }
        if config.max_file_size_bytes == 0 {
            config.max_file_size_bytes = DEFAULT_MAX_FILE_SIZE_BYTES;
        }
        config
    }

    /// Path of the file at rotation slot `index`
    pub fn file_path(&self, index: u32) -> PathBuf {
        self.log_directory
            .join(format!("{}.{}.log", self.log_name_prefix, index))
    }
}

/// Main configuration for a logger instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerOptions {
    // -------------------------------------------------------------------------
    // Gating / Formatting
    // -------------------------------------------------------------------------
    /// Highest verbosity that is printed. Standard severities always print.
    pub current_verbosity_level: u32,

    /// strftime layout for timestamps. Empty means the default.
    pub time_format: String,

    // -------------------------------------------------------------------------
    // Destinations
    // -------------------------------------------------------------------------
    /// File mirroring; disabled while `log_directory` is empty
    pub rotation: RotationConfig,

    pub console_style: Style,

    pub file_style: Style,
}

impl Default for LoggerOptions {
    fn default() -> Self {
        Self {
            current_verbosity_level: 0,
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            rotation: RotationConfig::default(),
            console_style: Style::Ansi,
            file_style: Style::Ansi,
        }
    }
}

impl LoggerOptions {
    /// Create a new options builder
    pub fn builder() -> LoggerOptionsBuilder {
        LoggerOptionsBuilder::default()
    }

    /// The time layout actually used
    pub fn effective_time_format(&self) -> &str {
        if self.time_format.is_empty() {
            DEFAULT_TIME_FORMAT
        } else {
            &self.time_format
        }
    }

    /// Check the options before anything is opened
    pub fn validate(&self) -> Result<()> {
        format::validate_time_format(self.effective_time_format())
    }
}

/// Builder for LoggerOptions
#[derive(Default)]
pub struct LoggerOptionsBuilder {
    options: LoggerOptions,
}

impl LoggerOptionsBuilder {
    /// Set the highest verbosity level that is printed
    pub fn current_verbosity_level(mut self, level: u32) -> Self {
        self.options.current_verbosity_level = level;
        self
    }

    /// Set the strftime layout used for timestamps
    pub fn time_format(mut self, layout: impl Into<String>) -> Self {
        self.options.time_format = layout.into();
        self
    }

    /// Mirror output into rotated files under `dir`
    pub fn log_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.options.rotation.log_directory = dir.into();
        self
    }

    /// Set the log file name prefix
    pub fn log_name_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.options.rotation.log_name_prefix = prefix.into();
        self
    }

    /// Set the number of files in the rotation
    pub fn max_file_count(mut self, count: u32) -> Self {
        self.options.rotation.max_file_count = count;
        self
    }

    /// Set the per-file size threshold (in bytes)
    pub fn max_file_size_bytes(mut self, bytes: u64) -> Self {
        self.options.rotation.max_file_size_bytes = bytes;
        self
    }

    pub fn console_style(mut self, style: Style) -> Self {
        self.options.console_style = style;
        self
    }

    pub fn file_style(mut self, style: Style) -> Self {
        self.options.file_style = style;
        self
    }

    pub fn build(self) -> LoggerOptions {
        self.options
    }
}
