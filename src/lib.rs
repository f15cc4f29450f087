//! # sblog
//!
//! A small leveled logger with:
//! - Four standard severities (error, warn, info, debug)
//! - Unbounded verbose levels below debug, gated by a configured maximum
//! - Colored, multi-line rendering of key/value attributes
//! - Optional mirroring of all output into size-rotated files
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         Logger                               │
//! │        error / warn / info / debug / log(Level::verbose)     │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                    OutputRouter                              │
//! │          (enablement gate + RecordFormatter)                 │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌────────────────────┐
//!   │   Console   │          │ RotatingFileWriter │
//!   │ stdout/err  │          │  {prefix}.{N}.log  │
//!   └─────────────┘          └────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use sblog::{attrs, Level, Logger, LoggerOptions};
//!
//! let logger = Logger::new(LoggerOptions::builder().current_verbosity_level(2).build())?;
//! logger.info("request served", &attrs!["status" => 200])?;
//! logger.log(Level::verbose(2), "cache probe", &[])?;
//! # Ok::<(), sblog::LogError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod level;
pub mod record;
pub mod format;
pub mod rotation;
pub mod sink;
pub mod handler;
pub mod router;
pub mod logger;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{LogError, Result};
pub use config::{LoggerOptions, RotationConfig};
pub use level::Level;
pub use record::{Attr, Record, Value};
pub use format::{RecordFormatter, Style};
pub use rotation::RotatingFileWriter;
pub use sink::{ConsoleSink, LineSink, MemorySink};
pub use handler::Handler;
pub use router::OutputRouter;
pub use logger::Logger;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of sblog
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
