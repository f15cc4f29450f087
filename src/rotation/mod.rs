//! Rotating File Writer Module
//!
//! Mirrors log output into a bounded, cyclic pool of files.
//!
//! ## Responsibilities
//! - Validate the target directory up front
//! - Count bytes written to the current file
//! - Move to the next file once the size threshold is crossed
//! - Reuse (truncate) old files when the pool wraps around
//!
//! ## File Layout
//! ```text
//! {log_directory}/
//!   ├── {prefix}.0.log
//!   ├── {prefix}.1.log
//!   ├── ...
//!   └── {prefix}.{max_file_count - 1}.log
//! ```
//!
//! ## State Machine
//! ```text
//!            new() ── rotate ──┐
//!                              ▼
//!   ┌───────────────► Open(index, bytes) ──── write: bytes += n
//!   │                          │               bytes > max ⇒ rotate, bytes = 0
//!   │   rotate: close current, │
//!   └── index = (index+1) % M, ┘
//!       create/truncate file
//!
//!   close() ──► Closed (every later write/rotate fails)
//! ```

mod state;
mod writer;

pub use writer::RotatingFileWriter;
