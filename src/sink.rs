//! Line destinations
//!
//! A sink receives fully rendered lines. Sinks are shared between threads
//! and do their own locking.

use std::io::{self, Write};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::Result;
use crate::rotation::RotatingFileWriter;

/// Destination for rendered log lines
pub trait LineSink: Send + Sync {
    /// Write one complete line
    fn write_line(&self, line: &[u8]) -> Result<()>;
}

impl<T: LineSink + ?Sized> LineSink for Arc<T> {
    fn write_line(&self, line: &[u8]) -> Result<()> {
        (**self).write_line(line)
    }
}

impl LineSink for RotatingFileWriter {
    fn write_line(&self, line: &[u8]) -> Result<()> {
        self.write(line).map(|_| ())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConsoleStream {
    Stdout,
    Stderr,
}

/// Process stdout / stderr
#[derive(Debug, Clone, Copy)]
pub struct ConsoleSink {
    stream: ConsoleStream,
}

impl ConsoleSink {
    pub fn stdout() -> Self {
        Self {
            stream: ConsoleStream::Stdout,
        }
    }

    pub fn stderr() -> Self {
        Self {
            stream: ConsoleStream::Stderr,
        }
    }
}

impl LineSink for ConsoleSink {
    fn write_line(&self, line: &[u8]) -> Result<()> {
        match self.stream {
            ConsoleStream::Stdout => io::stdout().lock().write_all(line)?,
            ConsoleStream::Stderr => io::stderr().lock().write_all(line)?,
        }
        Ok(())
    }
}

/// In-memory sink, for capturing output
#[derive(Debug, Default)]
pub struct MemorySink {
    buf: Mutex<Vec<u8>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buf.lock()).into_owned()
    }

    /// Captured lines, without their terminators
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }

    pub fn clear(&self) {
        self.buf.lock().clear();
    }
}

impl LineSink for MemorySink {
    fn write_line(&self, line: &[u8]) -> Result<()> {
        self.buf.lock().extend_from_slice(line);
        Ok(())
    }
}
