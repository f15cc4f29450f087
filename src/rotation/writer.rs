//! Rotating File Writer
//!
//! Handles appending log lines to the current file and advancing through the
//! rotation.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::PathBuf;

use parking_lot::Mutex;
use tracing::{debug, warn};

use super::state::RotationState;
use crate::config::RotationConfig;
use crate::error::{LogError, Result};

/// Writes log output into a bounded pool of files
///
/// ## Concurrency
/// `write`, `rotate` and `close` take the same lock, so they are totally
/// ordered across threads. A rotation triggered by `write` runs under the
/// guard `write` already holds.
pub struct RotatingFileWriter {
    /// Options with defaults applied
    config: RotationConfig,

    /// Index, byte counter and handle
    state: Mutex<RotationState>,
}

impl RotatingFileWriter {
    /// Validate the directory and open the first file of the rotation
    ///
    /// The directory must already exist; it is never created.
    pub fn new(config: RotationConfig) -> Result<Self> {
        let path = config.log_directory.clone();
        let metadata = fs::metadata(&path)
            .map_err(|source| LogError::DirectoryLookup { path: path.clone(), source })?;
        if !metadata.is_dir() {
            return Err(LogError::NotADirectory(path));
        }

        let writer = Self {
            config: config.with_defaults(),
            state: Mutex::new(RotationState::new()),
        };
        writer.rotate()?;
        Ok(writer)
    }

    /// Append `buf` to the current file
    ///
    /// Once the running byte count passes `max_file_size_bytes` the writer
    /// rotates and resets the count to zero, whether or not the rotation
    /// succeeded. A write is never split, so the file that triggered the
    /// rotation may exceed the threshold by up to `buf.len()` bytes.
    pub fn write(&self, buf: &[u8]) -> Result<usize> {
        let mut state = self.state.lock();
        if state.closed {
            return Err(LogError::WriterClosed);
        }
        let file = state.file.as_mut().ok_or(LogError::NoOpenFile)?;
        let (written, failure) = append(file, buf);

        state.bytes_written += written as u64;
        if let Some(source) = failure {
            return Err(match written {
                0 => LogError::Io(source),
                _ => LogError::PartialWrite { written, source },
            });
        }
        if state.bytes_written > self.config.max_file_size_bytes {
            let rotated = self.rotate_locked(&mut state);
            state.bytes_written = 0;
            if let Err(e) = rotated {
                warn!(error = %e, "log rotation failed");
                return Err(LogError::Rotation {
                    written,
                    source: Box::new(e),
                });
            }
        }

        Ok(written)
    }

    /// Close the current file and open the next one, truncating it
    ///
    /// A failure to close the current file aborts the rotation and leaves
    /// the writer without a file; a later successful `rotate` recovers it.
    pub fn rotate(&self) -> Result<()> {
        let mut state = self.state.lock();
        if state.closed {
            return Err(LogError::WriterClosed);
        }
        self.rotate_locked(&mut state)
    }

    /// Close the current file. Every later write or rotation fails.
    pub fn close(&self) -> Result<()> {
        let mut state = self.state.lock();
        state.closed = true;
        match state.file.take() {
            Some(file) => self.close_file(file, state.index.unwrap_or(0)),
            None => Ok(()),
        }
    }

    fn rotate_locked(&self, state: &mut RotationState) -> Result<()> {
        if let Some(file) = state.file.take() {
            self.close_file(file, state.index.unwrap_or(0))?;
        }

        let index = state.next_index(self.config.max_file_count);
        state.index = Some(index);

        let path = self.config.file_path(index);
        let file = File::create(&path)
            .map_err(|source| LogError::FileCreate { path: path.clone(), source })?;
        state.file = Some(file);
        state.bytes_written = 0;

        debug!(index, path = %path.display(), "opened log file");
        Ok(())
    }

    fn close_file(&self, file: File, index: u32) -> Result<()> {
        file.sync_all().map_err(|source| LogError::FileClose {
            path: self.config.file_path(index),
            source,
        })
    }

    // =========================================================================
    // Accessors (for testing and debugging)
    // =========================================================================

    /// Slot of the current (or last attempted) file
    pub fn current_index(&self) -> u32 {
        self.state.lock().index.unwrap_or(0)
    }

    /// Path of the current (or last attempted) file
    pub fn current_path(&self) -> PathBuf {
        self.config.file_path(self.current_index())
    }

    /// Bytes written to the current file since it was opened
    pub fn bytes_written(&self) -> u64 {
        self.state.lock().bytes_written
    }

    /// True while a file handle is held
    pub fn has_open_file(&self) -> bool {
        self.state.lock().file.is_some()
    }

    pub fn is_closed(&self) -> bool {
        self.state.lock().closed
    }

    /// The configuration with defaults applied
    pub fn config(&self) -> &RotationConfig {
        &self.config
    }
}

/// Write all of `buf`, returning how much landed and the error that stopped
/// it, if any
fn append(out: &mut impl Write, buf: &[u8]) -> (usize, Option<io::Error>) {
    let mut written = 0;
    while written < buf.len() {
        match out.write(&buf[written..]) {
            Ok(0) => {
                let err = io::Error::new(io::ErrorKind::WriteZero, "failed to write whole buffer");
                return (written, Some(err));
            }
            Ok(n) => written += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return (written, Some(e)),
        }
    }
    (written, None)
}

/// Bytes that reached the file are reported as written, even when the
/// rotation they triggered failed afterwards.
impl Write for &RotatingFileWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match RotatingFileWriter::write(*self, buf) {
            Ok(written) => Ok(written),
            Err(LogError::Rotation { written, .. }) => Ok(written),
            Err(LogError::PartialWrite { written, .. }) => Ok(written),
            Err(e) => Err(into_io_error(e)),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn into_io_error(err: LogError) -> io::Error {
    match err {
        LogError::Io(e) => e,
        other => io::Error::new(io::ErrorKind::Other, other),
    }
}
