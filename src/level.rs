//! Severity and verbosity levels
//!
//! All comparisons happen on one ordered scale. The four standard severities
//! sit at fixed slots; verbose levels extend downward from debug:
//!
//! ```text
//!   ERROR   8
//!   WARN    4
//!   INFO    0
//!   DEBUG  -4   == Level::verbose(0)
//!          -5   == Level::verbose(1)
//!          -6   == Level::verbose(2)
//!          ...
//! ```

use std::fmt;

/// A point on the internal severity scale. Larger is more severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Level(i64);

impl Level {
    pub const ERROR: Level = Level(8);
    pub const WARN: Level = Level(4);
    pub const INFO: Level = Level(0);
    pub const DEBUG: Level = Level(-4);

    /// Build a level from its raw value on the internal scale.
    pub const fn from_raw(raw: i64) -> Self {
        Level(raw)
    }

    /// Translate a caller-facing verbosity (0 = debug, larger = more detail)
    /// onto the internal scale.
    pub const fn verbose(verbosity: u32) -> Self {
        Level(Self::DEBUG.0 - verbosity as i64)
    }

    /// Inverse of [`Level::verbose`]. `None` for anything above debug.
    pub fn verbosity(self) -> Option<u32> {
        if self.0 > Self::DEBUG.0 {
            return None;
        }
        Self::DEBUG
            .0
            .checked_sub(self.0)
            .and_then(|offset| u32::try_from(offset).ok())
    }

    /// True for exactly error, warn, info and debug.
    pub fn is_standard(self) -> bool {
        matches!(self, Self::ERROR | Self::WARN | Self::INFO | Self::DEBUG)
    }

    /// True for levels strictly below debug.
    pub fn is_verbose(self) -> bool {
        self < Self::DEBUG
    }
}

impl fmt::Display for Level {
    /// Names the nearest standard level at or below `self`, with an offset
    /// when it does not sit exactly on that slot (`DEBUG-2`, `INFO+1`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (base, name) = if *self < Self::INFO {
            (Self::DEBUG, "DEBUG")
        } else if *self < Self::WARN {
            (Self::INFO, "INFO")
        } else if *self < Self::ERROR {
            (Self::WARN, "WARN")
        } else {
            (Self::ERROR, "ERROR")
        };

        let offset = self.0 - base.0;
        if offset == 0 {
            f.write_str(name)
        } else {
            write!(f, "{}{:+}", name, offset)
        }
    }
}
