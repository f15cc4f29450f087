//! Handler capability interface
//!
//! A [`Handler`] decides which records are printed and where they go. The
//! interface is total: it also names the attribute/group extensions, and a
//! handler that does not support them must panic rather than silently
//! ignore the call.

use crate::error::Result;
use crate::level::Level;
use crate::record::{Attr, Record};

pub trait Handler: Send + Sync {
    /// Whether a record at `level` would be printed
    fn enabled(&self, level: Level) -> bool;

    /// Print one record
    fn handle(&self, record: &Record) -> Result<()>;

    /// A handler whose records always carry `attrs`
    fn with_attrs(&self, attrs: &[Attr]) -> Box<dyn Handler>;

    /// A handler whose attribute keys are qualified by `name`
    fn with_group(&self, name: &str) -> Box<dyn Handler>;
}

/// Fail fast on an extension the handler does not implement
#[track_caller]
pub(crate) fn unsupported(capability: &str) -> ! {
    panic!("sblog: {} is unsupported by this handler", capability)
}
