//! Log records and their attributes

use std::fmt;

use chrono::{DateTime, Local};

use crate::level::Level;

/// One emitted log event
#[derive(Debug, Clone)]
pub struct Record {
    /// When the record was created
    pub time: DateTime<Local>,

    /// Severity / verbosity of the record
    pub level: Level,

    /// The message text
    pub message: String,

    /// Key/value pairs in call-site order
    pub attrs: Vec<Attr>,
}

impl Record {
    /// Create a record stamped with the current local time
    pub fn new(level: Level, message: impl Into<String>, attrs: Vec<Attr>) -> Self {
        Self {
            time: Local::now(),
            level,
            message: message.into(),
            attrs,
        }
    }

    /// Number of attributes that carry a value
    pub fn valued_attr_count(&self) -> usize {
        self.attrs.iter().filter(|a| a.value.is_some()).count()
    }
}

/// A key with an optional value.
///
/// A missing value turns the key into continuation text printed on its own
/// line under the message.
#[derive(Debug, Clone, PartialEq)]
pub struct Attr {
    pub key: String,
    pub value: Option<Value>,
}

impl Attr {
    pub fn new(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            value: Some(value.into()),
        }
    }

    /// An attribute with no value, rendered as a line of text
    pub fn text(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: None,
        }
    }
}

/// Attribute value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Str(String),
    Int(i64),
    Uint(u64),
    Float(f64),
    Bool(bool),
}

impl Value {
    /// Capture a `Debug` rendering, for types without `Display`
    pub fn debug(value: impl fmt::Debug) -> Self {
        Value::Str(format!("{:?}", value))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => f.write_str(s),
            Value::Int(n) => write!(f, "{}", n),
            Value::Uint(n) => write!(f, "{}", n),
            Value::Float(n) => write!(f, "{}", n),
            Value::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::Str(s.clone())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Float(n as f64)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

macro_rules! impl_from_int {
    ($variant:ident, $target:ty, $($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Value::$variant(n as $target)
                }
            }
        )*
    };
}

impl_from_int!(Int, i64, i8, i16, i32, i64, isize);
impl_from_int!(Uint, u64, u8, u16, u32, u64, usize);

/// Build a `Vec<Attr>` from call-site pairs.
///
/// `"key" => value` makes a valued attribute, a bare `"text"` makes a
/// continuation line.
///
/// ```
/// use sblog::attrs;
///
/// let attrs = attrs!["retry" => 3, "falling back to cache"];
/// assert_eq!(attrs.len(), 2);
/// assert!(attrs[1].value.is_none());
/// ```
#[macro_export]
macro_rules! attrs {
    () => { ::std::vec::Vec::<$crate::Attr>::new() };
    ($($rest:tt)+) => {{
        let mut attrs = ::std::vec::Vec::<$crate::Attr>::new();
        $crate::__push_attrs!(attrs; $($rest)+);
        attrs
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __push_attrs {
    ($v:ident;) => {};
    ($v:ident; $key:expr => $value:expr $(, $($rest:tt)*)?) => {
        $v.push($crate::Attr::new($key, $value));
        $crate::__push_attrs!($v; $($($rest)*)?);
    };
    ($v:ident; $key:expr $(, $($rest:tt)*)?) => {
        $v.push($crate::Attr::text($key));
        $crate::__push_attrs!($v; $($($rest)*)?);
    };
}
