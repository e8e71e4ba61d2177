//! Bound values and the fragment/argument pair every build produces.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

/// A value bound to a positional placeholder in an assembled query.
///
/// The assembler never inspects values beyond cloning them into the argument
/// list; the database driver owns their encoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SqlValue {
    /// A text value.
    Text(String),
    /// A 64-bit integer.
    Integer(i64),
    /// An exact decimal, used for monetary amounts and ratios.
    Decimal(Decimal),
    /// A boolean.
    Boolean(bool),
    /// A calendar date.
    Date(NaiveDate),
    /// SQL NULL.
    Null,
}

impl fmt::Display for SqlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{s:?}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Decimal(d) => write!(f, "{d}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Date(d) => write!(f, "{d}"),
            Self::Null => f.write_str("NULL"),
        }
    }
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for SqlValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for SqlValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for SqlValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<u32> for SqlValue {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<Decimal> for SqlValue {
    fn from(value: Decimal) -> Self {
        Self::Decimal(value)
    }
}

impl From<bool> for SqlValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<NaiveDate> for SqlValue {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

/// A syntactically complete but unanchored piece of SQL plus the values its
/// placeholders bind, in order.
///
/// An empty fragment means "omit this clause entirely", not a syntax error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SqlFragment {
    /// The SQL text.
    pub sql: String,
    /// Values bound by the fragment's placeholders, in placeholder order.
    pub args: Vec<SqlValue>,
}

impl SqlFragment {
    /// Create a fragment from its parts.
    #[must_use]
    pub const fn new(sql: String, args: Vec<SqlValue>) -> Self {
        Self { sql, args }
    }

    /// The empty fragment: no SQL, no arguments.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            sql: String::new(),
            args: Vec::new(),
        }
    }

    /// Whether this fragment renders nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sql.is_empty()
    }
}
