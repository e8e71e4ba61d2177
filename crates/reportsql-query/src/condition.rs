//! Field comparisons and the condition capability.

use std::fmt;

use crate::daterange::DateRangeCondition;
use crate::error::BuildError;
use crate::group::WhereGroup;
use crate::value::{SqlFragment, SqlValue};

/// SQL comparison operators supported by [`FieldCondition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOperator {
    /// `=`
    Equals,
    /// `!=`
    NotEquals,
    /// `>`
    GreaterThan,
    /// `<`
    LessThan,
    /// `>=`
    GreaterOrEqual,
    /// `<=`
    LessOrEqual,
    /// `LIKE`
    Like,
    /// `ILIKE` (case-insensitive LIKE)
    ILike,
    /// `IN`, requires a list value
    In,
    /// `NOT IN`, requires a list value
    NotIn,
    /// `IS NULL`, binds nothing
    IsNull,
    /// `IS NOT NULL`, binds nothing
    IsNotNull,
}

impl ComparisonOperator {
    /// The SQL spelling of this operator.
    #[must_use]
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::Equals => "=",
            Self::NotEquals => "!=",
            Self::GreaterThan => ">",
            Self::LessThan => "<",
            Self::GreaterOrEqual => ">=",
            Self::LessOrEqual => "<=",
            Self::Like => "LIKE",
            Self::ILike => "ILIKE",
            Self::In => "IN",
            Self::NotIn => "NOT IN",
            Self::IsNull => "IS NULL",
            Self::IsNotNull => "IS NOT NULL",
        }
    }
}

impl fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

/// The value side of a field condition: one scalar or an ordered list.
///
/// `IN` / `NOT IN` require the list form; every other binding operator
/// requires the scalar form. `IS [NOT] NULL` ignores the value entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// A single bound value.
    Scalar(SqlValue),
    /// An ordered list of bound values.
    List(Vec<SqlValue>),
}

impl From<SqlValue> for FieldValue {
    fn from(value: SqlValue) -> Self {
        Self::Scalar(value)
    }
}

impl<T: Into<SqlValue>> From<Vec<T>> for FieldValue {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Scalar(value.into())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Scalar(value.into())
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Scalar(value.into())
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        Self::Scalar(value.into())
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Scalar(value.into())
    }
}

impl From<rust_decimal::Decimal> for FieldValue {
    fn from(value: rust_decimal::Decimal) -> Self {
        Self::Scalar(value.into())
    }
}

/// A single `field OP value` comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldCondition {
    /// Column name, emitted verbatim.
    pub field: String,
    /// The comparison operator.
    pub operator: ComparisonOperator,
    /// The value(s) to compare against.
    pub value: FieldValue,
}

impl FieldCondition {
    /// Create a field condition.
    #[must_use]
    pub fn new(
        field: impl Into<String>,
        operator: ComparisonOperator,
        value: impl Into<FieldValue>,
    ) -> Self {
        Self {
            field: field.into(),
            operator,
            value: value.into(),
        }
    }

    /// Render this comparison starting at the 1-based `param_offset`.
    pub fn build(&self, param_offset: usize) -> Result<SqlFragment, BuildError> {
        match self.operator {
            ComparisonOperator::IsNull | ComparisonOperator::IsNotNull => Ok(SqlFragment::new(
                format!("{} {}", self.field, self.operator),
                Vec::new(),
            )),

            ComparisonOperator::In | ComparisonOperator::NotIn => {
                let FieldValue::List(values) = &self.value else {
                    return Err(BuildError::TypeMismatch(
                        "value for IN/NOT IN operator must be a slice",
                    ));
                };
                if values.is_empty() {
                    return Err(BuildError::EmptyCollection);
                }
                let placeholders: Vec<String> = (0..values.len())
                    .map(|i| format!("${}", param_offset + i))
                    .collect();
                Ok(SqlFragment::new(
                    format!("{} {} ({})", self.field, self.operator, placeholders.join(",")),
                    values.clone(),
                ))
            }

            _ => {
                let FieldValue::Scalar(value) = &self.value else {
                    return Err(BuildError::TypeMismatch(
                        "slice value requires the IN or NOT IN operator",
                    ));
                };
                Ok(SqlFragment::new(
                    format!("{} {} ${param_offset}", self.field, self.operator),
                    vec![value.clone()],
                ))
            }
        }
    }
}

/// Anything that can render itself as a WHERE fragment with positional
/// arguments.
///
/// This is the composition point of the assembler: groups hold an ordered
/// sequence of `Condition`s, and a group is itself a `Condition`, so groups
/// nest to arbitrary depth. Building is pure — the same condition tree and
/// offset always produce the same fragment and argument list.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// A single field comparison.
    Field(FieldCondition),
    /// A calendar-period predicate over the period columns.
    DateRange(DateRangeCondition),
    /// A nested group of conditions under one logical operator.
    Group(WhereGroup),
}

impl Condition {
    /// Render this condition starting at the 1-based `param_offset`.
    pub fn build(&self, param_offset: usize) -> Result<SqlFragment, BuildError> {
        match self {
            Self::Field(condition) => condition.build(param_offset),
            Self::DateRange(condition) => condition.build(param_offset),
            Self::Group(group) => group.build(param_offset),
        }
    }
}

impl From<FieldCondition> for Condition {
    fn from(condition: FieldCondition) -> Self {
        Self::Field(condition)
    }
}

impl From<DateRangeCondition> for Condition {
    fn from(condition: DateRangeCondition) -> Self {
        Self::DateRange(condition)
    }
}

impl From<WhereGroup> for Condition {
    fn from(group: WhereGroup) -> Self {
        Self::Group(group)
    }
}
