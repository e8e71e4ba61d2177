//! SELECT clause formatters.
//!
//! SELECT never binds placeholders in this assembler, so these builders
//! return plain strings and take no parameter offset.

use std::fmt;

use crate::error::BuildError;

/// Aggregate functions available to [`AggregateSelect`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregateFunction {
    /// `SUM`
    Sum,
    /// `AVG`
    Avg,
    /// `COUNT`
    Count,
    /// `MAX`
    Max,
    /// `MIN`
    Min,
}

impl AggregateFunction {
    /// The SQL name of this function.
    #[must_use]
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::Sum => "SUM",
            Self::Avg => "AVG",
            Self::Count => "COUNT",
            Self::Max => "MAX",
            Self::Min => "MIN",
        }
    }
}

impl fmt::Display for AggregateFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

/// A plain `SELECT f1, f2, ...` clause.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimpleSelect {
    fields: Vec<String>,
}

impl SimpleSelect {
    /// Create a simple select; defaults to `*` when `fields` is empty.
    #[must_use]
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut fields: Vec<String> = fields.into_iter().map(Into::into).collect();
        if fields.is_empty() {
            fields.push("*".to_string());
        }
        Self { fields }
    }

    /// Select everything (`SELECT *`).
    #[must_use]
    pub fn star() -> Self {
        Self::new(["*"])
    }

    /// Render the clause.
    ///
    /// # Errors
    ///
    /// [`BuildError::NoFieldsSpecified`] for a field-less clause (only
    /// reachable through [`Default`]; [`new`](Self::new) always supplies
    /// `*`).
    pub fn build(&self) -> Result<String, BuildError> {
        if self.fields.is_empty() {
            return Err(BuildError::NoFieldsSpecified);
        }
        Ok(format!("SELECT {}", self.fields.join(", ")))
    }
}

/// One aggregated output column.
#[derive(Debug, Clone, PartialEq, Eq)]
struct AggregateField {
    function: AggregateFunction,
    field: String,
    /// Output alias; empty means no `AS` clause.
    alias: String,
}

/// A SELECT clause mixing grouping fields with aggregated ones.
///
/// # Example
///
/// ```
/// use reportsql_query::{AggregateFunction, AggregateSelect};
///
/// let mut select = AggregateSelect::new();
/// select
///     .add_regular_field("department")
///     .add_aggregate(AggregateFunction::Sum, "amount", "total_amount");
/// assert_eq!(
///     select.build().unwrap(),
///     "SELECT department, SUM(amount) AS total_amount"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregateSelect {
    regular_fields: Vec<String>,
    aggregates: Vec<AggregateField>,
}

impl AggregateSelect {
    /// Create an empty aggregate select.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a non-aggregated (grouping) field.
    pub fn add_regular_field(&mut self, field: impl Into<String>) -> &mut Self {
        self.regular_fields.push(field.into());
        self
    }

    /// Append an aggregated field; an empty `alias` omits the `AS` clause.
    pub fn add_aggregate(
        &mut self,
        function: AggregateFunction,
        field: impl Into<String>,
        alias: impl Into<String>,
    ) -> &mut Self {
        self.aggregates.push(AggregateField {
            function,
            field: field.into(),
            alias: alias.into(),
        });
        self
    }

    /// Render the clause.
    ///
    /// # Errors
    ///
    /// [`BuildError::NoFieldsSpecified`] when neither regular fields nor
    /// aggregates were added.
    pub fn build(&self) -> Result<String, BuildError> {
        let mut fields = self.regular_fields.clone();

        for aggregate in &self.aggregates {
            if aggregate.alias.is_empty() {
                fields.push(format!("{}({})", aggregate.function, aggregate.field));
            } else {
                fields.push(format!(
                    "{}({}) AS {}",
                    aggregate.function, aggregate.field, aggregate.alias
                ));
            }
        }

        if fields.is_empty() {
            return Err(BuildError::NoFieldsSpecified);
        }
        Ok(format!("SELECT {}", fields.join(", ")))
    }
}

/// Either select shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectClause {
    /// Plain field list.
    Simple(SimpleSelect),
    /// Regular fields plus aggregates.
    Aggregate(AggregateSelect),
}

impl SelectClause {
    /// Render whichever shape this is.
    pub fn build(&self) -> Result<String, BuildError> {
        match self {
            Self::Simple(select) => select.build(),
            Self::Aggregate(select) => select.build(),
        }
    }
}

impl Default for SelectClause {
    fn default() -> Self {
        Self::Simple(SimpleSelect::star())
    }
}

impl From<SimpleSelect> for SelectClause {
    fn from(select: SimpleSelect) -> Self {
        Self::Simple(select)
    }
}

impl From<AggregateSelect> for SelectClause {
    fn from(select: AggregateSelect) -> Self {
        Self::Aggregate(select)
    }
}
