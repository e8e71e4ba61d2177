//! Fluent assembly of complete queries.

use tracing::debug;

use crate::condition::Condition;
use crate::error::BuildError;
use crate::group::{LogicalOperator, WhereClause, WhereGroup};
use crate::select::{AggregateFunction, AggregateSelect, SelectClause, SimpleSelect};
use crate::value::SqlValue;

/// A `FROM table` clause. Never fails to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FromClause {
    table: String,
}

impl FromClause {
    /// Create a from clause for `table`.
    #[must_use]
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
        }
    }

    /// Render the clause.
    #[must_use]
    pub fn build(&self) -> String {
        format!("FROM {}", self.table)
    }
}

/// Assembles SELECT, FROM, and WHERE into one parameterized Postgres query.
///
/// Conditions added with [`filter`](Self::filter) accumulate in the current
/// group; [`and_group`](Self::and_group) / [`or_group`](Self::or_group)
/// start a fresh group carrying that operator, which then prefixes the group
/// in the assembled WHERE clause. [`with_group`](Self::with_group) builds a
/// whole group with a closure.
///
/// Placeholders are `$1`-style and numbered across the whole query; WHERE
/// starts numbering at one past the arguments bound so far (SELECT and FROM
/// bind none).
///
/// # Example
///
/// ```
/// use reportsql_query::{
///     AggregateFunction, ComparisonOperator, FieldCondition, PostgresQueryBuilder,
/// };
///
/// let (sql, args) = PostgresQueryBuilder::new()
///     .select_aggregate()
///     .add_regular_field("department")
///     .add_aggregate(AggregateFunction::Sum, "amount", "total_amount")
///     .from("transactions")
///     .filter(FieldCondition::new(
///         "account_type",
///         ComparisonOperator::In,
///         vec!["REVENUE", "EXPENSE"],
///     ))
///     .build()
///     .unwrap();
///
/// assert_eq!(
///     sql,
///     "SELECT department, SUM(amount) AS total_amount FROM transactions \
///      WHERE account_type IN ($1,$2)"
/// );
/// assert_eq!(args.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct PostgresQueryBuilder {
    select: SelectClause,
    from: Option<FromClause>,
    groups: Vec<WhereGroup>,
}

impl Default for PostgresQueryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PostgresQueryBuilder {
    /// Create a builder with `SELECT *`, no FROM, and one open AND group.
    #[must_use]
    pub fn new() -> Self {
        Self {
            select: SelectClause::default(),
            from: None,
            groups: vec![WhereGroup::new(LogicalOperator::And)],
        }
    }

    /// Replace the select clause with a plain field list.
    #[must_use]
    pub fn select<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.select = SimpleSelect::new(fields).into();
        self
    }

    /// Replace the select clause with an empty aggregate select.
    #[must_use]
    pub fn select_aggregate(mut self) -> Self {
        self.select = AggregateSelect::new().into();
        self
    }

    /// Append a grouping field to the aggregate select.
    ///
    /// Ignored unless [`select_aggregate`](Self::select_aggregate) is
    /// active.
    #[must_use]
    pub fn add_regular_field(mut self, field: impl Into<String>) -> Self {
        if let SelectClause::Aggregate(select) = &mut self.select {
            select.add_regular_field(field);
        }
        self
    }

    /// Append an aggregated field to the aggregate select; empty `alias`
    /// omits the `AS` clause.
    ///
    /// Ignored unless [`select_aggregate`](Self::select_aggregate) is
    /// active.
    #[must_use]
    pub fn add_aggregate(
        mut self,
        function: AggregateFunction,
        field: impl Into<String>,
        alias: impl Into<String>,
    ) -> Self {
        if let SelectClause::Aggregate(select) = &mut self.select {
            select.add_aggregate(function, field, alias);
        }
        self
    }

    /// Set the FROM table.
    #[must_use]
    pub fn from(mut self, table: impl Into<String>) -> Self {
        self.from = Some(FromClause::new(table));
        self
    }

    /// Add a condition to the current group.
    #[must_use]
    pub fn filter(mut self, condition: impl Into<Condition>) -> Self {
        self.current_group().add(condition);
        self
    }

    /// Seal the current group and start a new AND group.
    #[must_use]
    pub fn and_group(mut self) -> Self {
        self.groups.push(WhereGroup::new(LogicalOperator::And));
        self
    }

    /// Seal the current group and start a new OR group.
    #[must_use]
    pub fn or_group(mut self) -> Self {
        self.groups.push(WhereGroup::new(LogicalOperator::Or));
        self
    }

    /// Register a closure-built group; it becomes the current group.
    #[must_use]
    pub fn with_group(
        mut self,
        operator: LogicalOperator,
        build: impl FnOnce(&mut WhereGroup),
    ) -> Self {
        let mut group = WhereGroup::new(operator);
        build(&mut group);
        self.groups.push(group);
        self
    }

    fn current_group(&mut self) -> &mut WhereGroup {
        // new() seeds one group and nothing removes groups.
        self.groups.last_mut().expect("builder always has a current group")
    }

    /// Assemble the query.
    ///
    /// Clauses render in SELECT, FROM, WHERE order, concatenated with single
    /// spaces; empty clauses are omitted. Returns the query text and the
    /// bound arguments in placeholder order.
    ///
    /// # Errors
    ///
    /// The first clause error aborts the build: [`BuildError::NoFieldsSpecified`]
    /// from the select clause, or any condition error from the WHERE clause.
    pub fn build(&self) -> Result<(String, Vec<SqlValue>), BuildError> {
        debug!(groups = self.groups.len(), "assembling query");

        let mut parts: Vec<String> = Vec::new();
        let mut args: Vec<SqlValue> = Vec::new();

        parts.push(self.select.build()?);

        if let Some(from) = &self.from {
            parts.push(from.build());
        }

        let mut where_clause = WhereClause::new();
        for group in &self.groups {
            where_clause.add(group.clone());
        }
        let fragment = where_clause.build(args.len() + 1)?;
        if !fragment.is_empty() {
            parts.push(fragment.sql);
            args.extend(fragment.args);
        }

        Ok((parts.join(" "), args))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::condition::{ComparisonOperator, FieldCondition};

    fn eq(field: &str, value: impl Into<crate::condition::FieldValue>) -> FieldCondition {
        FieldCondition::new(field, ComparisonOperator::Equals, value)
    }

    #[test]
    fn test_from_clause() {
        assert_eq!(FromClause::new("transactions").build(), "FROM transactions");
    }

    #[test]
    fn test_select_only() {
        let (sql, args) = PostgresQueryBuilder::new().build().unwrap();
        assert_eq!(sql, "SELECT *");
        assert!(args.is_empty());
    }

    #[test]
    fn test_select_from_where_order() {
        let (sql, args) = PostgresQueryBuilder::new()
            .select(["id"])
            .from("accounts")
            .filter(eq("is_active", true))
            .build()
            .unwrap();
        assert_eq!(sql, "SELECT id FROM accounts WHERE is_active = $1");
        assert_eq!(args, vec![SqlValue::Boolean(true)]);
    }

    #[test]
    fn test_consecutive_filters_share_a_group() {
        let (sql, _) = PostgresQueryBuilder::new()
            .from("t")
            .filter(eq("a", 1i64))
            .filter(eq("b", 2i64))
            .build()
            .unwrap();
        assert_eq!(sql, "SELECT * FROM t WHERE (a = $1 AND b = $2)");
    }

    #[test]
    fn test_and_group_prefixes_the_next_group() {
        let (sql, args) = PostgresQueryBuilder::new()
            .from("t")
            .filter(eq("a", 1i64))
            .and_group()
            .filter(eq("b", 2i64))
            .build()
            .unwrap();
        assert_eq!(sql, "SELECT * FROM t WHERE a = $1 AND b = $2");
        assert_eq!(args.len(), 2);
    }

    #[test]
    fn test_or_group() {
        let (sql, _) = PostgresQueryBuilder::new()
            .from("t")
            .filter(eq("a", 1i64))
            .or_group()
            .filter(eq("b", 2i64))
            .build()
            .unwrap();
        assert_eq!(sql, "SELECT * FROM t WHERE a = $1 OR b = $2");
    }

    #[test]
    fn test_with_group_closure() {
        let (sql, args) = PostgresQueryBuilder::new()
            .from("t")
            .filter(eq("a", 1i64))
            .with_group(LogicalOperator::Or, |group| {
                group.add(eq("kind", "x")).add(eq("kind", "y"));
            })
            .build()
            .unwrap();
        assert_eq!(
            sql,
            "SELECT * FROM t WHERE a = $1 OR (kind = $2 OR kind = $3)"
        );
        assert_eq!(args.len(), 3);
    }

    #[test]
    fn test_trailing_empty_group_is_omitted() {
        let (sql, _) = PostgresQueryBuilder::new()
            .from("t")
            .filter(eq("a", 1i64))
            .and_group()
            .build()
            .unwrap();
        assert_eq!(sql, "SELECT * FROM t WHERE a = $1");
    }

    #[test]
    fn test_no_conditions_omits_where() {
        let (sql, args) = PostgresQueryBuilder::new().from("t").build().unwrap();
        assert_eq!(sql, "SELECT * FROM t");
        assert!(args.is_empty());
    }

    #[test]
    fn test_select_error_aborts_build() {
        let builder = PostgresQueryBuilder::new().select_aggregate().from("t");
        assert_eq!(builder.build().unwrap_err(), BuildError::NoFieldsSpecified);
    }

    #[test]
    fn test_build_is_idempotent() {
        let builder = PostgresQueryBuilder::new()
            .from("t")
            .filter(eq("a", 1i64))
            .or_group()
            .filter(eq("b", 2i64));
        assert_eq!(builder.build().unwrap(), builder.build().unwrap());
    }
}
