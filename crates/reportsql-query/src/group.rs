//! WHERE groups and the group sequence.

use std::fmt;

use tracing::trace;

use crate::condition::Condition;
use crate::error::BuildError;
use crate::value::{SqlFragment, SqlValue};

/// Logical operator joining conditions within a group, and prefixing groups
/// within a [`WhereClause`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOperator {
    /// `AND`
    And,
    /// `OR`
    Or,
}

impl LogicalOperator {
    /// The SQL keyword for this operator.
    #[must_use]
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
        }
    }
}

impl fmt::Display for LogicalOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

/// An ordered collection of conditions joined by one logical operator.
///
/// Groups are themselves [`Condition`]s, so they nest. A group with zero
/// conditions (or whose members all render empty) builds to the empty
/// fragment; a single rendered condition is returned unwrapped; two or more
/// are joined and wrapped in one parenthesis pair.
#[derive(Debug, Clone, PartialEq)]
pub struct WhereGroup {
    conditions: Vec<Condition>,
    operator: LogicalOperator,
}

impl WhereGroup {
    /// Create an empty group with the given operator.
    #[must_use]
    pub const fn new(operator: LogicalOperator) -> Self {
        Self {
            conditions: Vec::new(),
            operator,
        }
    }

    /// Append a condition, in place.
    pub fn add(&mut self, condition: impl Into<Condition>) -> &mut Self {
        self.conditions.push(condition.into());
        self
    }

    /// Append a condition, chaining by value.
    #[must_use]
    pub fn with(mut self, condition: impl Into<Condition>) -> Self {
        self.conditions.push(condition.into());
        self
    }

    /// The operator joining this group's conditions.
    #[must_use]
    pub const fn operator(&self) -> LogicalOperator {
        self.operator
    }

    /// Whether the group holds no conditions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Number of conditions in the group.
    #[must_use]
    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    /// Render the group starting at the 1-based `param_offset`.
    ///
    /// Each condition is built at the offset advanced by the exact number of
    /// arguments all prior conditions consumed, never a fixed stride, so
    /// variable-arity conditions (`IN` lists, `IS NULL`) interleave with
    /// correct numbering. The first inner error aborts the build and
    /// propagates unwrapped.
    pub fn build(&self, param_offset: usize) -> Result<SqlFragment, BuildError> {
        if self.conditions.is_empty() {
            return Ok(SqlFragment::empty());
        }

        let mut clauses: Vec<String> = Vec::new();
        let mut args: Vec<SqlValue> = Vec::new();

        for condition in &self.conditions {
            let fragment = condition.build(param_offset + args.len())?;
            if fragment.is_empty() {
                continue;
            }
            clauses.push(fragment.sql);
            args.extend(fragment.args);
        }

        if clauses.is_empty() {
            return Ok(SqlFragment::empty());
        }
        if clauses.len() == 1 {
            return Ok(SqlFragment::new(clauses.swap_remove(0), args));
        }
        let joined = clauses.join(&format!(" {} ", self.operator));
        Ok(SqlFragment::new(format!("({joined})"), args))
    }
}

/// An ordered sequence of independently built groups under one `WHERE`.
///
/// Each group is captured by value at [`add`](Self::add) time; mutating the
/// original afterwards does not affect the sequence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WhereClause {
    groups: Vec<WhereGroup>,
}

impl WhereClause {
    /// Create an empty sequence.
    #[must_use]
    pub const fn new() -> Self {
        Self { groups: Vec::new() }
    }

    /// Append a snapshot of `group` to the sequence.
    pub fn add(&mut self, group: WhereGroup) -> &mut Self {
        self.groups.push(group);
        self
    }

    /// Number of groups in the sequence.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether the sequence holds no groups.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Render the sequence starting at the 1-based `param_offset`, prefixed
    /// with `WHERE`.
    ///
    /// Each group's own operator keyword prefixes its fragment, keyed to the
    /// group's position in the sequence: every index except 0 gets the
    /// prefix, whether or not earlier groups rendered anything. The running
    /// offset advances by the exact argument count each group consumed. If
    /// no group renders, the result is the empty fragment with no error.
    pub fn build(&self, param_offset: usize) -> Result<SqlFragment, BuildError> {
        if self.groups.is_empty() {
            return Ok(SqlFragment::empty());
        }

        let mut pieces: Vec<String> = Vec::new();
        let mut args: Vec<SqlValue> = Vec::new();
        let mut offset = param_offset;

        for (index, group) in self.groups.iter().enumerate() {
            let fragment = group.build(offset)?;
            if fragment.is_empty() {
                continue;
            }
            trace!(index, offset, consumed = fragment.args.len(), "built where group");
            if index > 0 {
                pieces.push(group.operator().as_sql().to_string());
            }
            offset += fragment.args.len();
            pieces.push(fragment.sql);
            args.extend(fragment.args);
        }

        if pieces.is_empty() {
            return Ok(SqlFragment::empty());
        }
        Ok(SqlFragment::new(format!("WHERE {}", pieces.join(" ")), args))
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
    fn test_empty_group_builds_to_nothing() {
        let group = WhereGroup::new(LogicalOperator::And);
        let fragment = group.build(1).unwrap();
        assert!(fragment.is_empty());
        assert!(fragment.args.is_empty());
    }

    #[test]
    fn test_single_condition_is_unwrapped() {
        let group = WhereGroup::new(LogicalOperator::And).with(eq("column", "value"));
        let fragment = group.build(1).unwrap();
        assert_eq!(fragment.sql, "column = $1");
    }

    #[test]
    fn test_two_and_conditions_are_parenthesized() {
        let group = WhereGroup::new(LogicalOperator::And)
            .with(eq("id", 1i64))
            .with(eq("status", "active"));
        let fragment = group.build(1).unwrap();
        assert_eq!(fragment.sql, "(id = $1 AND status = $2)");
        assert_eq!(
            fragment.args,
            vec![SqlValue::Integer(1), SqlValue::from("active")]
        );
    }

    #[test]
    fn test_or_group() {
        let group = WhereGroup::new(LogicalOperator::Or)
            .with(eq("column1", "value1"))
            .with(eq("column2", "value2"));
        let fragment = group.build(1).unwrap();
        assert_eq!(fragment.sql, "(column1 = $1 OR column2 = $2)");
    }

    #[test]
    fn test_variable_arity_conditions_advance_the_offset() {
        let group = WhereGroup::new(LogicalOperator::And)
            .with(FieldCondition::new(
                "deleted_at",
                ComparisonOperator::IsNull,
                SqlValue::Null,
            ))
            .with(FieldCondition::new(
                "status",
                ComparisonOperator::In,
                vec!["a", "b", "c"],
            ))
            .with(eq("id", 9i64));
        let fragment = group.build(1).unwrap();
        assert_eq!(
            fragment.sql,
            "(deleted_at IS NULL AND status IN ($1,$2,$3) AND id = $4)"
        );
        assert_eq!(fragment.args.len(), 4);
    }

    #[test]
    fn test_group_honors_caller_offset() {
        let group = WhereGroup::new(LogicalOperator::And)
            .with(eq("a", 1i64))
            .with(eq("b", 2i64));
        let fragment = group.build(4).unwrap();
        assert_eq!(fragment.sql, "(a = $4 AND b = $5)");
    }

    #[test]
    fn test_nested_group() {
        let inner = WhereGroup::new(LogicalOperator::Or)
            .with(eq("kind", "cash"))
            .with(eq("kind", "bank"));
        let group = WhereGroup::new(LogicalOperator::And)
            .with(eq("is_active", true))
            .with(inner);
        let fragment = group.build(1).unwrap();
        assert_eq!(
            fragment.sql,
            "(is_active = $1 AND (kind = $2 OR kind = $3))"
        );
        assert_eq!(fragment.args.len(), 3);
    }

    #[test]
    fn test_inner_error_aborts_the_group() {
        let group = WhereGroup::new(LogicalOperator::And)
            .with(eq("id", 1i64))
            .with(FieldCondition::new(
                "status",
                ComparisonOperator::In,
                Vec::<SqlValue>::new(),
            ));
        assert_eq!(group.build(1).unwrap_err(), BuildError::EmptyCollection);
    }

    #[test]
    fn test_sequence_prefixes_second_group_with_its_operator() {
        let mut clause = WhereClause::new();
        clause.add(WhereGroup::new(LogicalOperator::And).with(eq("column1", "value1")));
        clause.add(WhereGroup::new(LogicalOperator::Or).with(eq("column2", 10i64)));
        let fragment = clause.build(1).unwrap();
        assert_eq!(fragment.sql, "WHERE column1 = $1 OR column2 = $2");
        assert_eq!(
            fragment.args,
            vec![SqlValue::from("value1"), SqlValue::Integer(10)]
        );
    }

    #[test]
    fn test_sequence_operator_is_keyed_to_position_not_rendering() {
        // A leading empty group still counts as index 0, so the first group
        // that renders carries its operator keyword.
        let mut clause = WhereClause::new();
        clause.add(WhereGroup::new(LogicalOperator::And));
        clause.add(WhereGroup::new(LogicalOperator::Or).with(eq("x", 1i64)));
        let fragment = clause.build(1).unwrap();
        assert_eq!(fragment.sql, "WHERE OR x = $1");
    }

    #[test]
    fn test_sequence_threads_offset_across_groups() {
        let mut clause = WhereClause::new();
        clause.add(
            WhereGroup::new(LogicalOperator::And).with(FieldCondition::new(
                "account_code",
                ComparisonOperator::In,
                vec!["1001", "1002"],
            )),
        );
        clause.add(WhereGroup::new(LogicalOperator::And).with(eq("is_active", true)));
        let fragment = clause.build(1).unwrap();
        assert_eq!(
            fragment.sql,
            "WHERE account_code IN ($1,$2) AND is_active = $3"
        );
        assert_eq!(fragment.args.len(), 3);
    }

    #[test]
    fn test_sequence_of_empty_groups_builds_to_nothing() {
        let mut clause = WhereClause::new();
        clause.add(WhereGroup::new(LogicalOperator::And));
        clause.add(WhereGroup::new(LogicalOperator::Or));
        let fragment = clause.build(1).unwrap();
        assert!(fragment.is_empty());
    }

    #[test]
    fn test_snapshot_semantics_on_add() {
        let mut group = WhereGroup::new(LogicalOperator::And);
        group.add(eq("a", 1i64));

        let mut clause = WhereClause::new();
        clause.add(group.clone());

        // Mutating the original after add must not affect the sequence.
        group.add(eq("b", 2i64));
        let fragment = clause.build(1).unwrap();
        assert_eq!(fragment.sql, "WHERE a = $1");
    }

    #[test]
    fn test_sequence_build_is_idempotent() {
        let mut clause = WhereClause::new();
        clause.add(WhereGroup::new(LogicalOperator::And).with(eq("a", 1i64)));
        clause.add(WhereGroup::new(LogicalOperator::Or).with(eq("b", 2i64)));
        assert_eq!(clause.build(1).unwrap(), clause.build(1).unwrap());
    }
}
