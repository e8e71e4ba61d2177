//! The standard report queries.
//!
//! Each function assembles one of the reference reporting queries against the
//! denormalized transaction schema (`period_year` / `period_month` integer
//! columns). The `as_of` instant pins the reference point for relative
//! periods, so the same call renders the same SQL tomorrow.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use reportsql_period::{MonthYear, PeriodKind, PeriodSpec};
use reportsql_query::{
    AggregateFunction, BuildError, ComparisonOperator, DateRangeCondition, FieldCondition,
    LogicalOperator, PostgresQueryBuilder, SqlValue,
};

/// An assembled query: the SQL text and its bound arguments.
pub type BuiltQuery = (String, Vec<SqlValue>);

/// Year-to-date balance sheet: aggregated amounts for the active balance
/// sheet accounts.
pub fn balance_sheet(as_of: DateTime<Utc>) -> Result<BuiltQuery, BuildError> {
    let period = DateRangeCondition::new(PeriodSpec::new(PeriodKind::Ytd)).at(as_of);
    let active_accounts = vec!["1001", "1002", "1003", "2001", "2002"];

    PostgresQueryBuilder::new()
        .select_aggregate()
        .add_regular_field("coa.coadescription")
        .add_aggregate(AggregateFunction::Sum, "amount", "total_amount")
        .from("transactions")
        .filter(period)
        .and_group()
        .filter(FieldCondition::new(
            "account_code",
            ComparisonOperator::In,
            active_accounts,
        ))
        .and_group()
        .filter(FieldCondition::new(
            "is_active",
            ComparisonOperator::Equals,
            true,
        ))
        .build()
}

/// Profit & loss for the month three months back, split by account type and
/// department.
pub fn profit_loss(as_of: DateTime<Utc>) -> Result<BuiltQuery, BuildError> {
    let period = DateRangeCondition::new(PeriodSpec::back_month(3)).at(as_of);
    let account_types = vec!["REVENUE", "EXPENSE"];

    PostgresQueryBuilder::new()
        .select_aggregate()
        .add_regular_field("account_type")
        .add_regular_field("department")
        .add_aggregate(AggregateFunction::Sum, "amount", "total_amount")
        .from("financial_transactions")
        .filter(period)
        .and_group()
        .filter(FieldCondition::new(
            "account_type",
            ComparisonOperator::In,
            account_types,
        ))
        .build()
}

/// Cash flow over calendar 2024, grouped into the three cash flow activity
/// types.
pub fn cash_flow(as_of: DateTime<Utc>) -> Result<BuiltQuery, BuildError> {
    let period = DateRangeCondition::new(PeriodSpec::specific_range(
        MonthYear::new(1, 2024),
        MonthYear::new(12, 2024),
    ))
    .at(as_of);

    PostgresQueryBuilder::new()
        .select_aggregate()
        .add_regular_field("transaction_type")
        .add_aggregate(AggregateFunction::Sum, "inflow", "total_inflow")
        .add_aggregate(AggregateFunction::Sum, "outflow", "total_outflow")
        .from("cash_transactions")
        .filter(period)
        .with_group(LogicalOperator::Or, |group| {
            group
                .add(FieldCondition::new(
                    "transaction_type",
                    ComparisonOperator::Equals,
                    "OPERATING",
                ))
                .add(FieldCondition::new(
                    "transaction_type",
                    ComparisonOperator::Equals,
                    "INVESTING",
                ))
                .add(FieldCondition::new(
                    "transaction_type",
                    ComparisonOperator::Equals,
                    "FINANCING",
                ));
        })
        .build()
}

/// Trailing-twelve-month performance by department and cost center, limited
/// to active rows above a 15% margin.
pub fn performance(as_of: DateTime<Utc>) -> Result<BuiltQuery, BuildError> {
    let period = DateRangeCondition::new(PeriodSpec::new(PeriodKind::Ttm)).at(as_of);
    let margin_floor = Decimal::new(15, 2); // 0.15

    PostgresQueryBuilder::new()
        .select_aggregate()
        .add_regular_field("department")
        .add_regular_field("cost_center")
        .add_aggregate(AggregateFunction::Sum, "revenue", "total_revenue")
        .add_aggregate(AggregateFunction::Sum, "expense", "total_expense")
        .add_aggregate(AggregateFunction::Avg, "profit_margin", "avg_margin")
        .from("financial_metrics")
        .filter(period)
        .with_group(LogicalOperator::And, |group| {
            group
                .add(FieldCondition::new(
                    "is_active",
                    ComparisonOperator::Equals,
                    true,
                ))
                .add(FieldCondition::new(
                    "profit_margin",
                    ComparisonOperator::GreaterThan,
                    margin_floor,
                ));
        })
        .build()
}
