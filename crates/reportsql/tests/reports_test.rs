//! End-to-end tests for the standard report queries.
//!
//! The reference instant is pinned to 2024-04-15 Jakarta time so every
//! relative period resolves to a known range and the assembled SQL is exact.

use chrono::{DateTime, TimeZone, Utc};
use reportsql::reports;
use reportsql_query::SqlValue;
use rust_decimal_macros::dec;

fn mid_april() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 4, 15, 3, 30, 0).unwrap()
}

fn text(s: &str) -> SqlValue {
    SqlValue::Text(s.to_string())
}

#[test]
fn test_balance_sheet_query() {
    let (sql, args) = reports::balance_sheet(mid_april()).unwrap();
    assert_eq!(
        sql,
        "SELECT coa.coadescription, SUM(amount) AS total_amount FROM transactions \
         WHERE period_year = $1 AND period_month BETWEEN $2 AND $3 \
         AND account_code IN ($4,$5,$6,$7,$8) AND is_active = $9"
    );
    assert_eq!(
        args,
        vec![
            SqlValue::Integer(2024),
            SqlValue::Integer(1),
            SqlValue::Integer(4),
            text("1001"),
            text("1002"),
            text("1003"),
            text("2001"),
            text("2002"),
            SqlValue::Boolean(true),
        ]
    );
}

#[test]
fn test_profit_loss_query() {
    let (sql, args) = reports::profit_loss(mid_april()).unwrap();
    assert_eq!(
        sql,
        "SELECT account_type, department, SUM(amount) AS total_amount \
         FROM financial_transactions \
         WHERE period_year = $1 AND period_month BETWEEN $2 AND $3 \
         AND account_type IN ($4,$5)"
    );
    assert_eq!(
        args,
        vec![
            SqlValue::Integer(2024),
            SqlValue::Integer(1),
            SqlValue::Integer(1),
            text("REVENUE"),
            text("EXPENSE"),
        ]
    );
}

#[test]
fn test_cash_flow_query() {
    let (sql, args) = reports::cash_flow(mid_april()).unwrap();
    assert_eq!(
        sql,
        "SELECT transaction_type, SUM(inflow) AS total_inflow, SUM(outflow) AS total_outflow \
         FROM cash_transactions \
         WHERE period_year = $1 AND period_month BETWEEN $2 AND $3 \
         OR (transaction_type = $4 OR transaction_type = $5 OR transaction_type = $6)"
    );
    assert_eq!(
        args,
        vec![
            SqlValue::Integer(2024),
            SqlValue::Integer(1),
            SqlValue::Integer(12),
            text("OPERATING"),
            text("INVESTING"),
            text("FINANCING"),
        ]
    );
}

#[test]
fn test_performance_query() {
    let (sql, args) = reports::performance(mid_april()).unwrap();
    assert_eq!(
        sql,
        "SELECT department, cost_center, SUM(revenue) AS total_revenue, \
         SUM(expense) AS total_expense, AVG(profit_margin) AS avg_margin \
         FROM financial_metrics \
         WHERE (period_year = $1 AND period_month >= $2) OR (period_year = $3 AND period_month <= $4) \
         AND (is_active = $5 AND profit_margin > $6)"
    );
    assert_eq!(
        args,
        vec![
            SqlValue::Integer(2023),
            SqlValue::Integer(5),
            SqlValue::Integer(2024),
            SqlValue::Integer(4),
            SqlValue::Boolean(true),
            SqlValue::Decimal(dec!(0.15)),
        ]
    );
}

#[test]
fn test_reports_resolve_relative_periods_against_as_of() {
    // One year later the same reports renumber their period arguments.
    let next_year = Utc.with_ymd_and_hms(2025, 4, 15, 3, 30, 0).unwrap();
    let (_, args) = reports::balance_sheet(next_year).unwrap();
    assert_eq!(args[0], SqlValue::Integer(2025));
}
