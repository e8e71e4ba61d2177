//! Reportsql CLI tools.
//!
//! This crate provides the `reportsql` command, which assembles the standard
//! financial report queries (balance sheet, profit & loss, cash flow,
//! performance) as parameterized PostgreSQL statements and prints them with
//! their bound arguments.
//!
//! # Example Usage
//!
//! ```bash
//! reportsql balance-sheet
//! reportsql profit-loss --as-of 2024-04-15
//! reportsql all --pretty
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod reports;
