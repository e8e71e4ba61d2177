//! reportsql - assemble parameterized financial report queries.
//!
//! # Usage
//!
//! ```bash
//! reportsql balance-sheet
//! reportsql cash-flow --pretty
//! reportsql all --as-of 2024-04-15
//! ```

use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use reportsql::reports::{self, BuiltQuery};

/// Assemble parameterized financial report queries.
#[derive(Parser, Debug)]
#[command(name = "reportsql")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Reference date for relative periods (defaults to today)
    #[arg(long, value_name = "YYYY-MM-DD", global = true)]
    as_of: Option<NaiveDate>,

    /// Print bound arguments as pretty JSON
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone, Copy)]
enum Command {
    /// Year-to-date balance sheet query
    BalanceSheet,
    /// Profit & loss query for three months back
    ProfitLoss,
    /// Calendar-2024 cash flow query
    CashFlow,
    /// Trailing-twelve-month performance query
    Performance,
    /// All of the above
    All,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(1)
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let as_of = reference_instant(args.as_of);

    match args.command {
        Command::BalanceSheet => print_query(
            "Balance Sheet",
            reports::balance_sheet(as_of).context("building balance sheet query")?,
            args.pretty,
        ),
        Command::ProfitLoss => print_query(
            "Profit & Loss",
            reports::profit_loss(as_of).context("building profit & loss query")?,
            args.pretty,
        ),
        Command::CashFlow => print_query(
            "Cash Flow",
            reports::cash_flow(as_of).context("building cash flow query")?,
            args.pretty,
        ),
        Command::Performance => print_query(
            "Performance",
            reports::performance(as_of).context("building performance query")?,
            args.pretty,
        ),
        Command::All => {
            print_query(
                "Balance Sheet",
                reports::balance_sheet(as_of).context("building balance sheet query")?,
                args.pretty,
            )?;
            println!();
            print_query(
                "Profit & Loss",
                reports::profit_loss(as_of).context("building profit & loss query")?,
                args.pretty,
            )?;
            println!();
            print_query(
                "Cash Flow",
                reports::cash_flow(as_of).context("building cash flow query")?,
                args.pretty,
            )?;
            println!();
            print_query(
                "Performance",
                reports::performance(as_of).context("building performance query")?,
                args.pretty,
            )
        }
    }
}

/// The UTC instant for `--as-of`, or now when the flag is absent.
fn reference_instant(as_of: Option<NaiveDate>) -> DateTime<Utc> {
    as_of.map_or_else(Utc::now, |date| {
        date.and_hms_opt(0, 0, 0)
            .expect("midnight is a valid time")
            .and_utc()
    })
}

fn print_query(title: &str, (sql, arguments): BuiltQuery, pretty: bool) -> Result<()> {
    println!("{title} Query: {sql}");
    if pretty {
        let rendered =
            serde_json::to_string_pretty(&arguments).context("serializing arguments")?;
        println!("Arguments: {rendered}");
    } else {
        let rendered: Vec<String> = arguments.iter().map(ToString::to_string).collect();
        println!("Arguments: [{}]", rendered.join(", "));
    }
    Ok(())
}
