//! Statement CLI commands
//!
//! Periods can be given as `YYYY-MM` or relative to today's statement:
//! `current`, `last`, `next`.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::Subcommand;
use tracing::info;

use crate::config::Settings;
use crate::display::{format_period_list, format_statement};
use crate::error::{CardCycleError, CardCycleResult};
use crate::export::export_statement_csv;
use crate::models::BillingPeriod;
use crate::services::StatementService;
use crate::storage::Storage;

/// Statement subcommands
#[derive(Subcommand, Debug)]
pub enum StatementCommands {
    /// List billing periods that have credit-card charges
    Periods,

    /// Show the charges billed on one statement
    Show {
        /// Period (YYYY-MM, current, last, next); defaults to current
        period: Option<String>,
    },

    /// Export a statement to CSV
    Export {
        /// Period (YYYY-MM, current, last, next)
        period: String,
        /// Output file; prints to stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Resolve a period argument relative to the statement `today` falls on
pub fn resolve_period(
    service: &StatementService<'_>,
    arg: Option<&str>,
    today: NaiveDate,
) -> CardCycleResult<BillingPeriod> {
    let Some(arg) = arg else {
        return service.current_period(today);
    };

    match arg.trim().to_lowercase().as_str() {
        "current" | "now" | "this" => service.current_period(today),
        "last" | "previous" | "prev" => Ok(service.current_period(today)?.prev()),
        "next" => Ok(service.current_period(today)?.next()),
        _ => arg
            .parse::<BillingPeriod>()
            .map_err(|e| CardCycleError::Validation(e.to_string())),
    }
}

pub fn handle_statement_command(
    storage: &Storage,
    settings: &Settings,
    cmd: StatementCommands,
) -> CardCycleResult<()> {
    let service = StatementService::new(storage);
    let today = Local::now().date_naive();

    match cmd {
        StatementCommands::Periods => {
            if storage.card.get()?.is_none() {
                return Err(CardCycleError::NotConfigured);
            }
            print!("{}", format_period_list(&service.periods()?));
        }

        StatementCommands::Show { period } => {
            let period = resolve_period(&service, period.as_deref(), today)?;
            let statement = service.statement(period)?;
            print!("{}", format_statement(&statement, settings));
        }

        StatementCommands::Export { period, output } => {
            let period = resolve_period(&service, Some(period.as_str()), today)?;
            let statement = service.statement(period)?;

            match output {
                Some(path) => {
                    let file = File::create(&path).map_err(|e| {
                        CardCycleError::Export(format!(
                            "Failed to create {}: {}",
                            path.display(),
                            e
                        ))
                    })?;
                    export_statement_csv(&statement, BufWriter::new(file))?;
                    info!(path = %path.display(), period = %statement.period, "statement exported");
                    println!(
                        "Exported {} charge(s) for {} to {}",
                        statement.expenses.len(),
                        statement.label,
                        path.display()
                    );
                }
                None => export_statement_csv(&statement, std::io::stdout().lock())?,
            }
        }
    }

    Ok(())
}
