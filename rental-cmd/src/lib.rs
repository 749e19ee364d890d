//! Command implementations for the rental CLI.
//!
//! Provides subcommands that load one rental or forecast CSV (local file or
//! `http(s)://` URL) and print the same monthly series and selector lists
//! the dashboard charts use.

use clap::{Subcommand, ValueEnum};
use rental_data::Selection;

pub mod source;
pub mod summary;

/// Which CSV layout a source uses and which series to derive from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Dataset {
    /// Actual rental counts (`machine,rental_date,count`)
    Rental,
    /// Actual rental counts with rainfall (`machine,rental_date,count,rainfall`)
    Merged,
    /// Monthly forecasts (`year_month,machine,predicted_count,rainfall,temperature`)
    Forecast,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the 12-month series for one year and machine as JSON
    Monthly {
        /// CSV file path or http(s) URL
        #[arg(short = 's', long)]
        source: String,

        /// Layout of the CSV source
        #[arg(short = 'k', long, value_enum)]
        kind: Dataset,

        /// Calendar year to aggregate
        #[arg(short = 'y', long)]
        year: i32,

        /// Machine type, matched exactly
        #[arg(short = 'm', long)]
        machine: String,

        /// Wrap the series with its chart specification
        #[arg(long)]
        chart: bool,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Print the distinct machine types, sorted
    Machines {
        /// CSV file path or http(s) URL
        #[arg(short = 's', long)]
        source: String,

        /// Layout of the CSV source
        #[arg(short = 'k', long, value_enum)]
        kind: Dataset,
    },

    /// Print the distinct calendar years, sorted
    Years {
        /// CSV file path or http(s) URL
        #[arg(short = 's', long)]
        source: String,

        /// Layout of the CSV source
        #[arg(short = 'k', long, value_enum)]
        kind: Dataset,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Monthly {
            source,
            kind,
            year,
            machine,
            chart,
            pretty,
        } => {
            let records = summary::Records::load(kind, &source).await?;
            let selection = Selection::new(year, machine);
            println!("{}", records.monthly_json(&selection, chart, pretty)?);
            Ok(())
        }
        Command::Machines { source, kind } => {
            let records = summary::Records::load(kind, &source).await?;
            for machine in records.machines() {
                println!("{}", machine);
            }
            Ok(())
        }
        Command::Years { source, kind } => {
            let records = summary::Records::load(kind, &source).await?;
            for year in records.years() {
                println!("{}", year);
            }
            Ok(())
        }
    }
}
