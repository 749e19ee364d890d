//! Rental CLI - Command line tool for summarizing machine rental CSV data.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "rental-cli",
    version,
    about = "Farm machine rental dashboard data toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: rental_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    rental_cmd::run(cli.command).await
}
