mod commands;
mod input;
mod logging;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::loan::{CalculateArgs, LoanArgs};

/// Fixed-rate loan amortization
#[derive(Parser)]
#[command(
    name = "amort",
    version,
    about = "Fixed-rate loan amortization",
    long_about = "Computes the level monthly payment, total cost and total interest of a \
                  fixed-rate loan, and optionally its payment-by-payment amortization \
                  schedule. All arithmetic uses decimal precision; amounts are rounded \
                  to cents only for display."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// Keep full precision in json/csv/minimal output instead of rounding to cents
    #[arg(long, global = true)]
    full_precision: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Monthly payment, total cost and total interest
    Payment(LoanArgs),
    /// Monthly payment plus the full amortization schedule
    Schedule(LoanArgs),
    /// Full loan request from JSON file, stdin, or flags
    Calculate(CalculateArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();
    logging::init();

    let rounded = !cli.full_precision;
    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Payment(args) => commands::loan::run_payment(args, rounded),
        Commands::Schedule(args) => commands::loan::run_schedule(args, rounded),
        Commands::Calculate(args) => commands::loan::run_calculate(args, rounded),
        Commands::Version => {
            println!("amort {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
