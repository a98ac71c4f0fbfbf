use clap::{Args, ValueEnum};
use rust_decimal::Decimal;
use serde_json::Value;
use tracing::debug;

use amortization_core::amortization::{calculate_loan, LoanRequest};
use amortization_core::TermUnit;

use crate::input;

/// Unit of `--term`
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum UnitArg {
    #[default]
    Months,
    Years,
}

impl From<UnitArg> for TermUnit {
    fn from(unit: UnitArg) -> Self {
        match unit {
            UnitArg::Months => TermUnit::Months,
            UnitArg::Years => TermUnit::Years,
        }
    }
}

/// Arguments shared by `payment` and `schedule`
#[derive(Args)]
pub struct LoanArgs {
    /// Loan amount (principal)
    #[arg(long)]
    pub amount: Decimal,

    /// Annual interest rate in percent (e.g. 6.5)
    #[arg(long, allow_hyphen_values = true)]
    pub rate: Decimal,

    /// Loan term, counted in --unit
    #[arg(long, allow_hyphen_values = true)]
    pub term: i64,

    /// Unit of the loan term
    #[arg(long, value_enum, default_value_t = UnitArg::Months)]
    pub unit: UnitArg,
}

impl LoanArgs {
    fn into_request(self, show_schedule: bool) -> LoanRequest {
        LoanRequest {
            loan_amount: self.amount,
            interest_rate: self.rate,
            loan_term: self.term,
            term_unit: self.unit.into(),
            show_schedule,
        }
    }
}

/// Arguments for a full loan request
#[derive(Args)]
pub struct CalculateArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Loan amount (principal)
    #[arg(long)]
    pub amount: Option<Decimal>,

    /// Annual interest rate in percent (e.g. 6.5)
    #[arg(long, allow_hyphen_values = true)]
    pub rate: Option<Decimal>,

    /// Loan term, counted in --unit
    #[arg(long, allow_hyphen_values = true)]
    pub term: Option<i64>,

    /// Unit of the loan term
    #[arg(long, value_enum, default_value_t = UnitArg::Months)]
    pub unit: UnitArg,

    /// Include the payment-by-payment schedule
    #[arg(long)]
    pub show_schedule: bool,
}

pub fn run_payment(args: LoanArgs, rounded: bool) -> Result<Value, Box<dyn std::error::Error>> {
    run_request(&args.into_request(false), rounded)
}

pub fn run_schedule(args: LoanArgs, rounded: bool) -> Result<Value, Box<dyn std::error::Error>> {
    run_request(&args.into_request(true), rounded)
}

pub fn run_calculate(
    args: CalculateArgs,
    rounded: bool,
) -> Result<Value, Box<dyn std::error::Error>> {
    let request: LoanRequest = if let Some(ref path) = args.input {
        debug!(path = %path, "reading loan request from file");
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        debug!("reading loan request from stdin");
        serde_json::from_value(data)?
    } else {
        let amount = args
            .amount
            .ok_or("--amount is required (or provide --input)")?;
        let rate = args.rate.ok_or("--rate is required (or provide --input)")?;
        let term = args.term.ok_or("--term is required (or provide --input)")?;

        LoanRequest {
            loan_amount: amount,
            interest_rate: rate,
            loan_term: term,
            term_unit: args.unit.into(),
            show_schedule: args.show_schedule,
        }
    };

    run_request(&request, rounded)
}

fn run_request(request: &LoanRequest, rounded: bool) -> Result<Value, Box<dyn std::error::Error>> {
    let mut output = calculate_loan(request)?;
    if rounded {
        output.result = output.result.rounded();
    }
    Ok(serde_json::to_value(output)?)
}
