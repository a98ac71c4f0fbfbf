use napi::Result as NapiResult;
use napi_derive::napi;
use rust_decimal::Decimal;
use serde::Deserialize;

use amortization_core::amortization::{self, LoanRequest};
use amortization_core::TermUnit;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

/// Engine-level input: term already expressed in months.
#[derive(Deserialize)]
struct EngineInput {
    principal: Decimal,
    annual_rate_percent: Decimal,
    term_months: i64,
}

impl EngineInput {
    fn parse(input_json: &str) -> NapiResult<(Self, u32)> {
        let input: EngineInput = serde_json::from_str(input_json).map_err(to_napi_error)?;
        let months = TermUnit::Months
            .to_months(input.term_months)
            .map_err(to_napi_error)?;
        Ok((input, months))
    }
}

// ---------------------------------------------------------------------------
// Loan
// ---------------------------------------------------------------------------

/// Full loan request (`LoanRequest` JSON) in, computation envelope out.
/// Amounts are rounded to cents unless `full_precision` is true.
#[napi]
pub fn calculate_loan(input_json: String, full_precision: Option<bool>) -> NapiResult<String> {
    let input: LoanRequest = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let mut output = amortization::calculate_loan(&input).map_err(to_napi_error)?;
    if !full_precision.unwrap_or(false) {
        output.result = output.result.rounded();
    }
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// Unrounded monthly payment as a decimal string.
#[napi]
pub fn monthly_payment(input_json: String) -> NapiResult<String> {
    let (input, months) = EngineInput::parse(&input_json)?;
    let payment = amortization::compute_monthly_payment(
        input.principal,
        input.annual_rate_percent,
        months,
    )
    .map_err(to_napi_error)?;
    Ok(payment.to_string())
}

/// Unrounded schedule entries as a JSON array.
#[napi]
pub fn amortization_schedule(input_json: String) -> NapiResult<String> {
    let (input, months) = EngineInput::parse(&input_json)?;
    let payment = amortization::compute_monthly_payment(
        input.principal,
        input.annual_rate_percent,
        months,
    )
    .map_err(to_napi_error)?;
    let entries = amortization::build_schedule(
        input.principal,
        input.annual_rate_percent,
        months,
        payment,
    );
    serde_json::to_string(&entries).map_err(to_napi_error)
}
