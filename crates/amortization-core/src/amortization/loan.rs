//! Loan calculation entry point: validates a raw request, prices the level
//! payment and optionally attaches the full schedule.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, warn};

use super::payment::{quote_monthly_payment, PaymentMethod};
use super::schedule::{build_schedule, summarize, AmortizationEntry, ScheduleTotals};
use crate::error::AmortizationError;
use crate::rounding::round_currency;
use crate::types::{with_metadata, ComputationOutput, Money, Rate, TermUnit};
use crate::AmortizationResult;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Largest accepted loan amount.
pub const MAX_LOAN_AMOUNT: Money = dec!(1_000_000_000_000_000_000);

/// Closing balances beyond half a cent are reported as a warning.
const RESIDUE_TOLERANCE: Money = dec!(0.005);

// ---------------------------------------------------------------------------
// Input / Output Types
// ---------------------------------------------------------------------------

/// Raw loan request as submitted by a caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanRequest {
    /// Amount borrowed.
    pub loan_amount: Money,
    /// Annual interest rate in percent (5.0 = 5%).
    pub interest_rate: Decimal,
    /// Term in `term_unit`s.
    pub loan_term: i64,
    #[serde(default)]
    pub term_unit: TermUnit,
    #[serde(default)]
    pub show_schedule: bool,
}

/// Headline figures for a loan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanResult {
    pub monthly_payment: Money,
    /// monthly_payment * term_months.
    pub total_cost: Money,
    /// total_cost - principal.
    pub total_interest: Money,
}

impl LoanResult {
    pub fn new(
        principal: Money,
        monthly_payment: Money,
        term_months: u32,
    ) -> AmortizationResult<Self> {
        let total_cost = monthly_payment
            .checked_mul(Decimal::from(term_months))
            .ok_or_else(|| AmortizationError::InvalidInput {
                field: "loan_term".into(),
                reason: "Total cost exceeds representable range".into(),
            })?;
        Ok(Self {
            monthly_payment,
            total_cost,
            total_interest: total_cost - principal,
        })
    }

    pub fn rounded(&self) -> Self {
        Self {
            monthly_payment: round_currency(self.monthly_payment),
            total_cost: round_currency(self.total_cost),
            total_interest: round_currency(self.total_interest),
        }
    }
}

/// Output of a loan calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanOutput {
    #[serde(flatten)]
    pub summary: LoanResult,
    pub term_months: u32,
    pub monthly_rate: Rate,
    pub payment_method: PaymentMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<Vec<AmortizationEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_totals: Option<ScheduleTotals>,
}

impl LoanOutput {
    /// Display copy: every monetary field rounded to cents. The monthly rate
    /// is left untouched.
    pub fn rounded(&self) -> Self {
        Self {
            summary: self.summary.rounded(),
            term_months: self.term_months,
            monthly_rate: self.monthly_rate,
            payment_method: self.payment_method,
            schedule: self
                .schedule
                .as_ref()
                .map(|entries| entries.iter().map(AmortizationEntry::rounded).collect()),
            schedule_totals: self.schedule_totals.as_ref().map(ScheduleTotals::rounded),
        }
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Check the amount, then the term. Returns the term in months.
pub fn validate_request(input: &LoanRequest) -> AmortizationResult<u32> {
    if input.loan_amount < Decimal::ZERO || input.loan_amount > MAX_LOAN_AMOUNT {
        return Err(AmortizationError::InvalidAmount {
            amount: input.loan_amount,
        });
    }
    input.term_unit.to_months(input.loan_term)
}

/// Price a fixed-rate loan and, if requested, build its schedule.
pub fn calculate_loan(input: &LoanRequest) -> AmortizationResult<ComputationOutput<LoanOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let term_months = validate_request(input)?;
    let quote = quote_monthly_payment(input.loan_amount, input.interest_rate, term_months)?;

    debug!(
        loan_amount = %input.loan_amount,
        interest_rate = %input.interest_rate,
        term_months,
        monthly_payment = %quote.monthly_payment,
        method = ?quote.method,
        "priced loan"
    );

    if input.loan_amount.is_zero() {
        warnings.push("Loan amount is zero; all payments are zero".into());
    }
    if input.interest_rate < Decimal::ZERO {
        warnings.push(format!(
            "Negative interest rate {}%; payments are below straight-line",
            input.interest_rate
        ));
    }
    match quote.method {
        PaymentMethod::Annuity => {}
        PaymentMethod::StraightLine => {
            warnings.push("Zero interest rate; payment is principal / term (straight-line)".into())
        }
        PaymentMethod::InterestOnlyLimit => warnings.push(format!(
            "Compounding factor over {term_months} months exceeds decimal range; \
             payment approximated as interest-only"
        )),
        PaymentMethod::ZeroLimit => warnings.push(format!(
            "Negative-rate discount factor over {term_months} months underflows decimal range; \
             payment approximated as zero"
        )),
    }

    let summary = LoanResult::new(input.loan_amount, quote.monthly_payment, term_months)?;

    let (schedule, schedule_totals) = if input.show_schedule {
        let entries = build_schedule(
            input.loan_amount,
            input.interest_rate,
            term_months,
            quote.monthly_payment,
        );
        let totals = summarize(&entries);
        if totals.final_balance.abs() > RESIDUE_TOLERANCE {
            warnings.push(format!(
                "Schedule closes with residual balance {}",
                totals.final_balance
            ));
        }
        (Some(entries), Some(totals))
    } else {
        (None, None)
    };

    for w in &warnings {
        warn!(warning = %w, "loan calculation");
    }

    let output = LoanOutput {
        summary,
        term_months,
        monthly_rate: quote.monthly_rate,
        payment_method: quote.method,
        schedule,
        schedule_totals,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Fixed-rate amortization: level monthly payment on a declining balance",
        &serde_json::json!({
            "loan_amount": input.loan_amount.to_string(),
            "interest_rate_pct": input.interest_rate.to_string(),
            "loan_term": input.loan_term,
            "term_unit": input.term_unit,
            "term_months": term_months,
            "show_schedule": input.show_schedule,
        }),
        warnings,
        elapsed,
        output,
    ))
}
