//! Level monthly payment for a fixed-rate, fully amortizing loan.
//!
//! Standard annuity formula:
//!
//! ```text
//! payment = P * r / (1 - (1 + r)^-n)
//! ```
//!
//! with `r` the monthly rate and `n` the number of monthly periods. The
//! formula is undefined at `r = 0`, where the payment is `P / n`.

use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::AmortizationError;
use crate::types::{Money, Rate};
use crate::AmortizationResult;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

const PERCENT_DIVISOR: Decimal = dec!(100);
const MONTHS_PER_YEAR: Decimal = dec!(12);

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Which branch of the payment calculation produced the figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Textbook annuity formula.
    Annuity,
    /// Zero (or numerically negligible) rate: principal spread evenly.
    StraightLine,
    /// `(1 + r)^n` exceeds Decimal range, so `(1 + r)^-n` is taken as 0 and
    /// the payment collapses to the interest-only amount `P * r`.
    InterestOnlyLimit,
    /// Negative rate where `(1 + r)^n` underflows Decimal range, so
    /// `(1 + r)^-n` is unbounded and the payment tends to 0.
    ZeroLimit,
}

/// A computed payment together with the branch that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentQuote {
    pub monthly_payment: Money,
    pub monthly_rate: Rate,
    pub method: PaymentMethod,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Convert an annual percentage (5.0 = 5%) into a monthly decimal rate.
pub fn monthly_rate(annual_rate_percent: Decimal) -> Rate {
    annual_rate_percent / PERCENT_DIVISOR / MONTHS_PER_YEAR
}

/// Fixed monthly payment that fully amortizes `principal` over `term_months`.
pub fn compute_monthly_payment(
    principal: Money,
    annual_rate_percent: Decimal,
    term_months: u32,
) -> AmortizationResult<Money> {
    quote_monthly_payment(principal, annual_rate_percent, term_months).map(|q| q.monthly_payment)
}

/// Like [`compute_monthly_payment`], but also reports the monthly rate and
/// which formula branch was taken.
pub fn quote_monthly_payment(
    principal: Money,
    annual_rate_percent: Decimal,
    term_months: u32,
) -> AmortizationResult<PaymentQuote> {
    if term_months == 0 {
        return Err(AmortizationError::InvalidTerm { term: 0 });
    }
    if principal < Decimal::ZERO {
        return Err(AmortizationError::InvalidAmount { amount: principal });
    }

    let rate = monthly_rate(annual_rate_percent);
    let one_plus_r = Decimal::ONE + rate;
    if one_plus_r <= Decimal::ZERO {
        return Err(AmortizationError::InvalidInput {
            field: "interest_rate".into(),
            reason: "Annual rate must be greater than -1200%".into(),
        });
    }

    let periods = Decimal::from(term_months);

    if rate.is_zero() {
        return Ok(PaymentQuote {
            monthly_payment: principal / periods,
            monthly_rate: rate,
            method: PaymentMethod::StraightLine,
        });
    }

    let interest_only = principal
        .checked_mul(rate)
        .ok_or_else(|| AmortizationError::InvalidInput {
            field: "loan_amount".into(),
            reason: "Monthly interest exceeds representable range".into(),
        })?;

    let factor = match one_plus_r.checked_powu(u64::from(term_months)) {
        Some(f) => f,
        None => {
            return Ok(PaymentQuote {
                monthly_payment: interest_only,
                monthly_rate: rate,
                method: PaymentMethod::InterestOnlyLimit,
            });
        }
    };

    if factor.is_zero() {
        return Ok(PaymentQuote {
            monthly_payment: Decimal::ZERO,
            monthly_rate: rate,
            method: PaymentMethod::ZeroLimit,
        });
    }

    let denominator = Decimal::ONE - Decimal::ONE / factor;

    // Rates below Decimal's resolution leave 1 + r == 1.
    if denominator.is_zero() {
        return Ok(PaymentQuote {
            monthly_payment: principal / periods,
            monthly_rate: rate,
            method: PaymentMethod::StraightLine,
        });
    }

    let monthly_payment =
        interest_only
            .checked_div(denominator)
            .ok_or_else(|| AmortizationError::InvalidInput {
                field: "loan_amount".into(),
                reason: "Monthly payment exceeds representable range".into(),
            })?;

    Ok(PaymentQuote {
        monthly_payment,
        monthly_rate: rate,
        method: PaymentMethod::Annuity,
    })
}
