//! Payment-by-payment amortization schedule.
//!
//! Each period charges interest on the opening balance and applies the rest
//! of the level payment to principal:
//!
//! ```text
//! interest_i  = balance_{i-1} * r
//! principal_i = payment - interest_i
//! balance_i   = balance_{i-1} - principal_i
//! ```
//!
//! Values are carried at full precision. The last period is not adjusted, so
//! the closing balance may hold a tiny residue instead of exactly zero.

use std::iter::FusedIterator;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::payment::monthly_rate;
use crate::rounding::round_currency;
use crate::types::{Money, Rate};

/// One row of the schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmortizationEntry {
    /// 1-indexed, sequential.
    pub payment_number: u32,
    pub principal_paid: Money,
    pub interest_paid: Money,
    /// Balance still owed after this payment.
    pub remaining_balance: Money,
}

impl AmortizationEntry {
    /// Copy with every amount rounded to cents for display.
    pub fn rounded(&self) -> Self {
        Self {
            payment_number: self.payment_number,
            principal_paid: round_currency(self.principal_paid),
            interest_paid: round_currency(self.interest_paid),
            remaining_balance: round_currency(self.remaining_balance),
        }
    }
}

/// Aggregates over a full schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleTotals {
    pub payments: u32,
    pub total_principal: Money,
    pub total_interest: Money,
    pub total_paid: Money,
    pub final_balance: Money,
}

impl ScheduleTotals {
    pub fn rounded(&self) -> Self {
        Self {
            payments: self.payments,
            total_principal: round_currency(self.total_principal),
            total_interest: round_currency(self.total_interest),
            total_paid: round_currency(self.total_paid),
            final_balance: round_currency(self.final_balance),
        }
    }
}

/// Lazy schedule iterator. A clone snapshots the current position; call
/// [`schedule`] again for a fresh run.
#[derive(Debug, Clone)]
pub struct Schedule {
    monthly_rate: Rate,
    monthly_payment: Money,
    term_months: u32,
    next_payment: u64,
    balance: Money,
}

impl Schedule {
    pub fn term_months(&self) -> u32 {
        self.term_months
    }

    /// Balance before the next payment is applied.
    pub fn balance(&self) -> Money {
        self.balance
    }
}

impl Iterator for Schedule {
    type Item = AmortizationEntry;

    fn next(&mut self) -> Option<AmortizationEntry> {
        if self.next_payment > u64::from(self.term_months) {
            return None;
        }

        // Saturating ops keep a caller-supplied payment that never
        // amortizes from panicking on overflow.
        let interest_paid = self.balance.saturating_mul(self.monthly_rate);
        let principal_paid = self.monthly_payment.saturating_sub(interest_paid);
        self.balance = self.balance.saturating_sub(principal_paid);

        let entry = AmortizationEntry {
            payment_number: self.next_payment as u32,
            principal_paid,
            interest_paid,
            remaining_balance: self.balance,
        };
        self.next_payment += 1;
        Some(entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining =
            (u64::from(self.term_months) + 1).saturating_sub(self.next_payment) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Schedule {}

impl FusedIterator for Schedule {}

/// Start a lazy schedule of exactly `term_months` entries.
pub fn schedule(
    principal: Money,
    annual_rate_percent: Decimal,
    term_months: u32,
    monthly_payment: Money,
) -> Schedule {
    Schedule {
        monthly_rate: monthly_rate(annual_rate_percent),
        monthly_payment,
        term_months,
        next_payment: 1,
        balance: principal,
    }
}

/// Materialize the full schedule.
pub fn build_schedule(
    principal: Money,
    annual_rate_percent: Decimal,
    term_months: u32,
    monthly_payment: Money,
) -> Vec<AmortizationEntry> {
    schedule(principal, annual_rate_percent, term_months, monthly_payment).collect()
}

pub fn summarize(entries: &[AmortizationEntry]) -> ScheduleTotals {
    let total_principal: Money = entries.iter().map(|e| e.principal_paid).sum();
    let total_interest: Money = entries.iter().map(|e| e.interest_paid).sum();
    ScheduleTotals {
        payments: entries.len() as u32,
        total_principal,
        total_interest,
        total_paid: total_principal + total_interest,
        final_balance: entries
            .last()
            .map(|e| e.remaining_balance)
            .unwrap_or(Decimal::ZERO),
    }
}
