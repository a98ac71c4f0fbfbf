//! Fixed-rate loan amortization.
//!
//! - [`payment`]: level monthly payment from principal, annual rate and term
//! - [`schedule`]: period-by-period split of each payment into interest and principal
//! - [`loan`]: validated request in, headline figures and optional schedule out

pub mod loan;
pub mod payment;
pub mod schedule;

pub use loan::{calculate_loan, validate_request, LoanOutput, LoanRequest, LoanResult};
pub use payment::{compute_monthly_payment, monthly_rate, quote_monthly_payment, PaymentMethod};
pub use schedule::{build_schedule, schedule, summarize, AmortizationEntry, Schedule, ScheduleTotals};
