use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::AmortizationError;
use crate::AmortizationResult;

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Rates expressed as decimals (0.005 = 0.5% per month). Percent inputs are
/// converted at the boundary.
pub type Rate = Decimal;

/// Longest accepted term: 100 years of monthly payments.
pub const MAX_TERM_MONTHS: u32 = 1200;

/// Unit the raw loan term is expressed in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TermUnit {
    #[default]
    Months,
    Years,
}

impl TermUnit {
    /// Convert a raw term into a number of monthly payment periods.
    ///
    /// Non-positive terms and terms beyond [`MAX_TERM_MONTHS`] are rejected
    /// as `InvalidTerm`.
    pub fn to_months(self, term: i64) -> AmortizationResult<u32> {
        if term <= 0 {
            return Err(AmortizationError::InvalidTerm { term });
        }
        let months = match self {
            TermUnit::Months => Some(term),
            TermUnit::Years => term.checked_mul(12),
        };
        months
            .and_then(|m| u32::try_from(m).ok())
            .filter(|m| *m <= MAX_TERM_MONTHS)
            .ok_or(AmortizationError::InvalidTerm { term })
    }
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}
