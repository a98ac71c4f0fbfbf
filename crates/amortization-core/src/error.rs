use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AmortizationError {
    #[error("Invalid loan amount! ({amount})")]
    InvalidAmount { amount: Decimal },

    #[error("Invalid loan term! ({term})")]
    InvalidTerm { term: i64 },

    #[error("Invalid input: {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for AmortizationError {
    fn from(e: serde_json::Error) -> Self {
        AmortizationError::SerializationError(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_user_facing_messages() {
        let e = AmortizationError::InvalidAmount { amount: dec!(-1) };
        assert_eq!(e.to_string(), "Invalid loan amount! (-1)");
        let e = AmortizationError::InvalidTerm { term: 0 };
        assert_eq!(e.to_string(), "Invalid loan term! (0)");
    }

    #[test]
    fn test_from_serde_json() {
        let err: AmortizationError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, AmortizationError::SerializationError(_)));
    }
}
