use serde_json::Value;

use super::{result_object, scalar_text};

/// Just the monthly payment, falling back to the first scalar field.
pub fn render_minimal(value: &Value) -> String {
    let Some(result) = result_object(value) else {
        return format!("{}\n", scalar_text(value));
    };

    if let Some(payment) = result.get("monthly_payment").filter(|v| !v.is_null()) {
        return format!("{}\n", scalar_text(payment));
    }

    result
        .iter()
        .find(|(_, v)| !v.is_object() && !v.is_array())
        .map(|(k, v)| format!("{}: {}\n", k, scalar_text(v)))
        .unwrap_or_default()
}
