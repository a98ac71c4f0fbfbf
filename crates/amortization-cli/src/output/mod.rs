pub mod csv_out;
pub mod json;
pub mod minimal;
pub mod table;

use crate::OutputFormat;
use serde_json::{Map, Value};

/// Schedule rows are pulled out of the result and rendered on their own.
pub const SCHEDULE_KEY: &str = "schedule";
pub const SCHEDULE_TOTALS_KEY: &str = "schedule_totals";

/// Schedule columns in display order with their table headings.
pub const SCHEDULE_COLUMNS: &[(&str, &str)] = &[
    ("payment_number", "Payment #"),
    ("principal_paid", "Principal Paid"),
    ("interest_paid", "Interest Paid"),
    ("remaining_balance", "Remaining Balance"),
];

/// Render in the requested format and write to stdout.
pub fn format_output(format: &OutputFormat, value: &Value) {
    let rendered = match format {
        OutputFormat::Json => json::render_json(value),
        OutputFormat::Table => table::render_table(value),
        OutputFormat::Csv => csv_out::render_csv(value),
        OutputFormat::Minimal => minimal::render_minimal(value),
    };
    print!("{}", rendered);
}

/// The `result` object inside a computation envelope, or the value itself.
pub(crate) fn result_object(value: &Value) -> Option<&Map<String, Value>> {
    value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value)
        .as_object()
}

/// Render a scalar JSON value the way a person would type it.
pub(crate) fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
