use rust_decimal::Decimal;
use serde_json::{Map, Value};
use tabled::{builder::Builder, Table};

use amortization_core::rounding::format_currency;

use super::{result_object, scalar_text, SCHEDULE_COLUMNS, SCHEDULE_KEY, SCHEDULE_TOTALS_KEY};

/// Fields rendered as currency (`1,234.56`).
const MONEY_FIELDS: &[&str] = &[
    "monthly_payment",
    "total_cost",
    "total_interest",
    "principal_paid",
    "interest_paid",
    "remaining_balance",
    "total_principal",
    "total_paid",
    "final_balance",
];

/// Summary table, then the schedule (if any), then warnings and methodology.
pub fn render_table(value: &Value) -> String {
    let Some(result) = result_object(value) else {
        return format!("{}\n", scalar_text(value));
    };

    let mut out = String::new();
    out.push_str(&summary_table(result).to_string());
    out.push('\n');

    if let Some(Value::Object(totals)) = result.get(SCHEDULE_TOTALS_KEY) {
        out.push_str("\nSchedule totals:\n");
        out.push_str(&summary_table(totals).to_string());
        out.push('\n');
    }

    if let Some(Value::Array(rows)) = result.get(SCHEDULE_KEY) {
        out.push_str("\nAmortization schedule:\n");
        out.push_str(&schedule_table(rows).to_string());
        out.push('\n');
    }

    if let Some(Value::Array(warnings)) = value.get("warnings") {
        if !warnings.is_empty() {
            out.push_str("\nWarnings:\n");
            for w in warnings.iter().filter_map(Value::as_str) {
                out.push_str(&format!("  - {}\n", w));
            }
        }
    }

    if let Some(Value::String(meth)) = value.get("methodology") {
        out.push_str(&format!("\nMethodology: {}\n", meth));
    }

    out
}

fn summary_table(map: &Map<String, Value>) -> Table {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for (key, val) in map {
        if val.is_object() || val.is_array() {
            continue;
        }
        builder.push_record([key.clone(), cell_text(key, val)]);
    }
    builder.build()
}

fn schedule_table(rows: &[Value]) -> Table {
    let mut builder = Builder::default();
    builder.push_record(SCHEDULE_COLUMNS.iter().map(|(_, heading)| heading.to_string()));
    for row in rows {
        if let Value::Object(map) = row {
            builder.push_record(SCHEDULE_COLUMNS.iter().map(|(key, _)| {
                map.get(*key)
                    .map(|v| cell_text(key, v))
                    .unwrap_or_default()
            }));
        }
    }
    builder.build()
}

fn cell_text(key: &str, value: &Value) -> String {
    if MONEY_FIELDS.contains(&key) {
        let amount = match value {
            Value::String(s) => s.parse::<Decimal>().ok(),
            Value::Number(n) => n.to_string().parse::<Decimal>().ok(),
            _ => None,
        };
        if let Some(amount) = amount {
            return format_currency(amount);
        }
    }
    scalar_text(value)
}
