use serde_json::Value;

use super::{result_object, scalar_text, SCHEDULE_COLUMNS, SCHEDULE_KEY};

/// CSV of the schedule when one is present, otherwise two-column
/// `field,value` rows for the scalar results.
pub fn render_csv(value: &Value) -> String {
    let mut wtr = csv::Writer::from_writer(Vec::new());

    match result_object(value) {
        Some(result) => {
            if let Some(Value::Array(rows)) = result.get(SCHEDULE_KEY) {
                write_rows(&mut wtr, rows);
            } else {
                let _ = wtr.write_record(["field", "value"]);
                for (key, val) in result {
                    if val.is_object() || val.is_array() {
                        continue;
                    }
                    let _ = wtr.write_record([key.as_str(), &scalar_text(val)]);
                }
            }
        }
        None => {
            let _ = wtr.write_record([&scalar_text(value)]);
        }
    }

    wtr.into_inner()
        .ok()
        .and_then(|bytes| String::from_utf8(bytes).ok())
        .unwrap_or_default()
}

/// Schedule rows in payment-number-first column order.
fn write_rows(wtr: &mut csv::Writer<Vec<u8>>, rows: &[Value]) {
    if rows.is_empty() {
        return;
    }

    let _ = wtr.write_record(SCHEDULE_COLUMNS.iter().map(|(key, _)| *key));

    for row in rows {
        if let Value::Object(map) = row {
            let record: Vec<String> = SCHEDULE_COLUMNS
                .iter()
                .map(|(key, _)| map.get(*key).map(scalar_text).unwrap_or_default())
                .collect();
            let _ = wtr.write_record(&record);
        }
    }
}
