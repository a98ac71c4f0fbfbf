use serde_json::Value;

/// Pretty-printed JSON with a trailing newline.
pub fn render_json(value: &Value) -> String {
    match serde_json::to_string_pretty(value) {
        Ok(s) => format!("{}\n", s),
        Err(e) => {
            eprintln!("JSON serialization error: {}", e);
            String::new()
        }
    }
}
