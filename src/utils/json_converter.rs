use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Convert a JSON value to the text a browser would show for it.
/// Integral floats drop their fraction (`1.0` -> `"1"`), `null` is empty.
pub fn display_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.to_string(),
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                return n.to_string();
            }
            match n.as_f64() {
                Some(f) if f == 0.0 => "0".to_string(),
                Some(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e21 => format!("{:.0}", f),
                _ => n.to_string(),
            }
        }
        Value::Bool(b) => b.to_string(),
        Value::Array(arr) => arr
            .iter()
            .map(display_text)
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
        Value::Null => String::new(),
    }
}

/// Falsy values are `null`, `false`, zero and the empty string.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Serde adapter: accept any JSON value and keep its display text.
pub fn deserialize_display_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.map(|v| display_text(&v)))
}

/// Serde adapter: like [`deserialize_display_text`] but falsy values become `None`.
pub fn deserialize_truthy_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.filter(is_truthy).map(|v| display_text(&v)))
}
