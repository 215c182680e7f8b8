pub mod fake;
mod macros;

use serde::{Deserialize, Deserializer, de::Error};
use serde_json::{Number, Value};

/// Accepts a string, a number, `null` or `false` and yields a string.
/// `null` and `false` yield the empty string. A number without a fractional part is written in
/// integer form, so `1.0` and `1` give the same string.
pub fn deserialize_loose_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null | Value::Bool(false) => Ok(String::new()),
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(number_to_string(&n)),
        other => Err(D::Error::custom(format!(
            "expected a string or a number, found {other}"
        ))),
    }
}

fn number_to_string(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if !n.is_i64() && !n.is_u64() && f.fract() == 0.0 && f.abs() < 1e15 => {
            (f as i64).to_string()
        }
        _ => n.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn loose(value: Value) -> String {
        deserialize_loose_string(value).unwrap()
    }

    #[test]
    fn whole_floats_use_integer_form() {
        assert_eq!(loose(json!(1.0)), "1");
        assert_eq!(loose(json!(-0.0)), "0");
        assert_eq!(loose(json!(1)), "1");
    }

    #[test]
    fn fractional_and_large_numbers_keep_their_text() {
        assert_eq!(loose(json!(1.5)), "1.5");
        assert_eq!(loose(json!(u64::MAX)), u64::MAX.to_string());
    }
}
