use serde::{Deserialize, Serialize};

/// Either a piece of text or a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Text(String),
    Number(f64),
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Text(text)
    }
}

impl From<f64> for Value {
    fn from(number: f64) -> Self {
        Value::Number(number)
    }
}

impl From<i32> for Value {
    fn from(number: i32) -> Self {
        Value::Number(f64::from(number))
    }
}

/// Text maps to its length in characters, a number to twice its value.
pub fn process_value(value: &Value) -> f64 {
    match value {
        Value::Text(text) => text.chars().count() as f64,
        Value::Number(number) => number * 2.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_length() {
        assert_eq!(process_value(&Value::from("abc")), 3.0);
        assert_eq!(process_value(&Value::from("")), 0.0);
    }

    #[test]
    fn test_number_doubles() {
        assert_eq!(process_value(&Value::from(50)), 100.0);
        assert_eq!(process_value(&Value::from(-1.5)), -3.0);
    }

    #[test]
    fn test_length_counts_characters() {
        assert_eq!(process_value(&Value::from("héllo")), 5.0);
    }

    #[test]
    fn test_untagged_json() {
        let text: Value = serde_json::from_str("\"abc\"").unwrap();
        let number: Value = serde_json::from_str("50").unwrap();
        assert_eq!(text, Value::Text("abc".to_string()));
        assert_eq!(number, Value::Number(50.0));
    }
}
