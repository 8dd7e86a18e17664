/// Upper-cases `input` unless `to_upper` is explicitly `Some(false)`.
pub fn format_string(input: &str, to_upper: Option<bool>) -> String {
    match to_upper {
        Some(false) => input.to_lowercase(),
        Some(true) | None => input.to_uppercase(),
    }
}
