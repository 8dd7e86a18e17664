//! Console report for the snippet tour.
//!
//! Lines are built as `String`s and printed by the caller. Colors come from
//! `colored`; `set_color` turns them off globally for plain terminals and
//! piped output.

use colored::Colorize;
use serde::Serialize;
use std::fmt::Display;

pub fn set_color(enabled: bool) {
    colored::control::set_override(enabled);
}

/// Compact JSON for a record, or a marker when it cannot be serialized.
pub fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|err| format!("<unserializable: {err}>"))
}

#[derive(Debug, Default)]
pub struct Report {
    lines: Vec<String>,
    sections: usize,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn section(&mut self, title: &str) -> &mut Self {
        self.sections += 1;
        if self.sections > 1 {
            self.lines.push(String::new());
        }
        let header = format!("--- Snippet {}: {} ---", self.sections, title);
        self.lines.push(header.bold().cyan().to_string());
        self
    }

    pub fn ok(&mut self, label: &str, value: impl Display) -> &mut Self {
        self.lines.push(format!("  {} => {}", label, value.to_string().green()));
        self
    }

    pub fn json<T: Serialize>(&mut self, label: &str, value: &T) -> &mut Self {
        self.ok(label, to_json(value))
    }

    pub fn err(&mut self, label: &str, error: impl Display) -> &mut Self {
        self.lines.push(format!(
            "  {} => {} {}",
            label,
            "error:".red().bold(),
            error.to_string().red()
        ));
        self
    }

    pub fn section_count(&self) -> usize {
        self.sections
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn render(&self) -> String {
        let mut output = format!("{}\n{}\n", "Snippet Tour".bold(), "=".repeat(40));
        for line in &self.lines {
            output.push_str(line);
            output.push('\n');
        }
        output
    }
}
