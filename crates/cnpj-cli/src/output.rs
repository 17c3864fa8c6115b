//! Output formatting utilities.

use serde::Serialize;

/// Formats any serializable value as pretty JSON.
pub fn format_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}

/// Formats one row of the verdict table.
pub fn format_table_row(position: usize, identifier: &str, valid: bool, detail: &str) -> String {
    format!(
        "{:<4} {:<24} {:<8} {}",
        position,
        truncate(identifier, 24),
        verdict_label(valid),
        detail
    )
}

/// Prints the verdict table header.
#[allow(clippy::print_literal)]
pub fn print_table_header() {
    println!("{:<4} {:<24} {:<8} {}", "POS", "IDENTIFIER", "VERDICT", "DETAIL");
    println!("{}", "-".repeat(60));
}

/// Human label for a validity flag.
pub fn verdict_label(valid: bool) -> &'static str {
    if valid {
        "VALID"
    } else {
        "INVALID"
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
