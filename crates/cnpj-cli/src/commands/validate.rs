//! Validate command implementation.

use super::{with_engine, CommandError, CommandResult, Variant};
use crate::output;
use serde_json::json;

pub fn run(variant: Variant, ids: Vec<String>, json_output: bool, strict: bool) -> CommandResult {
    // (input, formatted when valid, rejection reason when invalid)
    let results: Vec<(String, Option<String>, Option<String>)> = with_engine!(variant, |engine| {
        ids.into_iter()
            .map(|input| match engine.parse(&input) {
                Ok(id) => (input, Some(id.formatted()), None),
                Err(e) => (input, None, Some(e.to_string())),
            })
            .collect()
    });

    let total = results.len();
    let invalid = results.iter().filter(|(_, id, _)| id.is_none()).count();

    if json_output {
        let json_results: Vec<_> = results
            .iter()
            .map(|(input, id, reason)| {
                json!({
                    "input": input,
                    "is_valid": id.is_some(),
                    "formatted": id,
                    "reason": reason,
                })
            })
            .collect();
        println!("{}", output::format_json(&json_results));
    } else {
        output::print_table_header();
        for (index, (input, id, reason)) in results.iter().enumerate() {
            let shown = id.as_deref().unwrap_or(input);
            let detail = reason.as_deref().unwrap_or("");
            println!(
                "{}",
                output::format_table_row(index + 1, shown, id.is_some(), detail)
            );
        }
    }

    if strict && invalid > 0 {
        return Err(CommandError::InvalidIdentifiers { invalid, total }.into());
    }
    Ok(())
}
