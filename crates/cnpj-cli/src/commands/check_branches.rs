//! Branch validation command implementation.

use super::{with_engine, CommandError, CommandResult, Variant};
use crate::output;

/// Reads one identifier per line, skipping blank lines.
fn read_branch_file(path: &str) -> Result<Vec<String>, CommandError> {
    let contents = std::fs::read_to_string(path).map_err(|source| CommandError::ReadInput {
        path: path.to_string(),
        source,
    })?;
    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

pub fn run(
    variant: Variant,
    root: String,
    mut branches: Vec<String>,
    file: Option<String>,
    json: bool,
    strict: bool,
) -> CommandResult {
    if let Some(path) = file {
        branches.extend(read_branch_file(&path)?);
    }

    let verdicts = with_engine!(variant, |engine| engine.validate_branches(&root, &branches))?;

    if json {
        println!("{}", output::format_json(&verdicts));
    } else {
        output::print_table_header();
        for verdict in &verdicts {
            println!(
                "{}",
                output::format_table_row(
                    verdict.position,
                    &verdict.original_text,
                    verdict.is_valid,
                    ""
                )
            );
        }
    }

    let invalid = verdicts.iter().filter(|v| !v.is_valid).count();
    if strict && invalid > 0 {
        return Err(CommandError::InvalidIdentifiers {
            invalid,
            total: verdicts.len(),
        }
        .into());
    }
    Ok(())
}
