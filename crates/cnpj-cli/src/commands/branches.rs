//! Branch derivation command implementation.

use super::{with_engine, CommandResult, Variant};
use crate::output;

pub fn run(variant: Variant, root: String, count: u32, json: bool) -> CommandResult {
    let branches = with_engine!(variant, |engine| engine.derive_branches(&root, count))?;

    if json {
        println!("{}", output::format_json(&branches));
    } else {
        for branch in branches {
            println!("{}", branch);
        }
    }
    Ok(())
}
