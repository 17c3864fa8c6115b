//! Complete command implementation.

use super::{with_engine, CommandResult, Variant};

pub fn run(variant: Variant, base: String) -> CommandResult {
    let id = with_engine!(variant, |engine| engine
        .complete(&base)
        .map_err(|e| format!("Invalid base {}: {}", base, e)))?;
    println!("{}", id);
    Ok(())
}
