//! Format and unformat command implementations.

use super::{CommandResult, Variant};
use cnpj_core::formatter::is_masked;
use cnpj_core::{format, unformat, Alphanumeric, Numeric};

fn normalize(variant: Variant, text: &str) -> String {
    match variant {
        Variant::Numeric => unformat::<Numeric>(text),
        Variant::Alphanumeric => unformat::<Alphanumeric>(text),
    }
}

pub fn run_format(variant: Variant, raw: String) -> CommandResult {
    if is_masked(&raw) {
        println!("{}", raw);
    } else {
        println!("{}", format(&normalize(variant, &raw)));
    }
    Ok(())
}

pub fn run_unformat(variant: Variant, text: String) -> CommandResult {
    println!("{}", normalize(variant, &text));
    Ok(())
}
