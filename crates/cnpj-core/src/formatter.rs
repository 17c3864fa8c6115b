//! Presentation mask `XX.XXX.XXX/XXXX-XX` and its inverse.

use crate::policy::SymbolPolicy;
use regex::Regex;
use std::sync::OnceLock;

/// Number of symbols in a raw identifier.
pub const RAW_LEN: usize = 14;

/// Raw shape accepted by [`format`]: twelve root/branch symbols and two digits.
const RAW_PATTERN: &str = r"^([0-9A-Z]{2})([0-9A-Z]{3})([0-9A-Z]{3})([0-9A-Z]{4})([0-9]{2})$";

/// Masked shape produced by [`format`].
const MASKED_PATTERN: &str = r"^[0-9A-Z]{2}\.[0-9A-Z]{3}\.[0-9A-Z]{3}/[0-9A-Z]{4}-[0-9]{2}$";

fn raw_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(RAW_PATTERN).expect("invalid regex"))
}

fn masked_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(MASKED_PATTERN).expect("invalid regex"))
}

/// Applies the punctuation mask to a raw 14-symbol identifier.
///
/// Input that does not have the raw shape is returned unchanged.
///
/// ```rust
/// use cnpj_core::formatter::format;
///
/// assert_eq!(format("11222333000181"), "11.222.333/0001-81");
/// assert_eq!(format("12ABC345000100"), "12.ABC.345/0001-00");
/// assert_eq!(format("123"), "123");
/// ```
pub fn format(raw: &str) -> String {
    raw_regex().replace(raw, "$1.$2.$3/$4-$5").into_owned()
}

/// Strips every character outside the policy's alphabet and upper-cases letters.
///
/// Never fails; the result may have any length.
pub fn unformat<P: SymbolPolicy>(text: &str) -> String {
    text.chars().filter_map(P::normalize).collect()
}

/// Returns true when `text` already carries the full punctuation mask.
pub fn is_masked(text: &str) -> bool {
    masked_regex().is_match(text)
}
