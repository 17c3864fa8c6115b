use rand::Rng;
use std::fmt;

/// Symbol alphabet and reduction rules for one identifier variant.
///
/// The engine is generic over this trait; everything that differs between
/// the numeric and alphanumeric identifiers lives here.
pub trait SymbolPolicy: Copy + Default + fmt::Debug + Send + Sync + 'static {
    /// Short variant name used in logs and reports.
    const NAME: &'static str;

    /// Largest branch count accepted by branch derivation.
    const MAX_BRANCHES: u32;

    /// Maps an input character to its normalized symbol, or `None` when the
    /// character is outside the alphabet and must be stripped. Normalized
    /// symbols are ASCII.
    fn normalize(c: char) -> Option<char>;

    /// Reduces a normalized root/branch symbol to a value in `0..=9`.
    fn reduce(symbol: char) -> Option<u8>;

    /// Draws one random root symbol.
    fn random_symbol<R: Rng + ?Sized>(rng: &mut R) -> char;
}

/// Decimal-only identifiers (`00.000.000/0000-00`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Numeric;

/// Identifiers whose root and branch may carry uppercase letters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Alphanumeric;

fn random_digit<R: Rng + ?Sized>(rng: &mut R) -> char {
    char::from(b'0' + rng.gen_range(0..10u8))
}

impl SymbolPolicy for Numeric {
    const NAME: &'static str = "numeric";
    const MAX_BRANCHES: u32 = 9999;

    fn normalize(c: char) -> Option<char> {
        c.is_ascii_digit().then_some(c)
    }

    fn reduce(symbol: char) -> Option<u8> {
        symbol.to_digit(10).map(|d| d as u8)
    }

    fn random_symbol<R: Rng + ?Sized>(rng: &mut R) -> char {
        random_digit(rng)
    }
}

impl SymbolPolicy for Alphanumeric {
    const NAME: &'static str = "alphanumeric";
    const MAX_BRANCHES: u32 = 999;

    fn normalize(c: char) -> Option<char> {
        c.is_ascii_alphanumeric().then(|| c.to_ascii_uppercase())
    }

    /// Digits keep their value; letters reduce to their ASCII code mod 10.
    fn reduce(symbol: char) -> Option<u8> {
        match symbol {
            '0'..='9' => symbol.to_digit(10).map(|d| d as u8),
            'A'..='Z' => Some((symbol as u8) % 10),
            _ => None,
        }
    }

    fn random_symbol<R: Rng + ?Sized>(rng: &mut R) -> char {
        if rng.gen_bool(0.5) {
            char::from(b'A' + rng.gen_range(0..26u8))
        } else {
            random_digit(rng)
        }
    }
}
