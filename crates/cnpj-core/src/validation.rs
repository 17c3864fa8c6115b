use thiserror::Error;

/// Reasons an identifier fails to parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The normalized input does not have the required number of symbols.
    #[error("expected {expected} symbols, found {actual}")]
    Length {
        /// Required symbol count.
        expected: usize,
        /// Symbol count after normalization.
        actual: usize,
    },
    /// Every symbol is the same, which is never a valid identifier.
    #[error("all symbols are '{symbol}'")]
    RepeatedSymbol {
        /// The repeated symbol.
        symbol: char,
    },
    /// A check position holds something other than a decimal digit.
    #[error("check symbol '{symbol}' at position {position} is not a digit")]
    NonNumericCheckDigit {
        /// Zero-based position within the raw identifier.
        position: usize,
        /// Offending symbol.
        symbol: char,
    },
    /// A root or branch symbol cannot be reduced to a check value.
    #[error("symbol '{symbol}' at position {position} is not allowed")]
    UnsupportedSymbol {
        /// Zero-based position within the raw identifier.
        position: usize,
        /// Offending symbol.
        symbol: char,
    },
    /// The supplied check digits differ from the computed ones.
    #[error("check digits {found} do not match expected {expected}")]
    CheckDigitMismatch {
        /// Computed check digits.
        expected: String,
        /// Check digits present in the input.
        found: String,
    },
}
