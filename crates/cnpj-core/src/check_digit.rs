//! Weighted modulo-11 check digit computation.
//!
//! The first check digit is computed over the 12 root+branch values, the
//! second over those 12 values followed by the first check digit. Each pass
//! has its own weight table; the 13-value table is not the 12-value table
//! with an extra weight prepended, position 0 changes from 5 to 6.

/// Weights applied to the 12 root+branch values.
pub const FIRST_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Weights applied to the 12 root+branch values plus the first check digit.
pub const SECOND_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Computes one check digit in `0..=9` for a window of reduced values.
///
/// Windows of length 12 use [`FIRST_WEIGHTS`]; any other length uses
/// [`SECOND_WEIGHTS`]. Values are expected in `0..=9`; callers reduce
/// symbols to values before calling this.
pub fn check_digit(values: &[u8]) -> u8 {
    let weights: &[u32] = if values.len() == FIRST_WEIGHTS.len() {
        &FIRST_WEIGHTS
    } else {
        &SECOND_WEIGHTS
    };

    let sum: u32 = values
        .iter()
        .zip(weights)
        .map(|(value, weight)| u32::from(*value) * weight)
        .sum();
    let remainder = sum % 11;

    if remainder < 2 {
        0
    } else {
        // remainder is in 2..=10, so the result fits in 1..=9
        (11 - remainder) as u8
    }
}

/// Computes both check digits for 12 reduced root+branch values.
pub fn check_pair(base: &[u8; 12]) -> [u8; 2] {
    let first = check_digit(base);

    let mut extended = [0u8; 13];
    extended[..12].copy_from_slice(base);
    extended[12] = first;
    let second = check_digit(&extended);

    [first, second]
}
