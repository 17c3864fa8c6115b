//! Generation, validation and branch derivation, generic over the symbol policy.
//!
//! [`NumericIdEngine`] and [`AlphanumericIdEngine`] are the same [`Engine`]
//! with a different [`SymbolPolicy`]. Engines carry no state; every method is
//! a pure function of its arguments plus, for generation, a random source.

use std::collections::HashSet;
use std::marker::PhantomData;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::check_digit::check_pair;
use crate::errors::EngineError;
use crate::formatter::{self, unformat, RAW_LEN};
use crate::identifier::{Identifier, BASE_LEN, HEADQUARTERS_BRANCH, ROOT_LEN};
use crate::policy::{Alphanumeric, Numeric, SymbolPolicy};
use crate::validation::ValidationError;

/// Engine for decimal-only identifiers.
pub type NumericIdEngine = Engine<Numeric>;

/// Engine for identifiers with letters in the root and branch.
pub type AlphanumericIdEngine = Engine<Alphanumeric>;

/// Outcome of checking one branch identifier against a main identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchVerdict {
    /// 1-based position in the caller's list.
    pub position: usize,
    /// The branch identifier exactly as supplied.
    pub original_text: String,
    /// Whether it validates and shares the main identifier's root.
    pub is_valid: bool,
}

/// Identifier engine for one symbol policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Engine<P: SymbolPolicy> {
    policy: PhantomData<P>,
}

impl<P: SymbolPolicy> Engine<P> {
    /// Creates an engine. Engines are zero-sized; construction is free.
    pub const fn new() -> Self {
        Self {
            policy: PhantomData,
        }
    }

    /// Name of the variant this engine handles.
    pub fn variant(&self) -> &'static str {
        P::NAME
    }

    /// Largest count accepted by [`Engine::derive_branches`].
    pub fn max_branches(&self) -> u32 {
        P::MAX_BRANCHES
    }

    /// Generates a formatted headquarters identifier with a random root,
    /// using the thread-local generator.
    ///
    /// Uniqueness across calls is not guaranteed.
    pub fn generate(&self) -> String {
        self.generate_with(&mut rand::thread_rng())
    }

    /// Generates a formatted headquarters identifier drawing the root from `rng`.
    pub fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let mut base: String = (0..ROOT_LEN).map(|_| P::random_symbol(rng)).collect();
        base.push_str(HEADQUARTERS_BRANCH);

        let symbols = base_symbols(&base);
        match reduce_window::<P>(&symbols) {
            Ok(values) => formatter::format(&seal(&base, &values)),
            // Policies only draw symbols they can reduce.
            Err(_) => unreachable!("random symbol outside the {} alphabet", P::NAME),
        }
    }

    /// Parses `text` into an [`Identifier`], explaining any rejection.
    ///
    /// Punctuation and other characters outside the alphabet are ignored and
    /// letters are upper-cased before the checks run.
    pub fn parse(&self, text: &str) -> Result<Identifier, ValidationError> {
        let raw = unformat::<P>(text);
        let result = check_raw::<P>(&raw);
        if let Err(error) = &result {
            trace!(variant = P::NAME, input = text, %error, "identifier rejected");
        }
        result.map(|()| Identifier::from_raw(raw))
    }

    /// Returns true iff `text` is a valid identifier for this variant.
    ///
    /// Never fails; malformed input is simply invalid.
    pub fn validate(&self, text: &str) -> bool {
        self.parse(text).is_ok()
    }

    /// Computes the two check digits for a 12-symbol root+branch base.
    pub fn check_digits(&self, base: &str) -> Result<[u8; 2], ValidationError> {
        let raw = unformat::<P>(base);
        if raw.len() != BASE_LEN {
            return Err(ValidationError::Length {
                expected: BASE_LEN,
                actual: raw.len(),
            });
        }
        let values = reduce_window::<P>(&base_symbols(&raw))?;
        Ok(check_pair(&values))
    }

    /// Appends the check digits to a 12-symbol base and returns the
    /// formatted identifier.
    ///
    /// ```rust
    /// use cnpj_core::NumericIdEngine;
    ///
    /// let engine = NumericIdEngine::new();
    /// assert_eq!(engine.complete("11.222.333/0001")?, "11.222.333/0001-81");
    /// # Ok::<(), cnpj_core::ValidationError>(())
    /// ```
    pub fn complete(&self, base: &str) -> Result<String, ValidationError> {
        let raw = unformat::<P>(base);
        let digits = self.check_digits(&raw)?;
        let full = format!("{raw}{}{}", digits[0], digits[1]);
        Ok(formatter::format(&full))
    }

    /// Derives branch identifiers `0001..=count` from the root of `main_id`.
    ///
    /// Returns them formatted and in branch order. An identifier already
    /// produced by this call is skipped rather than replaced, so the result
    /// can only be shorter than `count`, never reordered.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidRootIdentifier`] if `main_id` does not validate,
    /// [`EngineError::BranchCountExceeded`] if `count` is over the variant's
    /// limit.
    pub fn derive_branches(&self, main_id: &str, count: u32) -> Result<Vec<String>, EngineError> {
        let root = self.main_root(main_id)?;
        if count > P::MAX_BRANCHES {
            return Err(EngineError::BranchCountExceeded {
                requested: count,
                limit: P::MAX_BRANCHES,
            });
        }

        let mut seen = HashSet::with_capacity(count as usize);
        let mut branches = Vec::with_capacity(count as usize);
        for number in 1..=count {
            let base = format!("{root}{number:04}");
            let values = reduce_window::<P>(&base_symbols(&base)).map_err(|_| {
                EngineError::InvalidRootIdentifier {
                    value: main_id.to_string(),
                }
            })?;
            let raw = seal(&base, &values);

            if !seen.insert(raw.clone()) {
                debug!(identifier = %raw, "skipping duplicate branch identifier");
                continue;
            }
            branches.push(formatter::format(&raw));
        }

        debug!(
            variant = P::NAME,
            root = %root,
            requested = count,
            produced = branches.len(),
            "derived branch identifiers"
        );
        Ok(branches)
    }

    /// Checks each branch identifier against the root of `main_id`.
    ///
    /// A branch is valid when it validates on its own and its 8-symbol root
    /// equals the main identifier's root. Verdicts come back in input order.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidRootIdentifier`] if `main_id` does not validate.
    pub fn validate_branches<S: AsRef<str>>(
        &self,
        main_id: &str,
        branch_texts: &[S],
    ) -> Result<Vec<BranchVerdict>, EngineError> {
        let root = self.main_root(main_id)?;

        let verdicts: Vec<BranchVerdict> = branch_texts
            .iter()
            .enumerate()
            .map(|(index, text)| {
                let text = text.as_ref();
                let is_valid = self
                    .parse(text)
                    .map(|branch| branch.root() == root)
                    .unwrap_or(false);
                BranchVerdict {
                    position: index + 1,
                    original_text: text.to_string(),
                    is_valid,
                }
            })
            .collect();

        debug!(
            variant = P::NAME,
            root = %root,
            checked = verdicts.len(),
            valid = verdicts.iter().filter(|v| v.is_valid).count(),
            "validated branch identifiers"
        );
        Ok(verdicts)
    }

    fn main_root(&self, main_id: &str) -> Result<String, EngineError> {
        self.parse(main_id)
            .map(|id| id.root().to_string())
            .map_err(|_| EngineError::InvalidRootIdentifier {
                value: main_id.to_string(),
            })
    }
}

fn base_symbols(base: &str) -> Vec<char> {
    base.chars().take(BASE_LEN).collect()
}

/// Reduces the 12 root+branch symbols to check values.
fn reduce_window<P: SymbolPolicy>(symbols: &[char]) -> Result<[u8; BASE_LEN], ValidationError> {
    if symbols.len() != BASE_LEN {
        return Err(ValidationError::Length {
            expected: BASE_LEN,
            actual: symbols.len(),
        });
    }
    let mut values = [0u8; BASE_LEN];
    for (position, (slot, symbol)) in values.iter_mut().zip(symbols).enumerate() {
        *slot = P::reduce(*symbol).ok_or(ValidationError::UnsupportedSymbol {
            position,
            symbol: *symbol,
        })?;
    }
    Ok(values)
}

/// Appends both check digits to a raw base.
fn seal(base: &str, values: &[u8; BASE_LEN]) -> String {
    let [first, second] = check_pair(values);
    format!("{base}{first}{second}")
}

/// Runs every rejection rule over a normalized identifier.
fn check_raw<P: SymbolPolicy>(raw: &str) -> Result<(), ValidationError> {
    let symbols: Vec<char> = raw.chars().collect();
    if symbols.len() != RAW_LEN {
        return Err(ValidationError::Length {
            expected: RAW_LEN,
            actual: symbols.len(),
        });
    }

    let first = symbols[0];
    if symbols.iter().all(|s| *s == first) {
        return Err(ValidationError::RepeatedSymbol { symbol: first });
    }

    let mut found = [0u8; 2];
    for (slot, position) in found.iter_mut().zip(BASE_LEN..RAW_LEN) {
        let symbol = symbols[position];
        *slot = symbol
            .to_digit(10)
            .map(|d| d as u8)
            .ok_or(ValidationError::NonNumericCheckDigit { position, symbol })?;
    }

    let values = reduce_window::<P>(&symbols[..BASE_LEN])?;
    let expected = check_pair(&values);
    if expected != found {
        return Err(ValidationError::CheckDigitMismatch {
            expected: format!("{}{}", expected[0], expected[1]),
            found: format!("{}{}", found[0], found[1]),
        });
    }
    Ok(())
}
