//! Generation and validation of CNPJ registration identifiers.
//!
//! Two variants share one engine:
//! - numeric identifiers, 14 decimal digits;
//! - alphanumeric identifiers, whose 8-symbol root and 4-symbol branch may
//!   carry uppercase letters while the two check symbols stay decimal.
//!
//! Both are presented as `XX.XXX.XXX/XXXX-XX`. The check digits are a
//! weighted modulo-11 sum; letters enter the sum as their ASCII code mod 10.
//!
//! ## Quick Start
//!
//! ```rust
//! use cnpj_core::{EngineError, NumericIdEngine};
//!
//! let engine = NumericIdEngine::new();
//!
//! let main_id = engine.generate();
//! assert!(engine.validate(&main_id));
//!
//! let branches = engine.derive_branches(&main_id, 3)?;
//! assert_eq!(branches.len(), 3);
//!
//! let verdicts = engine.validate_branches(&main_id, &branches)?;
//! assert!(verdicts.iter().all(|v| v.is_valid));
//! # Ok::<(), EngineError>(())
//! ```
//!
//! ## Key Types
//!
//! - [`Engine`] - the four operations, generic over a [`SymbolPolicy`]
//! - [`Identifier`] - a parsed identifier split into root, branch and check pair
//! - [`ValidationError`] - why [`Engine::parse`] rejected an input
//! - [`EngineError`] - failures of branch derivation and branch validation

#![deny(missing_docs)]

/// Weighted modulo-11 check digits.
pub mod check_digit;
/// Generic engine and its numeric/alphanumeric instances.
pub mod engine;
/// Error types for branch operations.
pub mod errors;
/// Presentation mask helpers.
pub mod formatter;
/// Parsed identifier type and segment lengths.
pub mod identifier;
/// Per-variant symbol policies.
pub mod policy;
/// Validation errors for identifier parsing.
pub mod validation;

pub use engine::{AlphanumericIdEngine, BranchVerdict, Engine, NumericIdEngine};
pub use errors::EngineError;
pub use formatter::{format, unformat};
pub use identifier::Identifier;
pub use policy::{Alphanumeric, Numeric, SymbolPolicy};
pub use validation::ValidationError;
