//! Subcommand implementations.

use clap::ValueEnum;
use thiserror::Error;

pub mod branches;
pub mod check_branches;
pub mod complete;
pub mod format;
pub mod generate;
pub mod validate;

/// Result type shared by every subcommand.
pub type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Identifier variant selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Variant {
    /// 14 decimal digits
    Numeric,
    /// Letters allowed in the root and branch
    Alphanumeric,
}

/// Failures reported by subcommands after their output is printed.
#[derive(Debug, Error)]
pub enum CommandError {
    /// `--strict` was given and some inputs did not validate.
    #[error("{invalid} of {total} identifiers are invalid")]
    InvalidIdentifiers {
        /// Number of invalid inputs.
        invalid: usize,
        /// Number of inputs checked.
        total: usize,
    },
    /// A branch list file could not be read.
    #[error("failed to read {path}: {source}")]
    ReadInput {
        /// Path given on the command line.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

/// Calls `$body` with `$engine` bound to the engine for `$variant`.
macro_rules! with_engine {
    ($variant:expr, |$engine:ident| $body:expr) => {
        match $variant {
            $crate::commands::Variant::Numeric => {
                let $engine = cnpj_core::NumericIdEngine::new();
                $body
            }
            $crate::commands::Variant::Alphanumeric => {
                let $engine = cnpj_core::AlphanumericIdEngine::new();
                $body
            }
        }
    };
}

pub(crate) use with_engine;
