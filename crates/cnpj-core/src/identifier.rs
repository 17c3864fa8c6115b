use crate::formatter::{self, RAW_LEN};
use serde::{Serialize, Serializer};
use std::fmt;

/// Symbols in the registrant root.
pub const ROOT_LEN: usize = 8;
/// Symbols in the branch sequence.
pub const BRANCH_LEN: usize = 4;
/// Root plus branch, the window covered by the first check digit.
pub const BASE_LEN: usize = ROOT_LEN + BRANCH_LEN;

/// Branch sequence of the headquarters.
pub const HEADQUARTERS_BRANCH: &str = "0001";

/// A validated identifier held in its raw 14-symbol form.
///
/// Only produced by [`Engine::parse`](crate::Engine::parse), so the check
/// digits always agree with the root and branch.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identifier(String);

impl Identifier {
    pub(crate) fn from_raw(raw: String) -> Self {
        debug_assert_eq!(raw.len(), RAW_LEN);
        Self(raw)
    }

    /// Registrant root (first 8 symbols).
    pub fn root(&self) -> &str {
        &self.0[..ROOT_LEN]
    }

    /// Branch sequence (symbols 8 to 11).
    pub fn branch(&self) -> &str {
        &self.0[ROOT_LEN..BASE_LEN]
    }

    /// The two trailing check digits.
    pub fn check_pair(&self) -> &str {
        &self.0[BASE_LEN..]
    }

    /// Whether this is the headquarters identifier (branch `0001`).
    pub fn is_headquarters(&self) -> bool {
        self.branch() == HEADQUARTERS_BRANCH
    }

    /// The raw form, without punctuation.
    pub fn as_raw(&self) -> &str {
        &self.0
    }

    /// The masked form `XX.XXX.XXX/XXXX-XX`.
    pub fn formatted(&self) -> String {
        formatter::format(&self.0)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl Serialize for Identifier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.formatted())
    }
}
