use thiserror::Error;

/// Errors raised by branch derivation and branch validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The main identifier does not validate.
    #[error("invalid root identifier '{value}'")]
    InvalidRootIdentifier {
        /// The identifier as supplied by the caller.
        value: String,
    },
    /// More branches were requested than the variant allows.
    #[error("branch count {requested} exceeds the limit of {limit}")]
    BranchCountExceeded {
        /// Requested branch count.
        requested: u32,
        /// Maximum for the variant.
        limit: u32,
    },
}
