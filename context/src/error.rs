use crate::context::ContextKind;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ContextError>;

/// Context shapes the resolution layer refuses to interpret.
///
/// Both variants carry the kinds that were seen so callers can report what
/// the call site actually passed, but downstream handling only ever needs to
/// know that the shape was unsupported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContextError {
    /// Two contexts of the same kind never imply a transfer between distinct
    /// memory spaces, so no pair is formed and no direction is assigned.
    #[error("no copy direction between {first} and {second} execution contexts")]
    UnsupportedPair {
        first: ContextKind,
        second: ContextKind,
    },

    /// A bare context whose kind has no degenerate single-context direction.
    #[error("bare {kind} execution context has no copy direction")]
    UnsupportedContext { kind: ContextKind },
}
