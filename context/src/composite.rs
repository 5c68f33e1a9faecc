use crate::context::ContextKind;
use crate::context::ExecutionContext;
use crate::error::ContextError;
use crate::error::Result;

/// Ordered pair of borrowed execution contexts.
///
/// The pair is a cheap view: it owns nothing, copies nothing, and both
/// referents must outlive it. Order is significant and is preserved exactly
/// as given; `(host, device)` and `(device, host)` resolve to opposite copy
/// directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompositeContext<'a> {
    first: &'a ExecutionContext,
    second: &'a ExecutionContext,
}

impl<'a> CompositeContext<'a> {
    /// Pairs two contexts without checking their kinds.
    ///
    /// [`select`] is the checked entry point; a pair built here from two
    /// same-kind contexts is still rejected at resolution time.
    pub const fn new(first: &'a ExecutionContext, second: &'a ExecutionContext) -> Self {
        Self { first, second }
    }

    pub const fn first(&self) -> &'a ExecutionContext {
        self.first
    }

    pub const fn second(&self) -> &'a ExecutionContext {
        self.second
    }

    /// The reverse-order view over the same two contexts.
    ///
    /// Rotation swaps the roles, not the contexts: no new context is created
    /// and rotating twice yields a pair equal to the original.
    #[must_use]
    pub const fn rotate(self) -> Self {
        Self {
            first: self.second,
            second: self.first,
        }
    }
}

/// Builds the composite for one host-kind and one device-kind context,
/// preserving argument order.
///
/// Exactly the mixed-kind pairs are accepted. Same-kind pairs return
/// [`ContextError::UnsupportedPair`]; no partial pair is handed out.
pub const fn select<'a>(
    first: &'a ExecutionContext,
    second: &'a ExecutionContext,
) -> Result<CompositeContext<'a>> {
    match (first.kind(), second.kind()) {
        (ContextKind::Host, ContextKind::Device) | (ContextKind::Device, ContextKind::Host) => {
            Ok(CompositeContext::new(first, second))
        }
        (first, second) => Err(ContextError::UnsupportedPair { first, second }),
    }
}
