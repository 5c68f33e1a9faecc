use crate::composite::CompositeContext;
use crate::context::ContextKind;
use crate::context::ExecutionContext;
use crate::error::ContextError;
use crate::error::Result;
use serde::Deserialize;
use serde::Serialize;
use strum_macros::Display;

/// Direction of the memory transfer implied by a context shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum CopyDirection {
    HostToDevice,
    DeviceToHost,
    DeviceToDevice,
}

impl CopyDirection {
    /// Numeric value of the matching CUDA runtime `cudaMemcpyKind` constant,
    /// for handing off to raw copy primitives.
    pub const fn cuda_memcpy_kind(self) -> u32 {
        match self {
            Self::HostToDevice => 1,
            Self::DeviceToHost => 2,
            Self::DeviceToDevice => 3,
        }
    }
}

/// The two context shapes the resolver accepts: a bare borrowed context or a
/// composite pair. Resolution is a single exhaustive match over this enum and
/// the kinds inside it.
#[derive(Debug, Clone, Copy)]
pub enum ContextView<'a> {
    Single(&'a ExecutionContext),
    Composite(CompositeContext<'a>),
}

impl<'a> From<&'a ExecutionContext> for ContextView<'a> {
    fn from(context: &'a ExecutionContext) -> Self {
        Self::Single(context)
    }
}

impl<'a> From<CompositeContext<'a>> for ContextView<'a> {
    fn from(pair: CompositeContext<'a>) -> Self {
        Self::Composite(pair)
    }
}

/// Resolves the copy direction implied by a context shape.
///
/// A bare device context is the degenerate in-place case and resolves to
/// [`CopyDirection::DeviceToDevice`]. A bare host context implies no
/// device-involved transfer and is unsupported. Composite pairs resolve by
/// order: `(host, device)` to [`CopyDirection::HostToDevice`] and
/// `(device, host)` to [`CopyDirection::DeviceToHost`]; same-kind pairs are
/// unsupported. The mapping depends only on kinds and order, never on device
/// ordinals.
pub fn direction_of<'a>(context: impl Into<ContextView<'a>>) -> Result<CopyDirection> {
    resolve(context.into())
}

const fn resolve(view: ContextView<'_>) -> Result<CopyDirection> {
    match view {
        ContextView::Single(context) => match context.kind() {
            ContextKind::Device => Ok(CopyDirection::DeviceToDevice),
            ContextKind::Host => Err(ContextError::UnsupportedContext {
                kind: ContextKind::Host,
            }),
        },
        ContextView::Composite(pair) => match (pair.first().kind(), pair.second().kind()) {
            (ContextKind::Host, ContextKind::Device) => Ok(CopyDirection::HostToDevice),
            (ContextKind::Device, ContextKind::Host) => Ok(CopyDirection::DeviceToHost),
            (first, second) => Err(ContextError::UnsupportedPair { first, second }),
        },
    }
}

/// Whether the shape resolves to a host-to-device transfer.
///
/// Shapes with no direction at all re-raise the resolution error instead of
/// reading as `false`.
pub fn is_host_to_device<'a>(context: impl Into<ContextView<'a>>) -> Result<bool> {
    Ok(direction_of(context)? == CopyDirection::HostToDevice)
}

/// Whether the shape resolves to a device-to-host transfer.
pub fn is_device_to_host<'a>(context: impl Into<ContextView<'a>>) -> Result<bool> {
    Ok(direction_of(context)? == CopyDirection::DeviceToHost)
}

/// Whether the shape resolves to the in-place device-to-device case.
pub fn is_device_to_device<'a>(context: impl Into<ContextView<'a>>) -> Result<bool> {
    Ok(direction_of(context)? == CopyDirection::DeviceToDevice)
}
