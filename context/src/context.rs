use serde::Deserialize;
use serde::Serialize;
use std::fmt;
use strum_macros::Display;

/// Where a unit of work executes: on the host CPU or on an accelerator
/// device. The resolution rules in this crate dispatch on kind alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ContextKind {
    Host,
    Device,
}

impl ContextKind {
    pub const fn is_host(self) -> bool {
        matches!(self, Self::Host)
    }

    pub const fn is_device(self) -> bool {
        matches!(self, Self::Device)
    }
}

/// Handle for an execution context, fixed to one [`ContextKind`] at creation.
///
/// Contexts are created by the call site that owns the underlying resources
/// (see `propel-devices` for CUDA device discovery) and are only borrowed by
/// the composition and resolution layers. The device ordinal is payload for
/// downstream copy primitives; it never influences resolution.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExecutionContext {
    place: Place,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Place {
    Host,
    Device { ordinal: u32 },
}

impl ExecutionContext {
    /// A host-kind context.
    pub const fn host() -> Self {
        Self { place: Place::Host }
    }

    /// A device-kind context tagged with the CUDA device ordinal it targets.
    pub const fn device(ordinal: u32) -> Self {
        Self {
            place: Place::Device { ordinal },
        }
    }

    pub const fn kind(&self) -> ContextKind {
        match self.place {
            Place::Host => ContextKind::Host,
            Place::Device { .. } => ContextKind::Device,
        }
    }

    /// Ordinal of the targeted device, `None` for host contexts.
    pub const fn device_ordinal(&self) -> Option<u32> {
        match self.place {
            Place::Host => None,
            Place::Device { ordinal } => Some(ordinal),
        }
    }
}

impl fmt::Display for ExecutionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.place {
            Place::Host => write!(f, "host"),
            Place::Device { ordinal } => write!(f, "device:{ordinal}"),
        }
    }
}
