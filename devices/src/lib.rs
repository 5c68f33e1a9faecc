//! CUDA device discovery for propel execution contexts.
//!
//! The resolution layer in `propel-context` treats execution contexts as
//! opaque values created by the call site; this crate is the call-site
//! provider for CUDA hardware. It enumerates visible devices and hands out
//! device-kind [`ExecutionContext`] values. It never allocates device memory
//! and never moves data.
//!
//! Built without the `cuda` feature (the default), a stub backend with the
//! same signatures reports no devices, so downstream code compiles and tests
//! run on machines without a CUDA toolchain.

use propel_context::ExecutionContext;
use std::fmt;
use tracing::debug;

mod error;
mod flags;

#[cfg(feature = "cuda")]
mod cuda_impl;
#[cfg(not(feature = "cuda"))]
mod stub;

#[cfg(feature = "cuda")]
use crate::cuda_impl as backend;
#[cfg(not(feature = "cuda"))]
use crate::stub as backend;

pub use crate::error::DeviceError;
pub use crate::error::Result;

/// Static properties of one visible CUDA device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceInfo {
    pub name: String,
    pub compute_capability: (i32, i32),
    pub total_memory: usize,
    pub multiprocessor_count: i32,
}

impl fmt::Display for DeviceInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (SM {}.{}, {}MB, {}SMs)",
            self.name,
            self.compute_capability.0,
            self.compute_capability.1,
            self.total_memory / 1024 / 1024,
            self.multiprocessor_count
        )
    }
}

/// Whether the CUDA driver is present and initializes.
pub fn is_available() -> bool {
    backend::is_available()
}

/// Number of visible CUDA devices, zero when the driver is absent.
pub fn device_count() -> usize {
    backend::device_count()
}

/// Queries the static properties of the device at `ordinal`.
pub fn device_info(ordinal: u32) -> Result<DeviceInfo> {
    backend::device_info(ordinal)
}

/// Hands out a device-kind execution context for the device at `ordinal`,
/// checking that the device exists first.
pub fn device_context(ordinal: u32) -> Result<ExecutionContext> {
    backend::device_context(ordinal)
}

/// Context for the default device: the `PROPEL_CUDA_DEVICE` environment
/// variable when set, device 0 otherwise.
pub fn default_device_context() -> Result<ExecutionContext> {
    let ordinal = match flags::configured_ordinal()? {
        Some(ordinal) => {
            debug!("PROPEL_CUDA_DEVICE overrides the default device to {ordinal}");
            ordinal
        }
        None => 0,
    };
    device_context(ordinal)
}
