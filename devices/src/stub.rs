//! No-hardware backend used when the `cuda` feature is off.
//!
//! Keeps the crate API identical across builds: discovery reports no devices
//! and context acquisition fails with [`DeviceError::NotCompiled`].

use crate::DeviceInfo;
use crate::error::DeviceError;
use crate::error::Result;
use propel_context::ExecutionContext;

pub(crate) fn is_available() -> bool {
    false
}

pub(crate) fn device_count() -> usize {
    0
}

pub(crate) fn device_info(_ordinal: u32) -> Result<DeviceInfo> {
    Err(DeviceError::NotCompiled)
}

pub(crate) fn device_context(_ordinal: u32) -> Result<ExecutionContext> {
    Err(DeviceError::NotCompiled)
}
