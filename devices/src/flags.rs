use crate::error::DeviceError;
use crate::error::Result;
use env_flags::env_flags;

env_flags! {
    /// Ordinal of the device `default_device_context` should target.
    pub PROPEL_CUDA_DEVICE: Option<&str> = None;
}

/// Parsed `PROPEL_CUDA_DEVICE` override, `None` when the variable is unset.
pub(crate) fn configured_ordinal() -> Result<Option<u32>> {
    match *PROPEL_CUDA_DEVICE {
        None => Ok(None),
        Some(raw) => parse_ordinal(raw).map(Some),
    }
}

fn parse_ordinal(raw: &str) -> Result<u32> {
    raw.trim().parse().map_err(|_| DeviceError::InvalidOverride {
        value: raw.to_string(),
    })
}
