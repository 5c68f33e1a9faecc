//! `cust`-backed discovery (Rust-CUDA driver bindings).

use crate::DeviceInfo;
use crate::error::DeviceError;
use crate::error::Result;
use cust::device::DeviceAttribute;
use cust::error::CudaError;
use cust::prelude::*;
use propel_context::ExecutionContext;
use tracing::debug;
use tracing::info;

fn init_driver() -> Result<()> {
    cust::init(CudaFlags::empty()).map_err(|e| DeviceError::Init {
        cause: e.to_string(),
    })
}

pub(crate) fn is_available() -> bool {
    cust::init(CudaFlags::empty()).is_ok()
}

pub(crate) fn device_count() -> usize {
    if init_driver().is_err() {
        return 0;
    }
    match Device::num_devices() {
        Ok(count) => count as usize,
        Err(_) => 0,
    }
}

pub(crate) fn device_info(ordinal: u32) -> Result<DeviceInfo> {
    init_driver()?;
    let device = device_at(ordinal)?;

    let name = device.name().map_err(|e| query_failed(ordinal, e))?;
    let total_memory = device
        .total_memory()
        .map_err(|e| query_failed(ordinal, e))?;
    let major = device
        .get_attribute(DeviceAttribute::ComputeCapabilityMajor)
        .map_err(|e| query_failed(ordinal, e))?;
    let minor = device
        .get_attribute(DeviceAttribute::ComputeCapabilityMinor)
        .map_err(|e| query_failed(ordinal, e))?;
    let multiprocessor_count = device
        .get_attribute(DeviceAttribute::MultiprocessorCount)
        .map_err(|e| query_failed(ordinal, e))?;

    let info = DeviceInfo {
        name,
        compute_capability: (major, minor),
        total_memory,
        multiprocessor_count,
    };
    debug!("probed CUDA device {ordinal}: {info}");
    Ok(info)
}

pub(crate) fn device_context(ordinal: u32) -> Result<ExecutionContext> {
    init_driver()?;
    device_at(ordinal)?;
    info!("handing out context for CUDA device {ordinal}");
    Ok(ExecutionContext::device(ordinal))
}

fn device_at(ordinal: u32) -> Result<Device> {
    let count = Device::num_devices().map_err(|e| query_failed(ordinal, e))? as usize;
    if ordinal as usize >= count {
        return Err(DeviceError::UnknownDevice { ordinal, count });
    }
    Device::get_device(ordinal).map_err(|e| query_failed(ordinal, e))
}

fn query_failed(ordinal: u32, source: CudaError) -> DeviceError {
    DeviceError::Query {
        ordinal,
        cause: source.to_string(),
    }
}
