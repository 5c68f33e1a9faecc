use thiserror::Error;

pub type Result<T> = std::result::Result<T, DeviceError>;

/// Failures while discovering CUDA devices or handing out device contexts.
#[derive(Debug, Error)]
pub enum DeviceError {
    /// The crate was built without the `cuda` feature.
    #[error("CUDA support not compiled (use --features cuda)")]
    NotCompiled,

    #[error("CUDA driver initialization failed: {cause}")]
    Init { cause: String },

    #[error("no CUDA device with ordinal {ordinal}: {count} devices visible")]
    UnknownDevice { ordinal: u32, count: usize },

    #[error("CUDA device {ordinal} query failed: {cause}")]
    Query { ordinal: u32, cause: String },

    #[error("invalid PROPEL_CUDA_DEVICE value {value:?}: expected a device ordinal")]
    InvalidOverride { value: String },
}
