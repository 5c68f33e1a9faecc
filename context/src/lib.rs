//! Execution-context resolution for transfer-aware dispatch.
//!
//! Call sites that span a host context and a device context pair the two with
//! [`select`], then ask [`direction_of`] which way the implied memory
//! transfer flows. The pair borrows both contexts and preserves argument
//! order; [`CompositeContext::rotate`] views the same two contexts in the
//! opposite roles for the reciprocal transfer. A bare device context resolves
//! to the degenerate in-place case without any pairing.
//!
//! ```
//! use propel_context::CopyDirection;
//! use propel_context::ExecutionContext;
//! use propel_context::direction_of;
//! use propel_context::select;
//!
//! # fn main() -> propel_context::Result<()> {
//! let host = ExecutionContext::host();
//! let device = ExecutionContext::device(0);
//!
//! let upload = select(&host, &device)?;
//! assert_eq!(direction_of(upload)?, CopyDirection::HostToDevice);
//! assert_eq!(direction_of(upload.rotate())?, CopyDirection::DeviceToHost);
//! assert_eq!(direction_of(&device)?, CopyDirection::DeviceToDevice);
//! # Ok(())
//! # }
//! ```

mod composite;
mod context;
mod direction;
mod error;

pub use crate::composite::CompositeContext;
pub use crate::composite::select;
pub use crate::context::ContextKind;
pub use crate::context::ExecutionContext;
pub use crate::direction::ContextView;
pub use crate::direction::CopyDirection;
pub use crate::direction::direction_of;
pub use crate::direction::is_device_to_device;
pub use crate::direction::is_device_to_host;
pub use crate::direction::is_host_to_device;
pub use crate::error::ContextError;
pub use crate::error::Result;
