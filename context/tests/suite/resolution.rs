#![allow(clippy::expect_used, clippy::unwrap_used)]

use anyhow::Result;
use pretty_assertions::assert_eq;
use propel_context::CompositeContext;
use propel_context::ContextError;
use propel_context::ContextKind;
use propel_context::CopyDirection;
use propel_context::ExecutionContext;
use propel_context::direction_of;
use propel_context::select;

/// A staged transform: upload inputs, run in place on the device, download
/// results. All three legs resolve from the same two contexts.
#[test]
fn staged_transform_resolves_every_leg() -> Result<()> {
    let host = ExecutionContext::host();
    let device = ExecutionContext::device(0);

    let upload = select(&host, &device)?;
    assert_eq!(direction_of(upload)?, CopyDirection::HostToDevice);
    assert_eq!(direction_of(upload)?.cuda_memcpy_kind(), 1);

    assert_eq!(direction_of(&device)?, CopyDirection::DeviceToDevice);
    assert_eq!(direction_of(&device)?.cuda_memcpy_kind(), 3);

    let download = upload.rotate();
    assert_eq!(direction_of(download)?, CopyDirection::DeviceToHost);
    assert_eq!(direction_of(download)?.cuda_memcpy_kind(), 2);
    Ok(())
}

#[test]
fn selection_is_order_sensitive_end_to_end() -> Result<()> {
    let host = ExecutionContext::host();
    let device = ExecutionContext::device(2);

    let forward = select(&host, &device)?;
    let backward = select(&device, &host)?;

    assert_eq!(direction_of(forward)?, CopyDirection::HostToDevice);
    assert_eq!(direction_of(backward)?, CopyDirection::DeviceToHost);
    assert!(std::ptr::eq(forward.first(), backward.second()));
    assert!(std::ptr::eq(forward.second(), backward.first()));
    Ok(())
}

#[test]
fn rotation_round_trips_over_the_same_referents() -> Result<()> {
    let host = ExecutionContext::host();
    let device = ExecutionContext::device(1);

    let pair = select(&host, &device)?;
    let back = pair.rotate().rotate();

    assert_eq!(back, pair);
    assert!(std::ptr::eq(back.first(), pair.first()));
    assert!(std::ptr::eq(back.second(), pair.second()));
    Ok(())
}

#[test]
fn unsupported_shapes_report_what_was_seen() {
    let host = ExecutionContext::host();
    let other_host = ExecutionContext::host();
    let err = select(&host, &other_host).unwrap_err();
    assert_eq!(
        err,
        ContextError::UnsupportedPair {
            first: ContextKind::Host,
            second: ContextKind::Host,
        }
    );

    let err = direction_of(&host).unwrap_err();
    assert_eq!(
        err,
        ContextError::UnsupportedContext {
            kind: ContextKind::Host,
        }
    );

    // A pair built through the unchecked constructor fails at resolution
    // with the same error the checked path would have produced.
    let device = ExecutionContext::device(0);
    let other_device = ExecutionContext::device(1);
    let unchecked = CompositeContext::new(&device, &other_device);
    let err = direction_of(unchecked).unwrap_err();
    assert_eq!(
        err,
        ContextError::UnsupportedPair {
            first: ContextKind::Device,
            second: ContextKind::Device,
        }
    );
}
