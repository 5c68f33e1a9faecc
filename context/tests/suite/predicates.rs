#![allow(clippy::expect_used, clippy::unwrap_used)]

use anyhow::Result;
use pretty_assertions::assert_eq;
use propel_context::CompositeContext;
use propel_context::ContextView;
use propel_context::CopyDirection;
use propel_context::ExecutionContext;
use propel_context::direction_of;
use propel_context::is_device_to_device;
use propel_context::is_device_to_host;
use propel_context::is_host_to_device;
use propel_context::select;

#[test]
fn exactly_one_predicate_holds_per_resolvable_shape() -> Result<()> {
    let host = ExecutionContext::host();
    let device = ExecutionContext::device(0);
    let upload = select(&host, &device)?;
    let download = select(&device, &host)?;

    let shapes = [
        (ContextView::from(upload), CopyDirection::HostToDevice),
        (ContextView::from(download), CopyDirection::DeviceToHost),
        (ContextView::from(&device), CopyDirection::DeviceToDevice),
    ];

    for (view, expected) in shapes {
        assert_eq!(direction_of(view)?, expected);

        let held = [
            is_host_to_device(view)?,
            is_device_to_host(view)?,
            is_device_to_device(view)?,
        ];
        assert_eq!(held.iter().filter(|&&h| h).count(), 1);

        let expected_slot = match expected {
            CopyDirection::HostToDevice => 0,
            CopyDirection::DeviceToHost => 1,
            CopyDirection::DeviceToDevice => 2,
        };
        assert!(held[expected_slot]);
    }
    Ok(())
}

#[test]
fn unresolvable_shapes_error_instead_of_reading_false() {
    let host = ExecutionContext::host();
    assert!(is_host_to_device(&host).is_err());
    assert!(is_device_to_host(&host).is_err());
    assert!(is_device_to_device(&host).is_err());

    let other_host = ExecutionContext::host();
    let pair = CompositeContext::new(&host, &other_host);
    assert!(is_host_to_device(pair).is_err());
    assert!(is_device_to_host(pair).is_err());
    assert!(is_device_to_device(pair).is_err());
}
