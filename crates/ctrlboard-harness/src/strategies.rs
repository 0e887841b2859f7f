//! Proptest strategies for hardware input.

use ctrlboard_app::{BUTTON_1, BUTTON_2, HardwareEvent, ROTARY_BUTTON, Rotation};
use proptest::prelude::*;

/// Either encoder direction.
pub fn rotation() -> impl Strategy<Value = Rotation> {
    prop_oneof![Just(Rotation::Clockwise), Just(Rotation::CounterClockwise)]
}

/// Presses of buttons other than the select control.
pub fn secondary_press() -> impl Strategy<Value = HardwareEvent> {
    prop_oneof![Just(BUTTON_1.to_owned()), Just(BUTTON_2.to_owned()), "[a-z]{1,8}_[0-9]"]
        .prop_filter("select control", |name| name.as_str() != ROTARY_BUTTON)
        .prop_map(HardwareEvent::press)
}

/// Events that never trigger a transition.
pub fn passive_event() -> impl Strategy<Value = HardwareEvent> {
    prop_oneof![
        rotation().prop_map(|direction| HardwareEvent::EncoderRotate { direction }),
        secondary_press(),
    ]
}

/// Any event the panel hardware can produce, rotation-heavy like real use.
pub fn hardware_event() -> impl Strategy<Value = HardwareEvent> {
    prop_oneof![
        3 => rotation().prop_map(|direction| HardwareEvent::EncoderRotate { direction }),
        2 => Just(HardwareEvent::press(ROTARY_BUTTON)),
        1 => prop_oneof![Just(BUTTON_1), Just(BUTTON_2)].prop_map(HardwareEvent::press),
    ]
}

/// A sequence of up to `max` events.
pub fn event_sequence(max: usize) -> impl Strategy<Value = Vec<HardwareEvent>> {
    prop::collection::vec(hardware_event(), 0..=max)
}
