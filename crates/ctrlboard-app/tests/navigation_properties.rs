//! Property-based tests for the navigation state machine.
//!
//! Invariants must hold after every event of an arbitrary input sequence,
//! starting from the root menu.

use ctrlboard_app::{
    Action, HardwareEvent, MenuEntry, MenuId, MenuModel, PanelConfig, Rotation, StackOp,
    Transition,
};
use ctrlboard_harness::{
    InvariantRegistry, RecordingMenus, TestBench, block_on,
    strategies::{event_sequence, passive_event, rotation},
};
use proptest::prelude::*;

fn numbered_menu(len: usize) -> RecordingMenus {
    let entries = (0..len).map(|i| MenuEntry::text(format!("row {i}"))).collect();
    RecordingMenus::new(MenuModel::new(MenuId::ScsiId, entries))
}

proptest! {
    #[test]
    fn rotation_never_leaves_entries(len in 1usize..12, turns in prop::collection::vec(rotation(), 0..40)) {
        block_on(async {
            let mut bench = TestBench::with(numbered_menu(len), PanelConfig::default());

            for direction in turns {
                bench.send(HardwareEvent::EncoderRotate { direction }).await;
                let selection = bench.snapshot().selection;
                prop_assert!(selection < len, "selection {} with {} entries", selection, len);
            }
            Ok(())
        })?;
    }

    #[test]
    fn rotation_on_empty_menu_stays_at_zero(turns in prop::collection::vec(rotation(), 0..10)) {
        block_on(async {
            let mut bench = TestBench::with(numbered_menu(0), PanelConfig::default());

            for direction in turns {
                bench.send(HardwareEvent::EncoderRotate { direction }).await;
                prop_assert_eq!(bench.snapshot().selection, 0);
            }
            Ok(())
        })?;
    }

    #[test]
    fn rotation_matches_clamped_counter(len in 1usize..8, turns in prop::collection::vec(rotation(), 0..30)) {
        block_on(async {
            let mut bench = TestBench::with(numbered_menu(len), PanelConfig::default());
            let mut expected = 0usize;

            for direction in turns {
                expected = match direction {
                    Rotation::Clockwise => (expected + 1).min(len - 1),
                    Rotation::CounterClockwise => expected.saturating_sub(1),
                };
                bench.send(HardwareEvent::EncoderRotate { direction }).await;
                prop_assert_eq!(bench.snapshot().selection, expected);
            }
            Ok(())
        })?;
    }

    #[test]
    fn passive_events_never_navigate(events in prop::collection::vec(passive_event(), 1..20)) {
        block_on(async {
            let mut bench = TestBench::new();

            for event in events {
                let before = bench.snapshot();
                let is_press = matches!(event, HardwareEvent::ButtonPress { .. });
                bench.send(event).await;
                let after = bench.snapshot();

                prop_assert_eq!(after.menu, before.menu);
                prop_assert_eq!(after.stack_depth, before.stack_depth);
                if is_press {
                    prop_assert_eq!(after.selection, before.selection);
                }
            }
            prop_assert!(bench.menus().transitions().is_empty());
            Ok(())
        })?;
    }

    #[test]
    fn every_event_renders_exactly_once(events in event_sequence(40)) {
        block_on(async {
            let mut bench = TestBench::new();

            for (handled, event) in events.into_iter().enumerate() {
                bench.send(event).await;
                prop_assert_eq!(bench.menus().renders(), handled + 1);
            }
            Ok(())
        })?;
    }

    #[test]
    fn invariants_hold_for_any_sequence(events in event_sequence(60)) {
        block_on(async {
            let registry = InvariantRegistry::standard();
            let mut bench = TestBench::new();
            registry.assert_all(&bench.snapshot(), "at start");

            for (i, event) in events.into_iter().enumerate() {
                let context = format!("after event {i}: {event:?}");
                bench.send(event).await;
                registry.assert_all(&bench.snapshot(), &context);
            }
            Ok::<(), TestCaseError>(())
        })?;
    }

    #[test]
    fn forward_then_return_restores_menu(scsi_id in 0u8..8, via in prop_oneof![
        Just(Action::SlotAttachInsert),
        Just(Action::SlotInfo),
    ]) {
        block_on(async {
            let mut bench = TestBench::new();
            bench.select_index(usize::from(scsi_id)).await;
            let before = bench.snapshot();

            prop_assert!(bench.select_action(via).await);
            prop_assert_eq!(bench.router().stack().len(), before.stack_depth + 1);
            prop_assert!(bench.select_action(Action::Return).await);

            prop_assert_eq!(bench.snapshot(), before);
            Ok(())
        })?;
    }
}

#[test]
fn every_push_has_a_matching_return() {
    let pairs = [
        (Transition::OpenActionMenu, Transition::ActionMenuReturn),
        (Transition::SlotAttachInsert, Transition::ImagesReturn),
        (Transition::SlotInfo, Transition::DeviceInfoReturn),
    ];

    for (forward, back) in pairs {
        assert!(matches!(forward.stack_op(), StackOp::Push(_)), "{forward:?}");
        assert_eq!(back.stack_op(), StackOp::Pop, "{back:?}");
        assert_eq!(back.target().depth() + 1, forward.target().depth(), "{forward:?} / {back:?}");
    }
}
