//! Scenario tests for event routing.
//!
//! # Oracle Pattern
//!
//! Each test drives a [`TestBench`] through hardware events and ends with
//! oracle checks on:
//! - the active menu and context stack
//! - the messages shown to the operator
//! - the commands the device manager received

use std::time::Duration;

use ctrlboard_app::{
    Action, BUTTON_1, ButtonId, CommandKind, DeviceInfo, DeviceType, Direction, HardwareEvent,
    InfoObject, MenuEntry, MenuId, MenuModel, PanelConfig, ROTARY_BUTTON, RecordedCommand,
    ShutdownScope,
};
use ctrlboard_harness::{RecordingMenus, TestBench, standard_menus};

fn device(scsi_id: u8, device_type: DeviceType, image: &str) -> DeviceInfo {
    DeviceInfo { scsi_id, device_type, image: image.into() }
}

/// Bench sitting in the action menu for `scsi_id`.
async fn action_menu_for(scsi_id: u8) -> TestBench {
    let mut bench = TestBench::new();
    bench.select_index(usize::from(scsi_id)).await;
    assert_eq!(bench.snapshot().menu, MenuId::Action);
    bench
}

fn last_message(bench: &TestBench) -> Option<&str> {
    bench.menus().last_message().map(|(text, _)| text)
}

#[tokio::test]
async fn rotation_clamps_then_select_pushes_context() {
    let menus = RecordingMenus::new(MenuModel::new(MenuId::ScsiId, vec![
        MenuEntry::new("id0", InfoObject::scsi_id(0)),
        MenuEntry::new("id1", InfoObject::scsi_id(1)),
    ]))
    .with_menu(MenuId::Action, standard_menus().remove(&MenuId::Action).unwrap_or_default());
    let mut bench = TestBench::with(menus, PanelConfig::default());

    bench.send(HardwareEvent::clockwise()).await;
    assert_eq!(bench.snapshot().selection, 1);

    bench.send(HardwareEvent::clockwise()).await;
    assert_eq!(bench.snapshot().selection, 1);

    bench.press_select().await;

    assert_eq!(bench.snapshot().menu, MenuId::Action);
    assert_eq!(bench.router().stack().len(), 1);
    assert_eq!(bench.router().stack().peek(), Some(&InfoObject::scsi_id(1)));
    assert_eq!(bench.menus().transitions(), vec![(
        MenuId::Action,
        Some(&InfoObject::scsi_id(1)),
        Direction::Forward
    )]);
    assert_eq!(bench.menus().renders(), 3);
}

#[tokio::test]
async fn detach_removable_without_medium() {
    let mut bench = action_menu_for(3).await;
    bench.devices().bind(device(3, DeviceType::Scrm, ""));

    assert!(bench.select_action(Action::SlotDetachEject).await);

    assert!(bench.devices().commands().contains(&RecordedCommand::Detach { scsi_id: 3 }));
    assert_eq!(last_message(&bench), Some("ID 3 detached!"));
    assert!(bench.router().stack().is_empty());
    assert_eq!(bench.snapshot().menu, MenuId::ScsiId);
    assert!(bench.devices().slot(3).is_none());
}

#[tokio::test]
async fn failed_eject_still_returns_to_root() {
    let mut bench = action_menu_for(4).await;
    bench.devices().bind(device(4, DeviceType::Sccd, "install.iso"));
    bench.devices().fail_next(CommandKind::Eject);

    assert!(bench.select_action(Action::SlotDetachEject).await);

    assert!(bench.devices().commands().contains(&RecordedCommand::Eject { scsi_id: 4 }));
    assert_eq!(last_message(&bench), Some("Eject failed!"));
    assert_eq!(bench.snapshot().menu, MenuId::ScsiId);
    assert!(bench.router().stack().is_empty());
}

#[tokio::test]
async fn detach_fixed_disk_failure() {
    let mut bench = action_menu_for(0).await;
    bench.devices().bind(device(0, DeviceType::Schd, "system.hds"));
    bench.devices().fail_next(CommandKind::Detach);

    assert!(bench.select_action(Action::SlotDetachEject).await);

    assert_eq!(last_message(&bench), Some("Detach failed!"));
    assert!(bench.devices().slot(0).is_some());
}

#[tokio::test]
async fn detach_on_empty_slot_is_silent() {
    let mut bench = action_menu_for(6).await;

    assert!(bench.select_action(Action::SlotDetachEject).await);

    assert!(bench.menus().messages().is_empty());
    assert_eq!(bench.devices().commands(), vec![RecordedCommand::List { scsi_id: 6 }]);
    assert_eq!(bench.snapshot().menu, MenuId::ScsiId);
}

#[tokio::test]
async fn detach_unsupported_type_changes_nothing_on_device() {
    let mut bench = action_menu_for(5).await;
    bench.devices().bind(device(5, DeviceType::Sclp, ""));

    assert!(bench.select_action(Action::SlotDetachEject).await);

    assert!(bench.menus().messages().is_empty());
    assert_eq!(bench.devices().commands(), vec![RecordedCommand::List { scsi_id: 5 }]);
    assert!(bench.devices().slot(5).is_some());
    assert_eq!(bench.snapshot().menu, MenuId::ScsiId);
}

#[tokio::test]
async fn failed_profile_load_clears_stack() {
    let mut bench = action_menu_for(0).await;
    assert!(bench.select_action(Action::LoadProfile).await);
    assert_eq!(bench.snapshot().menu, MenuId::Profiles);
    assert_eq!(bench.router().stack().len(), 2);

    // "default" is not registered with the device manager
    bench.select_index(0).await;

    assert_eq!(
        bench.devices().commands().last(),
        Some(&RecordedCommand::ReadConfig { profile: "default".into() })
    );
    assert_eq!(last_message(&bench), Some("Loading failed!"));
    assert!(bench.router().stack().is_empty());
    assert_eq!(bench.snapshot().menu, MenuId::ScsiId);
}

#[tokio::test]
async fn profile_load_replaces_devices() {
    let mut bench = action_menu_for(0).await;
    bench.devices().add_profile("mac", vec![device(2, DeviceType::Schd, "mac.hds")]);
    assert!(bench.select_action(Action::LoadProfile).await);

    bench.select_index(1).await;

    assert_eq!(last_message(&bench), Some("Profile loaded!"));
    assert_eq!(bench.devices().slots(), vec![device(2, DeviceType::Schd, "mac.hds")]);
    assert_eq!(bench.snapshot().menu, MenuId::ScsiId);
}

#[tokio::test]
async fn shutdown_always_reports_and_keeps_stack() {
    let mut bench = action_menu_for(1).await;
    bench.devices().fail_next(CommandKind::Shutdown);

    assert!(bench.select_action(Action::Shutdown).await);

    let config = PanelConfig::default();
    assert_eq!(
        bench.menus().last_message(),
        Some(("Shutting down!", config.extended_message_duration))
    );
    assert_eq!(bench.snapshot().menu, MenuId::ScsiId);
    assert_eq!(bench.router().stack().len(), 1);
    assert_eq!(
        bench.devices().commands(),
        vec![RecordedCommand::Shutdown { scope: ShutdownScope::System }]
    );
}

#[tokio::test]
async fn attach_image_through_image_browser() {
    let mut bench = action_menu_for(2).await;
    assert!(bench.select_action(Action::SlotAttachInsert).await);
    assert_eq!(bench.snapshot().menu, MenuId::Images);
    assert_eq!(bench.snapshot().slot, Some(2));

    assert!(bench.select_action(Action::ImageAttachInsert).await);

    assert_eq!(last_message(&bench), Some("ID 2 attached!"));
    assert_eq!(bench.devices().slot(2), Some(device(2, DeviceType::Schd, "system.hds")));
    assert!(bench.router().stack().is_empty());
    assert_eq!(bench.snapshot().menu, MenuId::ScsiId);
}

#[tokio::test]
async fn attach_failure_message() {
    let mut bench = action_menu_for(2).await;
    bench.devices().bind(device(2, DeviceType::Schd, "other.hds"));
    assert!(bench.select_action(Action::SlotAttachInsert).await);

    assert!(bench.select_action(Action::ImageAttachInsert).await);

    assert_eq!(last_message(&bench), Some("Attach failed!"));
    assert_eq!(bench.snapshot().menu, MenuId::ScsiId);
}

#[tokio::test]
async fn returns_restore_previous_menus() {
    let mut bench = action_menu_for(2).await;

    assert!(bench.select_action(Action::SlotAttachInsert).await);
    assert!(bench.select_action(Action::Return).await);
    assert_eq!(bench.snapshot().menu, MenuId::Action);
    assert_eq!(bench.snapshot().slot, Some(2));
    assert_eq!(bench.router().stack().len(), 1);

    assert!(bench.select_action(Action::SlotInfo).await);
    assert_eq!(bench.snapshot().menu, MenuId::DeviceInfo);
    assert!(bench.select_action(Action::Return).await);
    assert_eq!(bench.snapshot().menu, MenuId::Action);
    assert_eq!(bench.snapshot().slot, Some(2));

    assert!(bench.select_action(Action::Return).await);
    assert_eq!(bench.snapshot().menu, MenuId::ScsiId);
    assert_eq!(bench.snapshot().slot, None);
    assert!(bench.router().stack().is_empty());

    let directions: Vec<_> = bench.menus().transitions().iter().map(|t| t.2).collect();
    assert_eq!(directions, vec![
        Direction::Forward,
        Direction::Forward,
        Direction::Back,
        Direction::Forward,
        Direction::Back,
        Direction::Back,
    ]);
}

#[tokio::test]
async fn unregistered_handler_is_ignored() {
    let entry = MenuEntry::new("broken", InfoObject::DeviceInfo { action: Action::Shutdown });
    let menus = RecordingMenus::new(MenuModel::new(MenuId::DeviceInfo, vec![entry]));
    let mut bench = TestBench::with(menus, PanelConfig::default());

    bench.press_select().await;

    assert!(bench.menus().transitions().is_empty());
    assert!(bench.menus().messages().is_empty());
    assert_eq!(bench.menus().renders(), 1);
    assert_eq!(bench.snapshot().menu, MenuId::DeviceInfo);
    assert!(bench.devices().commands().is_empty());
}

#[tokio::test]
async fn return_with_empty_stack_is_ignored() {
    let entry = MenuEntry::new("Return", InfoObject::action_menu(Action::Return));
    let menus = RecordingMenus::new(MenuModel::new(MenuId::Action, vec![entry]));
    let mut bench = TestBench::with(menus, PanelConfig::default());

    bench.press_select().await;

    assert!(bench.menus().transitions().is_empty());
    assert_eq!(bench.snapshot().menu, MenuId::Action);
    assert_eq!(bench.menus().renders(), 1);
}

#[tokio::test]
async fn action_menu_without_slot_skips_command_but_navigates() {
    let entry = MenuEntry::new("Detach", InfoObject::action_menu(Action::SlotDetachEject));
    let menus = RecordingMenus::new(MenuModel::new(MenuId::Action, vec![entry]));
    let mut bench = TestBench::with(menus, PanelConfig::default());

    bench.press_select().await;

    assert!(bench.devices().commands().is_empty());
    assert!(bench.menus().messages().is_empty());
    assert_eq!(bench.snapshot().menu, MenuId::ScsiId);
}

#[tokio::test]
async fn informational_entry_does_nothing() {
    let menus = RecordingMenus::new(MenuModel::new(MenuId::DeviceInfo, vec![MenuEntry::text(
        "Type: SCHD",
    )]));
    let mut bench = TestBench::with(menus, PanelConfig::default());

    bench.press_select().await;

    assert_eq!(bench.menus().calls().len(), 1);
    assert_eq!(bench.menus().renders(), 1);
}

#[tokio::test]
async fn secondary_button_only_shows_message() {
    let mut bench = TestBench::new();
    bench.send(HardwareEvent::clockwise()).await;

    bench.send(HardwareEvent::press(BUTTON_1)).await;

    assert_eq!(
        bench.menus().last_message(),
        Some(("button_1 pressed!", Duration::from_millis(1500)))
    );
    assert_eq!(bench.snapshot().selection, 1);
    assert_eq!(bench.snapshot().menu, MenuId::ScsiId);
    assert!(bench.menus().transitions().is_empty());
}

#[tokio::test]
async fn select_control_is_configurable() {
    let config = PanelConfig { select_button: ButtonId::new(BUTTON_1), ..PanelConfig::default() };
    let mut bench = TestBench::with(RecordingMenus::standard(), config);

    bench.send(HardwareEvent::press(ROTARY_BUTTON)).await;
    assert_eq!(bench.menus().messages(), vec!["rotary_button pressed!"]);
    assert_eq!(bench.snapshot().menu, MenuId::ScsiId);

    bench.send(HardwareEvent::press(BUTTON_1)).await;
    assert_eq!(bench.snapshot().menu, MenuId::Action);
}

#[tokio::test]
async fn dispatch_reports_navigation_errors() {
    let mut bench = TestBench::new();

    let result = bench.router_mut().dispatch(&InfoObject::action_menu(Action::Return)).await;

    assert_eq!(result, Err(ctrlboard_app::NavigationError::EmptyContextStack));
    assert_eq!(bench.snapshot().menu, MenuId::ScsiId);
}
