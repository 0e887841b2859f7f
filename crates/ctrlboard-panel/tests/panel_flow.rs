//! End-to-end panel flows over a ratatui test backend.

use ctrlboard_app::{
    DeviceInfo, DeviceType, EventRouter, HardwareEvent, MemoryDeviceManager, MenuController,
    MenuId, PanelConfig, ROTARY_BUTTON, Runtime, event_channel,
};
use ctrlboard_panel::{MenuBuilder, PanelController, input};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend, buffer::Cell};

type Router = EventRouter<MemoryDeviceManager, PanelController<TestBackend>>;

fn router(devices: &MemoryDeviceManager) -> Router {
    let terminal = Terminal::new(TestBackend::new(60, 14)).expect("test terminal");
    let controller = PanelController::new(terminal, MenuBuilder::new(devices.clone()));
    EventRouter::new(devices.clone(), controller, PanelConfig::default())
}

fn screen(router: &Router) -> String {
    router.controller().terminal().backend().buffer().content().iter().map(Cell::symbol).collect()
}

#[tokio::test]
async fn attach_then_eject_updates_screen() {
    let devices = MemoryDeviceManager::new();
    devices.add_image("install.iso");
    let mut router = router(&devices);

    // id 0 -> Attach -> install.iso
    router.handle(HardwareEvent::press(ROTARY_BUTTON)).await;
    router.handle(HardwareEvent::clockwise()).await;
    router.handle(HardwareEvent::press(ROTARY_BUTTON)).await;
    assert_eq!(router.controller().active_menu().id(), MenuId::Images);
    router.handle(HardwareEvent::clockwise()).await;
    router.handle(HardwareEvent::press(ROTARY_BUTTON)).await;

    assert_eq!(devices.slot(0).map(|d| d.device_type), Some(DeviceType::Sccd));
    let shown = screen(&router);
    assert!(shown.contains("ID 0 attached!"), "{shown}");
    assert!(shown.contains("0 SCCD install.iso"), "{shown}");

    // id 0 -> Eject
    router.handle(HardwareEvent::press(ROTARY_BUTTON)).await;
    router.handle(HardwareEvent::clockwise()).await;
    router.handle(HardwareEvent::clockwise()).await;
    assert!(screen(&router).contains("Eject"));
    router.handle(HardwareEvent::press(ROTARY_BUTTON)).await;

    let shown = screen(&router);
    assert!(shown.contains("ID 0 ejected!"), "{shown}");
    assert_eq!(
        devices.slot(0),
        Some(DeviceInfo { scsi_id: 0, device_type: DeviceType::Sccd, image: String::new() })
    );
}

#[tokio::test]
async fn empty_profile_list_is_never_entered() {
    let devices = MemoryDeviceManager::new();

    // Every position of the action menu, rotation clamps past the end
    for position in 0..8 {
        let mut router = router(&devices);
        router.handle(HardwareEvent::press(ROTARY_BUTTON)).await;
        assert_eq!(router.controller().active_menu().id(), MenuId::Action);
        assert!(!screen(&router).contains("Load Profile"));

        for _ in 0..position {
            router.handle(HardwareEvent::clockwise()).await;
        }
        router.handle(HardwareEvent::press(ROTARY_BUTTON)).await;

        assert_ne!(router.controller().active_menu().id(), MenuId::Profiles, "position {position}");
    }
}

#[tokio::test]
async fn keyboard_session_runs_to_quit() {
    let devices = MemoryDeviceManager::new();
    devices.add_profile("default", Vec::new());
    let (publisher, subscription) = event_channel(8);
    let runtime = Runtime::new(router(&devices), subscription);

    let key = |code: KeyCode| -> std::io::Result<Event> {
        Ok(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    };
    let keys = futures::stream::iter(vec![
        key(KeyCode::Enter),
        key(KeyCode::Down),
        key(KeyCode::Down),
        key(KeyCode::Down),
        key(KeyCode::Down),
        key(KeyCode::Enter),
        key(KeyCode::Enter),
        key(KeyCode::Esc),
    ]);

    let (router, pumped) = tokio::join!(runtime.run(), input::pump(keys, publisher));

    assert!(pumped.is_ok());
    assert_eq!(router.controller().active_menu().id(), MenuId::ScsiId);
    assert_eq!(router.controller().message(), Some("Profile loaded!"));
    assert!(router.stack().is_empty());
}
