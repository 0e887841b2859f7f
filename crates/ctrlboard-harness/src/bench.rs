//! Router wired to in-memory collaborators.

use std::future::Future;

use ctrlboard_app::{
    Action, EventRouter, HardwareEvent, MemoryDeviceManager, MenuController, PanelConfig,
    ROTARY_BUTTON,
};

use crate::{NavigationSnapshot, RecordingMenus, entry_index};

/// An [`EventRouter`] over a [`MemoryDeviceManager`] and [`RecordingMenus`].
///
/// The bench keeps its own handle to the device manager so tests can seed
/// devices and inspect recorded commands while the router owns the other.
pub struct TestBench {
    router: EventRouter<MemoryDeviceManager, RecordingMenus>,
    devices: MemoryDeviceManager,
}

impl Default for TestBench {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBench {
    /// Standard menus, default configuration, no devices.
    pub fn new() -> Self {
        Self::with(RecordingMenus::standard(), PanelConfig::default())
    }

    /// Custom menus and configuration.
    pub fn with(menus: RecordingMenus, config: PanelConfig) -> Self {
        let devices = MemoryDeviceManager::new();
        let router = EventRouter::new(devices.clone(), menus, config);
        Self { router, devices }
    }

    /// The router under test.
    pub fn router(&self) -> &EventRouter<MemoryDeviceManager, RecordingMenus> {
        &self.router
    }

    /// Mutable access to the router.
    pub fn router_mut(&mut self) -> &mut EventRouter<MemoryDeviceManager, RecordingMenus> {
        &mut self.router
    }

    /// Shared handle to the device manager.
    pub fn devices(&self) -> &MemoryDeviceManager {
        &self.devices
    }

    /// The recording renderer.
    pub fn menus(&self) -> &RecordingMenus {
        self.router.controller()
    }

    /// Current observable state.
    pub fn snapshot(&self) -> NavigationSnapshot {
        NavigationSnapshot::capture(&self.router)
    }

    /// Route one event.
    pub async fn send(&mut self, event: HardwareEvent) {
        self.router.handle(event).await;
    }

    /// Press the select control.
    pub async fn press_select(&mut self) {
        self.send(HardwareEvent::press(ROTARY_BUTTON)).await;
    }

    /// Put the cursor on `index` and press select.
    pub async fn select_index(&mut self, index: usize) {
        self.router.controller_mut().active_menu_mut().select(index);
        self.press_select().await;
    }

    /// Select the first entry of the active menu with `action`.
    ///
    /// Returns `false` without sending anything if no entry has it.
    pub async fn select_action(&mut self, action: Action) -> bool {
        let Some(index) = entry_index(self.router.controller().active_menu(), action) else {
            return false;
        };
        self.select_index(index).await;
        true
    }
}

/// Drive `future` to completion on a fresh current-thread runtime.
///
/// For property tests, which run synchronously.
///
/// # Panics
///
/// Panics if the runtime cannot be built.
#[allow(clippy::expect_used)]
pub fn block_on<F: Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .expect("failed to build test runtime")
        .block_on(future)
}
