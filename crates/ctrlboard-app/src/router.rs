//! Event router.
//!
//! [`EventRouter::handle`] is the single entry point for hardware input. It
//! owns the [`NavigationState`] and the [`DeviceActionAdapter`], so every
//! mutation of menus, selection and history happens on one task in event
//! order.
//!
//! # Event handling
//!
//! - Encoder rotation moves the active menu's cursor, clamped at both ends.
//! - The select button resolves the entry under the cursor to a
//!   [`Transition`], runs its device command and applies its segue.
//! - Any other button only shows `"<id> pressed!"`.
//!
//! A render is requested after every event, whether or not anything changed.

use std::time::Duration;

use crate::{
    ButtonId, ContextStack, DeviceActionAdapter, DeviceControl, HardwareEvent, InfoObject,
    MenuController, MenuId, NavigationError, NavigationState, NoticeDuration, Outcome,
    PanelConfig, Rotation, ScsiId, SkipReason, Transition,
};

/// Routes hardware events to navigation changes and device commands.
#[derive(Debug)]
pub struct EventRouter<D, M> {
    navigation: NavigationState<M>,
    adapter: DeviceActionAdapter<D>,
    config: PanelConfig,
}

impl<D: DeviceControl, M: MenuController> EventRouter<D, M> {
    /// Create a router over `device` and `controller`.
    ///
    /// Navigation starts at whatever menu `controller` shows, with an empty
    /// context stack.
    pub fn new(device: D, controller: M, config: PanelConfig) -> Self {
        let adapter = DeviceActionAdapter::new(device, config.command_timeout, config.shutdown_scope);
        Self { navigation: NavigationState::new(controller), adapter, config }
    }

    /// Navigation state.
    pub fn navigation(&self) -> &NavigationState<M> {
        &self.navigation
    }

    /// The renderer.
    pub fn controller(&self) -> &M {
        self.navigation.controller()
    }

    /// Mutable access to the renderer.
    pub fn controller_mut(&mut self) -> &mut M {
        self.navigation.controller_mut()
    }

    /// Back-navigation history.
    pub fn stack(&self) -> &ContextStack {
        self.navigation.stack()
    }

    /// The device manager.
    pub fn device(&self) -> &D {
        self.adapter.device()
    }

    /// Active configuration.
    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    /// Handle one hardware event.
    ///
    /// Never fails: unknown handlers and empty-stack pops are logged and
    /// leave the UI untouched, failed commands become messages.
    pub async fn handle(&mut self, event: HardwareEvent) {
        match event {
            HardwareEvent::ButtonPress { button } => self.on_button(&button).await,
            HardwareEvent::EncoderRotate { direction } => self.on_rotate(direction),
        }

        self.navigation.controller_mut().request_render();
    }

    fn on_rotate(&mut self, direction: Rotation) {
        let menu = self.navigation.controller_mut().active_menu_mut();
        let moved = menu.rotate(direction);
        tracing::trace!(
            step = direction.step(),
            selection = menu.selection(),
            moved,
            "Encoder rotated"
        );
    }

    async fn on_button(&mut self, button: &ButtonId) {
        if *button != self.config.select_button {
            let text = format!("{button} pressed!");
            let duration = self.config.message_duration;
            self.navigation.controller_mut().show_message(&text, duration);
            return;
        }

        let Some(info) = self.navigation.controller().active_menu().selected_info().cloned() else {
            tracing::debug!("Selected entry has no action");
            return;
        };

        if let Err(error) = self.dispatch(&info).await {
            tracing::warn!(%error, "Selection not handled");
        }
    }

    /// Run the transition registered for `info`.
    ///
    /// The device command (if any) runs first, then its message is shown,
    /// then the segue is applied. Returns the menu now on screen.
    ///
    /// # Errors
    ///
    /// - [`NavigationError::HandlerNotFound`] if no transition is registered
    /// - [`NavigationError::EmptyContextStack`] if a return found no history
    ///
    /// In both cases nothing was changed.
    pub async fn dispatch(&mut self, info: &InfoObject) -> Result<MenuId, NavigationError> {
        let key = info.key();
        let transition = Transition::lookup(key).ok_or(NavigationError::HandlerNotFound(key))?;
        tracing::debug!(handler = %key, ?transition, "Routing selection");

        if let Some(outcome) = self.run_command(transition, info).await {
            self.notify(&outcome);
        }

        self.navigation.apply(transition.segue(), info)
    }

    async fn run_command(&mut self, transition: Transition, info: &InfoObject) -> Option<Outcome> {
        let outcome = match (transition, info) {
            (Transition::SlotDetachEject, _) => match self.active_slot() {
                Some(scsi_id) => self.adapter.detach_eject(scsi_id).await,
                None => missing_slot(transition),
            },
            (Transition::ImageAttachInsert, InfoObject::Images { image: Some(image), .. }) => {
                match self.active_slot() {
                    Some(scsi_id) => self.adapter.attach_image(scsi_id, image).await,
                    None => missing_slot(transition),
                }
            },
            (Transition::LoadProfile, InfoObject::Profiles { name, .. }) => {
                self.adapter.load_profile(name).await
            },
            (Transition::Shutdown, _) => self.adapter.shutdown().await,
            _ => return None,
        };

        if let Outcome::Skipped(reason) = &outcome {
            tracing::debug!(?transition, ?reason, "No command issued");
        }
        Some(outcome)
    }

    /// SCSI id the active menu was entered with.
    fn active_slot(&self) -> Option<ScsiId> {
        self.navigation.controller().active_menu().context().and_then(InfoObject::slot)
    }

    fn notify(&mut self, outcome: &Outcome) {
        let Some(notice) = outcome.notice() else {
            return;
        };

        let duration = self.duration(notice.duration);
        self.navigation.controller_mut().show_message(&notice.text, duration);
    }

    fn duration(&self, class: NoticeDuration) -> Duration {
        match class {
            NoticeDuration::Normal => self.config.message_duration,
            NoticeDuration::Extended => self.config.extended_message_duration,
        }
    }
}

fn missing_slot(transition: Transition) -> Outcome {
    tracing::warn!(?transition, "Active menu carries no SCSI id");
    Outcome::Skipped(SkipReason::MissingScsiId)
}
