//! Terminal menu renderer.
//!
//! [`PanelController`] implements [`MenuController`] on top of a ratatui
//! [`Terminal`]. Menu content comes from a [`MenuBuilder`]; messages carry a
//! deadline and disappear on the first tick after it passes.

use std::time::Duration;

use ctrlboard_app::{Direction, InfoObject, MenuController, MenuId, MenuModel};
use ratatui::{Terminal, backend::Backend};
use tokio::time::Instant;

use crate::{
    MenuBuilder,
    ui::{self, PanelView},
};

#[derive(Debug)]
struct Message {
    text: String,
    expires: Instant,
}

/// Renders the active menu to a terminal.
pub struct PanelController<B: Backend> {
    terminal: Terminal<B>,
    builder: MenuBuilder,
    active: MenuModel,
    message: Option<Message>,
    segue: Option<Direction>,
}

impl<B: Backend> PanelController<B> {
    /// Controller showing the SCSI id list.
    pub fn new(terminal: Terminal<B>, builder: MenuBuilder) -> Self {
        let active = builder.build(MenuId::ScsiId, None);
        Self { terminal, builder, active, message: None, segue: None }
    }

    /// The underlying terminal.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Text of the message on screen, if it has not expired.
    pub fn message(&self) -> Option<&str> {
        self.message
            .as_ref()
            .filter(|message| message.expires > Instant::now())
            .map(|message| message.text.as_str())
    }

    fn draw(&mut self) {
        let view = PanelView {
            menu: &self.active,
            message: self
                .message
                .as_ref()
                .filter(|message| message.expires > Instant::now())
                .map(|message| message.text.as_str()),
            segue: self.segue,
        };

        if let Err(e) = self.terminal.draw(|frame| ui::render(frame, &view)) {
            tracing::warn!(error = %e, "Failed to draw panel");
        }
    }
}

impl<B: Backend> MenuController for PanelController<B> {
    fn active_menu(&self) -> &MenuModel {
        &self.active
    }

    fn active_menu_mut(&mut self) -> &mut MenuModel {
        &mut self.active
    }

    fn request_render(&mut self) {
        self.draw();
    }

    fn show_message(&mut self, text: &str, duration: Duration) {
        tracing::debug!(text, ?duration, "Showing message");
        self.message = Some(Message { text: text.to_owned(), expires: Instant::now() + duration });
    }

    fn transition_to(&mut self, menu: MenuId, context: Option<InfoObject>, direction: Direction) {
        tracing::debug!(?menu, ?direction, "Menu transition");
        self.active = self.builder.build(menu, context.as_ref());
        self.segue = Some(direction);
    }

    fn tick(&mut self) {
        let expired = self.message.as_ref().is_some_and(|message| message.expires <= Instant::now());
        if expired {
            self.message = None;
            self.draw();
        }
    }
}
