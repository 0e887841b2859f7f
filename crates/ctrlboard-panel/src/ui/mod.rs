//! UI rendering
//!
//! Rendering functions that turn panel state into terminal output using
//! ratatui widgets. All functions are pure (no I/O).

mod menu;
mod status;

use ctrlboard_app::{Direction as Segue, MenuModel};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

/// Everything a frame shows.
#[derive(Debug, Clone, Copy)]
pub struct PanelView<'a> {
    /// Active menu.
    pub menu: &'a MenuModel,
    /// Message overlay, if one is showing.
    pub message: Option<&'a str>,
    /// Direction of the last segue.
    pub segue: Option<Segue>,
}

/// Render the whole panel.
pub fn render(frame: &mut Frame, view: &PanelView<'_>) {
    const MENU_MIN_HEIGHT: u16 = 3;
    const STATUS_HEIGHT: u16 = 1;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(MENU_MIN_HEIGHT), Constraint::Length(STATUS_HEIGHT)])
        .split(frame.area());

    let [menu_area, status_area] = chunks.as_ref() else {
        return;
    };

    menu::render(frame, view, *menu_area);
    status::render(frame, view, *status_area);
}
