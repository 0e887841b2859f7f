//! Status bar
//!
//! Shows the active message, or key help when there is none.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::PanelView;

const HELP: &str = "↑/↓ rotate  Enter select  1/2 buttons  Esc quit";

/// Render the status bar.
pub fn render(frame: &mut Frame, view: &PanelView<'_>, area: Rect) {
    let line = match view.message {
        Some(text) => Line::from(vec![
            Span::raw(" "),
            Span::styled(text, Style::default().fg(Color::Black).add_modifier(Modifier::BOLD)),
        ])
        .style(Style::default().bg(Color::Yellow)),
        None => Line::from(vec![Span::raw(" "), Span::raw(HELP)])
            .style(Style::default().bg(Color::DarkGray).fg(Color::White)),
    };

    frame.render_widget(Paragraph::new(line), area);
}
