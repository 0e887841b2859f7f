//! Menu list
//!
//! The active menu's entries with the cursor row highlighted.

use ctrlboard_app::{Direction as Segue, InfoObject};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};

use super::PanelView;

const CURSOR: &str = ">";
const NO_CURSOR: &str = " ";

/// Render the menu list.
pub fn render(frame: &mut Frame, view: &PanelView<'_>, area: Rect) {
    let menu = view.menu;

    let items: Vec<ListItem> = menu
        .entries()
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let selected = index == menu.selection();
            let style = match (selected, entry.info.is_some()) {
                (true, _) => Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                (false, true) => Style::default(),
                (false, false) => Style::default().fg(Color::DarkGray),
            };
            let cursor = if selected { CURSOR } else { NO_CURSOR };

            ListItem::new(Line::from(vec![
                Span::raw(cursor),
                Span::raw(" "),
                Span::styled(entry.label.clone(), style),
            ]))
        })
        .collect();

    let arrow = match view.segue {
        Some(Segue::Forward) => "» ",
        Some(Segue::Back) => "« ",
        None => "",
    };
    let slot = match menu.context().and_then(InfoObject::slot) {
        Some(id) => format!(" (ID {id})"),
        None => String::new(),
    };
    let title = format!(" {arrow}{}{slot} ", menu.id().title());

    let block = Block::default().borders(Borders::ALL).title(title);
    let list = List::new(items).block(block);
    let mut state = ListState::default().with_selected(Some(menu.selection()));

    frame.render_stateful_widget(list, area, &mut state);
}
