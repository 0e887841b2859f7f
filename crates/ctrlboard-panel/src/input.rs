//! Keyboard stand-in for the panel hardware.
//!
//! Keys map onto the physical controls:
//!
//! | key | control |
//! |---|---|
//! | Up / Left | encoder counter-clockwise |
//! | Down / Right | encoder clockwise |
//! | Enter / Space | rotary button |
//! | `1` / `2` | discrete buttons |
//! | Esc / `q` | quit |

use std::io;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use ctrlboard_app::{BUTTON_1, BUTTON_2, EventPublisher, HardwareEvent, ROTARY_BUTTON};
use futures::{Stream, StreamExt};

use crate::PanelError;

/// What a key press means to the panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    /// Forward as hardware input.
    Publish(HardwareEvent),
    /// Stop the panel.
    Quit,
    /// Not bound.
    Ignore,
}

/// Translate a key event.
pub fn translate(key: &KeyEvent) -> KeyAction {
    if key.kind != KeyEventKind::Press {
        return KeyAction::Ignore;
    }

    match key.code {
        KeyCode::Up | KeyCode::Left => KeyAction::Publish(HardwareEvent::counter_clockwise()),
        KeyCode::Down | KeyCode::Right => KeyAction::Publish(HardwareEvent::clockwise()),
        KeyCode::Enter | KeyCode::Char(' ') => {
            KeyAction::Publish(HardwareEvent::press(ROTARY_BUTTON))
        },
        KeyCode::Char('1') => KeyAction::Publish(HardwareEvent::press(BUTTON_1)),
        KeyCode::Char('2') => KeyAction::Publish(HardwareEvent::press(BUTTON_2)),
        KeyCode::Esc | KeyCode::Char('q') => KeyAction::Quit,
        _ => KeyAction::Ignore,
    }
}

/// Forward terminal key presses to `publisher` until quit.
///
/// Returns when the user quits, the terminal stream ends, or the subscriber
/// is gone. The publisher is dropped on return, which ends the event loop.
pub async fn pump<S>(mut terminal_events: S, publisher: EventPublisher) -> Result<(), PanelError>
where
    S: Stream<Item = io::Result<Event>> + Unpin,
{
    while let Some(event) = terminal_events.next().await {
        let Event::Key(key) = event? else {
            continue;
        };

        match translate(&key) {
            KeyAction::Publish(event) => {
                if !publisher.publish(event).await {
                    tracing::debug!("Event loop gone, stopping input");
                    break;
                }
            },
            KeyAction::Quit => {
                tracing::info!("Quit requested");
                break;
            },
            KeyAction::Ignore => {},
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;
    use ctrlboard_app::event_channel;

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn keys_map_to_controls() {
        assert_eq!(translate(&key(KeyCode::Down)), KeyAction::Publish(HardwareEvent::clockwise()));
        assert_eq!(
            translate(&key(KeyCode::Up)),
            KeyAction::Publish(HardwareEvent::counter_clockwise())
        );
        assert_eq!(
            translate(&key(KeyCode::Enter)),
            KeyAction::Publish(HardwareEvent::press(ROTARY_BUTTON))
        );
        assert_eq!(translate(&key(KeyCode::Char('2'))), KeyAction::Publish(HardwareEvent::press(BUTTON_2)));
        assert_eq!(translate(&key(KeyCode::Esc)), KeyAction::Quit);
        assert_eq!(translate(&key(KeyCode::Char('x'))), KeyAction::Ignore);
    }

    #[test]
    fn releases_are_ignored() {
        let mut release = key(KeyCode::Enter);
        release.kind = KeyEventKind::Release;

        assert_eq!(translate(&release), KeyAction::Ignore);
    }

    #[tokio::test]
    async fn pump_forwards_until_quit() {
        let (publisher, mut subscription) = event_channel(8);
        let keys = futures::stream::iter(vec![
            Ok(Event::Key(key(KeyCode::Down))),
            Ok(Event::Resize(80, 24)),
            Ok(Event::Key(key(KeyCode::Enter))),
            Ok(Event::Key(key(KeyCode::Char('q')))),
            Ok(Event::Key(key(KeyCode::Char('1')))),
        ]);

        pump(keys, publisher).await.expect("pump");

        assert_eq!(subscription.recv().await, Some(HardwareEvent::clockwise()));
        assert_eq!(subscription.recv().await, Some(HardwareEvent::press(ROTARY_BUTTON)));
        assert_eq!(subscription.recv().await, None);
    }

    #[tokio::test]
    async fn pump_surfaces_terminal_errors() {
        let (publisher, _subscription) = event_channel(8);
        let keys = futures::stream::iter(vec![Err(io::Error::other("tty gone"))]);

        assert!(matches!(pump(keys, publisher).await, Err(PanelError::Io(_))));
    }
}
