use crossterm::event::{self, Event, KeyEvent, MouseEvent};
use std::io;

pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
}

/// Blocks for the next terminal event.
///
/// Focus and paste events are of no interest to the page and map to `None`.
pub fn next_event() -> io::Result<Option<AppEvent>> {
    let event = match event::read()? {
        Event::Key(key) => Some(AppEvent::Key(key)),
        Event::Mouse(mouse) => Some(AppEvent::Mouse(mouse)),
        Event::Resize(cols, rows) => Some(AppEvent::Resize(cols, rows)),
        _ => None,
    };
    Ok(event)
}
