use crate::ui::app::App;
use crate::ui::carousel::CarouselIntent;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

/// Action to take after processing an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Nothing changed on screen.
    None,
    /// Selection or hover changed; redraw.
    Redraw,
    Quit,
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> InputAction {
    if key.kind != KeyEventKind::Press {
        return InputAction::None;
    }

    if is_quit(key) {
        app.request_quit();
        return InputAction::Quit;
    }

    let len = app.carousel().items().len();
    let Some(intent) = key_intent(key, len) else {
        return InputAction::None;
    };
    if app.dispatch(intent) {
        InputAction::Redraw
    } else {
        InputAction::None
    }
}

/// Mouse events are resolved against `area`, the carousel's screen rect.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent, area: Rect) -> InputAction {
    let carousel = app.carousel_mut();
    let changed = match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => carousel.click(area, mouse.column, mouse.row),
        MouseEventKind::Moved => carousel.point(area, mouse.column, mouse.row),
        _ => false,
    };
    if changed {
        InputAction::Redraw
    } else {
        InputAction::None
    }
}

/// Keyboard shortcut for a carousel of `len` items.
pub fn key_intent(key: KeyEvent, len: usize) -> Option<CarouselIntent> {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => Some(CarouselIntent::MovePrev),
        KeyCode::Right | KeyCode::Char('l') => Some(CarouselIntent::MoveNext),
        KeyCode::Home => Some(CarouselIntent::Select(0)),
        KeyCode::End => len.checked_sub(1).map(CarouselIntent::Select),
        KeyCode::Char(ch @ '1'..='9') => ch
            .to_digit(10)
            .map(|digit| CarouselIntent::Select(digit as usize - 1)),
        _ => None,
    }
}

fn is_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
        || (matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&'c'))
            && key.modifiers.contains(KeyModifiers::CONTROL))
}
