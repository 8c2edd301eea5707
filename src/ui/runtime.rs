use crate::ui::app::App;
use crate::ui::events::{next_event, AppEvent};
use crate::ui::global_style::GlobalStyle;
use crate::ui::input::{handle_key, handle_mouse, InputAction};
use crate::ui::layout::carousel_area;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use ratatui::layout::Rect;
use std::io;

/// Runs the page until the user quits. Every event is applied before the
/// next frame is drawn.
pub fn run(mut app: App) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let style = GlobalStyle::current();

    loop {
        terminal.draw(|frame| draw(frame, &app, &style))?;
        if app.should_quit() {
            break;
        }

        let action = match next_event()? {
            Some(AppEvent::Key(key)) => handle_key(&mut app, key),
            Some(AppEvent::Mouse(mouse)) => {
                let size = terminal.size()?;
                let area = carousel_area(Rect::new(0, 0, size.width, size.height), &style);
                handle_mouse(&mut app, mouse, area)
            }
            Some(AppEvent::Resize(cols, rows)) => {
                tracing::debug!(cols, rows, "Terminal resized");
                InputAction::Redraw
            }
            None => InputAction::None,
        };

        if action == InputAction::Quit {
            break;
        }
    }

    drop(guard);
    Ok(())
}
