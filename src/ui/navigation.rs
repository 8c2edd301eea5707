//! Previous/next controls.

use crate::ui::carousel::CarouselIntent;
use crate::ui::icons::{Icon, IconSet};
use crate::ui::theme::{CONTROL_HOVER, CONTROL_TEXT};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationControl {
    Prev,
    Next,
}

impl NavigationControl {
    /// The single intent fired per activation.
    pub fn intent(self) -> CarouselIntent {
        match self {
            NavigationControl::Prev => CarouselIntent::MovePrev,
            NavigationControl::Next => CarouselIntent::MoveNext,
        }
    }

    pub fn icon(self) -> Icon {
        match self {
            NavigationControl::Prev => Icon::ChevronLeft,
            NavigationControl::Next => Icon::ChevronRight,
        }
    }
}

pub fn render_control(
    control: NavigationControl,
    area: Rect,
    icons: &dyn IconSet,
    hovered: bool,
    buf: &mut Buffer,
) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let mut style = Style::default()
        .fg(CONTROL_TEXT)
        .add_modifier(Modifier::BOLD);
    if hovered {
        style = style.bg(CONTROL_HOVER);
        buf.set_style(area, style);
    }

    let x = area.x + area.width / 2;
    let y = area.y + area.height / 2;
    buf.set_string(x, y, icons.glyph(control.icon()), style);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::icons::AsciiIcons;

    #[test]
    fn controls_map_to_moves() {
        assert_eq!(NavigationControl::Prev.intent(), CarouselIntent::MovePrev);
        assert_eq!(NavigationControl::Next.intent(), CarouselIntent::MoveNext);
    }

    #[test]
    fn glyph_is_centered() {
        let area = Rect::new(0, 0, 3, 3);
        let mut buf = Buffer::empty(area);
        render_control(NavigationControl::Next, area, &AsciiIcons, false, &mut buf);
        assert_eq!(buf[(1, 1)].symbol(), ">");
    }

    #[test]
    fn hover_fills_background() {
        let area = Rect::new(0, 0, 3, 3);
        let mut buf = Buffer::empty(area);
        render_control(NavigationControl::Prev, area, &AsciiIcons, true, &mut buf);
        assert_eq!(buf[(0, 0)].bg, CONTROL_HOVER);
        assert_eq!(buf[(2, 2)].bg, CONTROL_HOVER);
    }
}
