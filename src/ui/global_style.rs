//! Page-wide style defaults, installed once at startup.
//!
//! Widgets never read this; the frame renderer paints it underneath them.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use std::sync::OnceLock;
use thiserror::Error;

static GLOBAL_STYLE: OnceLock<GlobalStyle> = OnceLock::new();

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GlobalStyleError {
    #[error("Global style is already installed")]
    AlreadyInstalled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlobalStyle {
    pub foreground: Color,
    pub background: Color,
    /// Blank cells kept around the page on every side.
    pub padding: u16,
}

impl Default for GlobalStyle {
    fn default() -> Self {
        Self {
            foreground: Color::Reset,
            background: Color::Reset,
            padding: 0,
        }
    }
}

impl GlobalStyle {
    /// Makes this the process-wide style. Only the first call succeeds.
    pub fn install(self) -> Result<(), GlobalStyleError> {
        GLOBAL_STYLE
            .set(self)
            .map_err(|_| GlobalStyleError::AlreadyInstalled)
    }

    /// The installed style, or the default when nothing was installed.
    pub fn current() -> GlobalStyle {
        GLOBAL_STYLE.get().copied().unwrap_or_default()
    }

    pub fn base_style(&self) -> Style {
        Style::default().fg(self.foreground).bg(self.background)
    }

    /// `area` shrunk by the page padding.
    pub fn page_area(&self, area: Rect) -> Rect {
        let pad = self.padding;
        Rect {
            x: area.x.saturating_add(pad),
            y: area.y.saturating_add(pad),
            width: area.width.saturating_sub(pad.saturating_mul(2)),
            height: area.height.saturating_sub(pad.saturating_mul(2)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_area_applies_padding() {
        let style = GlobalStyle {
            padding: 2,
            ..GlobalStyle::default()
        };
        assert_eq!(
            style.page_area(Rect::new(0, 0, 20, 10)),
            Rect::new(2, 2, 16, 6)
        );
        assert_eq!(style.page_area(Rect::new(0, 0, 3, 3)).width, 0);
    }

    #[test]
    fn install_happens_once() {
        let style = GlobalStyle {
            foreground: Color::White,
            background: Color::Black,
            padding: 1,
        };
        assert_eq!(style.install(), Ok(()));
        assert_eq!(
            GlobalStyle::default().install(),
            Err(GlobalStyleError::AlreadyInstalled)
        );
        assert_eq!(GlobalStyle::current(), style);
    }
}
