use ratatui::style::Color;

pub const MAIN_COLOR: Color = Color::Rgb(0xda, 0x77, 0x56);
pub const COMPLEMENTARY_COLOR: Color = Color::Rgb(0xf2, 0xc1, 0x8d);
pub const STEP_INACTIVE: Color = Color::Rgb(0xbb, 0xbb, 0xbb);
pub const CONTROL_TEXT: Color = Color::White;
pub const CONTROL_HOVER: Color = Color::Rgb(0x26, 0x26, 0x26);
pub const TITLE_TEXT: Color = Color::White;
pub const PLACEHOLDER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const FOOTER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);

/// Color tokens supplied by the page for selection emphasis and accents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Active stepper dot, title badge background.
    pub main: Color,
    /// Carousel border and title badge accent.
    pub complementary: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            main: MAIN_COLOR,
            complementary: COMPLEMENTARY_COLOR,
        }
    }
}
