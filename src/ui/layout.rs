use crate::ui::global_style::GlobalStyle;
use ratatui::layout::Rect;

const FOOTER_HEIGHT: u16 = 3;

/// Splits the page into the carousel body and the footer.
pub fn layout_regions(area: Rect) -> (Rect, Rect) {
    let footer_height = FOOTER_HEIGHT.min(area.height);
    let body = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: area.height.saturating_sub(footer_height),
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    (body, footer)
}

/// Screen rect of the carousel for a terminal of `area` under `style`.
pub fn carousel_area(area: Rect, style: &GlobalStyle) -> Rect {
    layout_regions(style.page_area(area)).0
}
