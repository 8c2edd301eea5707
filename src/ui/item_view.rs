//! One carousel item: an image frame and an optional title badge.

use crate::item::Item;
use crate::ui::theme::{Theme, GLOBAL_BORDER, PLACEHOLDER_TEXT, TITLE_TEXT};
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageModel<'a> {
    pub src: Option<&'a str>,
    pub alt: Option<&'a str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemViewModel<'a> {
    pub id: &'a str,
    pub visible: bool,
    pub image: Option<ImageModel<'a>>,
    pub title: Option<&'a str>,
}

/// Builds the view of `item`. Missing image or title data is omitted.
pub fn item_view(item: &Item, is_selected: bool, show_title: bool) -> ItemViewModel<'_> {
    ItemViewModel {
        id: &item.id,
        visible: is_selected,
        image: item.data.main_image.as_ref().map(|_| ImageModel {
            src: item.image_url(),
            alt: item.image_alt(),
        }),
        title: item.title().filter(|_| show_title),
    }
}

/// Paints a visible item into `area`; the title goes on `title_row`.
pub fn render_item(
    model: &ItemViewModel<'_>,
    area: Rect,
    title_row: Option<Rect>,
    theme: &Theme,
    buf: &mut Buffer,
) {
    if !model.visible {
        return;
    }

    if let Some(image) = model.image {
        render_image(image, area, buf);
    }

    if let (Some(title), Some(row)) = (model.title, title_row) {
        render_title(title, row, theme, buf);
    }
}

fn render_image(image: ImageModel<'_>, area: Rect, buf: &mut Buffer) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let inner = block.inner(area);
    block.render(area, buf);

    let mut lines = Vec::new();
    if let Some(alt) = image.alt {
        lines.push(Line::from(Span::styled(
            alt,
            Style::default().fg(PLACEHOLDER_TEXT),
        )));
    }
    if let Some(src) = image.src {
        lines.push(Line::from(Span::styled(
            src,
            Style::default()
                .fg(PLACEHOLDER_TEXT)
                .add_modifier(Modifier::DIM),
        )));
    }
    if lines.is_empty() || inner.height == 0 {
        return;
    }

    let top = inner.height.saturating_sub(lines.len() as u16) / 2;
    let text_area = Rect {
        y: inner.y + top,
        height: inner.height - top,
        ..inner
    };
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .render(text_area, buf);
}

fn render_title(title: &str, row: Rect, theme: &Theme, buf: &mut Buffer) {
    if row.width == 0 || row.height == 0 {
        return;
    }
    let accent = Style::default().fg(theme.complementary).bg(theme.main);
    let text = Style::default()
        .fg(TITLE_TEXT)
        .bg(theme.main)
        .add_modifier(Modifier::BOLD);
    let badge = Line::from(vec![
        Span::styled("▏", accent),
        Span::styled(format!(" {title} "), text),
        Span::styled("▕", accent),
    ]);

    let width = (badge.width() as u16).min(row.width);
    let x = row.x + (row.width - width) / 2;
    buf.set_line(x, row.y, &badge, width);
}
