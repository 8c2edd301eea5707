use crate::ui::theme::{FOOTER_TEXT, GLOBAL_BORDER};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const HINTS: &str = " ←/→: Move │ 1-9: Jump │ Click: Select │ q: Quit";

pub struct Footer {
    position: Option<(usize, usize)>,
    selected_id: Option<String>,
}

impl Footer {
    /// `position` is the 1-based selected position and the item count.
    pub fn new(position: Option<(usize, usize)>, selected_id: Option<&str>) -> Self {
        Self {
            position,
            selected_id: selected_id.map(str::to_string),
        }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let status = match (self.position, self.selected_id.as_deref()) {
            (Some((current, total)), Some(id)) => {
                format!("{id}  {current}/{total}  v{VERSION} ")
            }
            (Some((current, total)), None) => format!("{current}/{total}  v{VERSION} "),
            (None, _) => format!("no items  v{VERSION} "),
        };

        // Calculate padding using char count, not byte count (for Unicode)
        let hints_width = HINTS.chars().count();
        let status_width = status.chars().count();
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(status_width);

        let text_style = Style::default().fg(FOOTER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(HINTS, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(status, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
