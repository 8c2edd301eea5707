//! Row of position dots; each reflects and selects one item.

use crate::ui::carousel::CarouselIntent;
use crate::ui::theme::{Theme, STEP_INACTIVE};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;

const DOT: &str = "●";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepModel {
    pub position: usize,
    pub active: bool,
}

/// Intent fired by activating the dot at `position`.
pub fn step_intent(position: usize) -> CarouselIntent {
    CarouselIntent::Select(position)
}

/// One step per item, in item order.
pub fn steps(len: usize, selected: Option<usize>) -> Vec<StepModel> {
    (0..len)
        .map(|position| StepModel {
            position,
            active: selected == Some(position),
        })
        .collect()
}

pub fn render_step(step: &StepModel, area: Rect, theme: &Theme, hovered: bool, buf: &mut Buffer) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let color = if step.active || hovered {
        theme.main
    } else {
        STEP_INACTIVE
    };
    buf.set_string(area.x, area.y, DOT, Style::default().fg(color));
}
