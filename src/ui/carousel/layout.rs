//! Geometry of a carousel inside its area, shared by painting and
//! hit-testing so both always agree.

use crate::ui::carousel::CarouselIntent;
use crate::ui::navigation::NavigationControl;
use crate::ui::stepper::step_intent;
use ratatui::layout::{Position, Rect};

const CONTROL_WIDTH: u16 = 3;
const CONTROL_HEIGHT: u16 = 3;
/// Dot plus one cell of margin on each side.
const STEP_SLOT: u16 = 3;
/// Rows between the stepper row and the title badge.
const TITLE_LIFT: u16 = 2;

/// What a screen position activates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Control(NavigationControl),
    Step(usize),
}

impl HitTarget {
    pub fn intent(self) -> CarouselIntent {
        match self {
            HitTarget::Control(control) => control.intent(),
            HitTarget::Step(position) => step_intent(position),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselLayout {
    /// Whole widget, border included.
    pub frame: Rect,
    /// Item image region.
    pub content: Rect,
    pub title: Option<Rect>,
    pub prev: Option<Rect>,
    pub next: Option<Rect>,
    /// One rect per item; zero-sized when the dot does not fit.
    pub steps: Vec<Rect>,
}

impl CarouselLayout {
    pub fn compute(area: Rect, len: usize) -> Self {
        let inner = Rect {
            x: area.x.saturating_add(1),
            y: area.y.saturating_add(1),
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        };

        if len == 0 || inner.width == 0 || inner.height == 0 {
            return Self {
                frame: area,
                content: inner,
                title: None,
                prev: None,
                next: None,
                steps: vec![Rect::default(); len],
            };
        }

        let stepper_y = inner.bottom() - 1;
        let content = Rect {
            height: inner.height - 1,
            ..inner
        };

        let title = (content.height > TITLE_LIFT).then(|| Rect {
            x: content.x,
            y: stepper_y - 1 - TITLE_LIFT,
            width: content.width,
            height: 1,
        });

        let (prev, next) = if inner.width > CONTROL_WIDTH * 2 && content.height > 0 {
            let height = CONTROL_HEIGHT.min(content.height);
            let y = content.y + (content.height - height) / 2;
            (
                Some(Rect::new(content.x, y, CONTROL_WIDTH, height)),
                Some(Rect::new(
                    content.right() - CONTROL_WIDTH,
                    y,
                    CONTROL_WIDTH,
                    height,
                )),
            )
        } else {
            (None, None)
        };

        Self {
            frame: area,
            content,
            title,
            prev,
            next,
            steps: step_rects(inner.x, inner.width, stepper_y, len),
        }
    }

    /// Target under a screen position, if any.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<HitTarget> {
        let position = Position::new(x, y);
        if self.prev.is_some_and(|rect| rect.contains(position)) {
            return Some(HitTarget::Control(NavigationControl::Prev));
        }
        if self.next.is_some_and(|rect| rect.contains(position)) {
            return Some(HitTarget::Control(NavigationControl::Next));
        }
        self.steps
            .iter()
            .position(|rect| rect.contains(position))
            .map(HitTarget::Step)
    }
}

/// Centers `len` dots on row `y`; slots shrink before dots are dropped.
fn step_rects(x: u16, width: u16, y: u16, len: usize) -> Vec<Rect> {
    let slot = [STEP_SLOT, 2, 1]
        .into_iter()
        .find(|slot| (*slot as usize) * len <= width as usize)
        .unwrap_or(1);
    let total = (slot as usize * len).min(width as usize) as u16;
    let start = x + (width - total) / 2;
    let margin = slot / 2;

    (0..len)
        .map(|position| {
            let offset = slot as usize * position + margin as usize;
            if offset < total as usize {
                Rect::new(start + offset as u16, y, 1, 1)
            } else {
                Rect::default()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_has_no_targets() {
        let layout = CarouselLayout::compute(Rect::new(0, 0, 40, 12), 0);
        assert!(layout.prev.is_none());
        assert!(layout.next.is_none());
        assert!(layout.steps.is_empty());
        assert_eq!(layout.hit_test(1, 5), None);
    }

    #[test]
    fn controls_sit_on_the_edges() {
        let layout = CarouselLayout::compute(Rect::new(0, 0, 40, 12), 3);
        let prev = layout.prev.unwrap();
        let next = layout.next.unwrap();
        assert_eq!(prev.x, 1);
        assert_eq!(next.right(), 39);
        assert_eq!(
            layout.hit_test(prev.x, prev.y),
            Some(HitTarget::Control(NavigationControl::Prev))
        );
        assert_eq!(
            layout.hit_test(next.x + 1, next.y + 1),
            Some(HitTarget::Control(NavigationControl::Next))
        );
    }

    #[test]
    fn steps_are_centered_on_the_bottom_row() {
        let layout = CarouselLayout::compute(Rect::new(0, 0, 40, 12), 3);
        // inner width 38, three slots of 3 -> start at 1 + (38 - 9) / 2 = 15
        let xs: Vec<u16> = layout.steps.iter().map(|r| r.x).collect();
        assert_eq!(xs, vec![16, 19, 22]);
        assert!(layout.steps.iter().all(|r| r.y == 10));
        assert_eq!(layout.hit_test(19, 10), Some(HitTarget::Step(1)));
        assert_eq!(layout.hit_test(18, 10), None);
    }

    #[test]
    fn crowded_steps_shrink_then_clip() {
        let area = Rect::new(0, 0, 7, 6);
        let layout = CarouselLayout::compute(area, 8);
        // inner width 5: slot 1, five dots fit, three clipped
        assert_eq!(layout.steps.len(), 8);
        assert_eq!(layout.steps.iter().filter(|r| r.area() > 0).count(), 5);
        assert_eq!(layout.hit_test(0, 0), None);
    }

    #[test]
    fn title_row_above_stepper() {
        let layout = CarouselLayout::compute(Rect::new(0, 0, 40, 12), 2);
        assert_eq!(layout.title.unwrap().y, 7);
    }

    #[test]
    fn hit_target_intents() {
        assert_eq!(
            HitTarget::Control(NavigationControl::Next).intent(),
            CarouselIntent::MoveNext
        );
        assert_eq!(HitTarget::Step(4).intent(), CarouselIntent::Select(4));
    }
}
