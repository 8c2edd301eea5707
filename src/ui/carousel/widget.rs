use crate::ui::carousel::layout::{CarouselLayout, HitTarget};
use crate::ui::carousel::view::CarouselView;
use crate::ui::icons::IconSet;
use crate::ui::item_view::render_item;
use crate::ui::navigation::{render_control, NavigationControl};
use crate::ui::stepper::render_step;
use crate::ui::theme::Theme;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Widget};

/// Paints a [`CarouselView`] with the page's theme and icons.
pub struct CarouselWidget<'a> {
    view: CarouselView<'a>,
    theme: &'a Theme,
    icons: &'a dyn IconSet,
    hover: Option<HitTarget>,
}

impl<'a> CarouselWidget<'a> {
    pub fn new(view: CarouselView<'a>, theme: &'a Theme, icons: &'a dyn IconSet) -> Self {
        Self {
            view,
            theme,
            icons,
            hover: None,
        }
    }

    pub fn hover(mut self, hover: Option<HitTarget>) -> Self {
        self.hover = hover;
        self
    }
}

impl Widget for CarouselWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = CarouselLayout::compute(area, self.view.items.len());

        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.complementary))
            .render(area, buf);

        if let Some(item) = self.view.visible_item() {
            render_item(item, layout.content, layout.title, self.theme, buf);
        }

        if self.view.controls {
            let controls = [
                (NavigationControl::Prev, layout.prev),
                (NavigationControl::Next, layout.next),
            ];
            for (control, rect) in controls {
                if let Some(rect) = rect {
                    let hovered = self.hover == Some(HitTarget::Control(control));
                    render_control(control, rect, self.icons, hovered, buf);
                }
            }
        }

        for (step, rect) in self.view.steps.iter().zip(&layout.steps) {
            let hovered = self.hover == Some(HitTarget::Step(step.position));
            render_step(step, *rect, self.theme, hovered, buf);
        }
    }
}
