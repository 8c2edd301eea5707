use crate::item::Item;
use crate::ui::carousel::index::DefaultSelected;
use crate::ui::carousel::intent::CarouselIntent;
use crate::ui::carousel::layout::{CarouselLayout, HitTarget};
use crate::ui::carousel::reducer::CarouselReducer;
use crate::ui::carousel::state::CarouselState;
use crate::ui::carousel::view::CarouselView;
use crate::ui::carousel::widget::CarouselWidget;
use crate::ui::icons::IconSet;
use crate::ui::mvi::Reducer;
use crate::ui::theme::Theme;
use ratatui::layout::Rect;

/// Construction options besides the item list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CarouselProps {
    pub default_selected: DefaultSelected,
    pub show_title: bool,
}

/// A mounted carousel: the items, their selection and the hover target.
#[derive(Debug, Clone)]
pub struct Carousel {
    items: Vec<Item>,
    show_title: bool,
    state: CarouselState,
    hover: Option<HitTarget>,
}

impl Carousel {
    pub fn new(items: Vec<Item>, props: CarouselProps) -> Self {
        let state = CarouselState::seeded(items.len(), &props.default_selected);
        Self {
            items,
            show_title: props.show_title,
            state,
            hover: None,
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn state(&self) -> CarouselState {
        self.state
    }

    pub fn show_title(&self) -> bool {
        self.show_title
    }

    pub fn hover(&self) -> Option<HitTarget> {
        self.hover
    }

    pub fn selected_item(&self) -> Option<&Item> {
        self.items.get(self.state.selected()?)
    }

    /// Applies one intent. Returns whether the selection moved.
    pub fn dispatch(&mut self, intent: CarouselIntent) -> bool {
        let next = CarouselReducer::reduce(self.state, intent);
        let changed = next != self.state;
        tracing::trace!(?intent, from = ?self.state.selected(), to = ?next.selected(), "Carousel intent");
        self.state = next;
        changed
    }

    /// Dispatches whatever sits under a click at (`x`, `y`) in `area`.
    pub fn click(&mut self, area: Rect, x: u16, y: u16) -> bool {
        match self.hit_test(area, x, y) {
            Some(target) => self.dispatch(target.intent()),
            None => false,
        }
    }

    /// Tracks the pointer. Returns whether the hover target changed.
    pub fn point(&mut self, area: Rect, x: u16, y: u16) -> bool {
        let target = self.hit_test(area, x, y);
        let changed = target != self.hover;
        self.hover = target;
        changed
    }

    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<HitTarget> {
        self.layout(area).hit_test(x, y)
    }

    pub fn layout(&self, area: Rect) -> CarouselLayout {
        CarouselLayout::compute(area, self.items.len())
    }

    pub fn view(&self) -> CarouselView<'_> {
        CarouselView::build(&self.items, &self.state, self.show_title)
    }

    pub fn widget<'a>(&'a self, theme: &'a Theme, icons: &'a dyn IconSet) -> CarouselWidget<'a> {
        CarouselWidget::new(self.view(), theme, icons).hover(self.hover)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> Vec<Item> {
        vec![Item::new("a"), Item::new("b"), Item::new("c")]
    }

    #[test]
    fn dispatch_reports_movement() {
        let mut carousel = Carousel::new(abc(), CarouselProps::default());
        assert!(carousel.dispatch(CarouselIntent::MoveNext));
        assert!(!carousel.dispatch(CarouselIntent::Select(1)));
        assert_eq!(carousel.selected_item().map(|i| i.id.as_str()), Some("b"));
    }

    #[test]
    fn click_on_next_control_moves() {
        let area = Rect::new(0, 0, 40, 12);
        let mut carousel = Carousel::new(abc(), CarouselProps::default());
        let next = carousel.layout(area).next.unwrap();
        assert!(carousel.click(area, next.x, next.y));
        assert_eq!(carousel.state().selected(), Some(1));
    }

    #[test]
    fn click_on_dot_selects_it() {
        let area = Rect::new(0, 0, 40, 12);
        let mut carousel = Carousel::new(abc(), CarouselProps::default());
        let dot = carousel.layout(area).steps[2];
        assert!(carousel.click(area, dot.x, dot.y));
        assert_eq!(carousel.state().selected(), Some(2));
    }

    #[test]
    fn click_elsewhere_is_ignored() {
        let area = Rect::new(0, 0, 40, 12);
        let mut carousel = Carousel::new(abc(), CarouselProps::default());
        assert!(!carousel.click(area, 20, 3));
        assert_eq!(carousel.state().selected(), Some(0));
    }

    #[test]
    fn pointer_tracks_hover_without_selecting() {
        let area = Rect::new(0, 0, 40, 12);
        let mut carousel = Carousel::new(abc(), CarouselProps::default());
        let dot = carousel.layout(area).steps[1];
        assert!(carousel.point(area, dot.x, dot.y));
        assert!(!carousel.point(area, dot.x, dot.y));
        assert_eq!(carousel.hover(), Some(HitTarget::Step(1)));
        assert_eq!(carousel.state().selected(), Some(0));
        assert!(carousel.point(area, 20, 3));
        assert_eq!(carousel.hover(), None);
    }
}
