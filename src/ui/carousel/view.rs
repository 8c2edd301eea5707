use crate::item::Item;
use crate::ui::carousel::state::CarouselState;
use crate::ui::item_view::{item_view, ItemViewModel};
use crate::ui::stepper::{steps, StepModel};

/// Everything the carousel shows for one state.
///
/// Every item is present; only the selected one is `visible`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselView<'a> {
    pub items: Vec<ItemViewModel<'a>>,
    pub steps: Vec<StepModel>,
    /// Whether the prev/next controls are shown.
    pub controls: bool,
}

impl<'a> CarouselView<'a> {
    pub fn build(items: &'a [Item], state: &CarouselState, show_title: bool) -> Self {
        let views = items
            .iter()
            .enumerate()
            .map(|(position, item)| item_view(item, state.is_selected(position), show_title))
            .collect();

        Self {
            items: views,
            steps: steps(items.len(), state.selected()),
            controls: !items.is_empty(),
        }
    }

    pub fn visible_item(&self) -> Option<&ItemViewModel<'a>> {
        self.items.iter().find(|item| item.visible)
    }
}
