use crate::ui::carousel::intent::CarouselIntent;
use crate::ui::carousel::state::CarouselState;
use crate::ui::mvi::Reducer;

pub struct CarouselReducer;

impl Reducer for CarouselReducer {
    type State = CarouselState;
    type Intent = CarouselIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let Some(current) = state.selected else {
            return state;
        };
        let len = state.len;

        let selected = match intent {
            CarouselIntent::MovePrev => {
                if current == 0 {
                    len - 1
                } else {
                    current - 1
                }
            }
            CarouselIntent::MoveNext => {
                if current + 1 >= len {
                    0
                } else {
                    current + 1
                }
            }
            CarouselIntent::Select(index) if index < len => index,
            CarouselIntent::Select(index) => {
                tracing::debug!(index, len, "Ignoring selection past the last item");
                current
            }
        };

        CarouselState {
            selected: Some(selected),
            len,
        }
    }
}
