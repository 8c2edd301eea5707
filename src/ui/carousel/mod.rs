//! The carousel: selection state machine, view model, layout and widget.

mod component;
mod index;
mod intent;
mod layout;
mod reducer;
mod state;
mod view;
mod widget;

pub use component::{Carousel, CarouselProps};
pub use index::{coerce_index, DefaultSelected, IndexError};
pub use intent::CarouselIntent;
pub use layout::{CarouselLayout, HitTarget};
pub use reducer::CarouselReducer;
pub use state::CarouselState;
pub use view::CarouselView;
pub use widget::CarouselWidget;
