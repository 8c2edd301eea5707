use crate::ui::carousel::index::{coerce_index, DefaultSelected};
use crate::ui::mvi::UiState;

/// Selection state for one carousel instance.
///
/// `selected` is `Some(i)` with `i < len` whenever `len > 0`, and `None` for
/// an empty carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CarouselState {
    pub(super) selected: Option<usize>,
    pub(super) len: usize,
}

impl UiState for CarouselState {}

impl CarouselState {
    /// State for `len` items with the first one selected.
    pub fn new(len: usize) -> Self {
        Self {
            selected: (len > 0).then_some(0),
            len,
        }
    }

    /// State for `len` items seeded from a caller-supplied default.
    ///
    /// Unparsable or out-of-range defaults fall back to index 0.
    pub fn seeded(len: usize, default_selected: &DefaultSelected) -> Self {
        if len == 0 {
            return Self::default();
        }
        let index = coerce_index(default_selected, len).unwrap_or_else(|err| {
            tracing::debug!(raw = ?default_selected, error = %err, "Falling back to first item");
            0
        });
        Self {
            selected: Some(index),
            len,
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_selected(&self, position: usize) -> bool {
        self.selected == Some(position)
    }
}
