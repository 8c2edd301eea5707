use crate::ui::mvi::Intent;

/// One navigation or selection request, produced by a single activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselIntent {
    /// Previous item, wrapping from the first to the last.
    MovePrev,
    /// Next item, wrapping from the last to the first.
    MoveNext,
    /// Jump straight to a position.
    Select(usize),
}

impl Intent for CarouselIntent {}
