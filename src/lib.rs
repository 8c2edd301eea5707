//! A rotating carousel widget for ratatui.
//!
//! [`ui::carousel::Carousel`] owns the selection for one item list. Prev/next
//! controls and a stepper row emit [`ui::carousel::CarouselIntent`]s that a
//! pure reducer applies; the widget paints the selected item with its dots.

pub mod config;
pub mod item;
pub mod logging;
pub mod ui;
