pub mod app;
pub mod carousel;
pub mod events;
pub mod footer;
pub mod global_style;
pub mod icons;
pub mod input;
pub mod item_view;
pub mod layout;
pub mod mvi;
pub mod navigation;
pub mod render;
pub mod runtime;
pub mod stepper;
pub mod terminal_guard;
pub mod theme;
