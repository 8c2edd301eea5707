//! Base trait for widget state.

/// Marker trait for widget state objects.
///
/// States are plain values: cloned to derive new states, compared to detect
/// changes, and sufficient on their own to render the view.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
