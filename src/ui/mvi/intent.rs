//! Base trait for intents.

/// Marker trait for intent objects.
///
/// An intent is produced by exactly one user activation (a click on a
/// control, a key press) and is consumed by a reducer.
pub trait Intent: Send + 'static {}
