//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Intent) -> State
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new state.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}

/// Applies intents one at a time, in order.
pub fn reduce_all<R, I>(state: R::State, intents: I) -> R::State
where
    R: Reducer,
    I: IntoIterator<Item = R::Intent>,
{
    intents.into_iter().fold(state, R::reduce)
}
