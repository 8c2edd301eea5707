//! Model-View-Intent primitives shared by the widgets.
//!
//! ```text
//! click/key ──→ Intent ──→ Reducer ──→ State ──→ View
//!     ↑                                           │
//!     └───────────────────────────────────────────┘
//! ```
//!
//! - **State**: value describing what the widget shows
//! - **Intent**: one discrete user interaction
//! - **Reducer**: pure `(State, Intent) -> State` transition

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::{reduce_all, Reducer};
pub use state::UiState;
