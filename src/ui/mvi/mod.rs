//! Unidirectional state primitives for the UI.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! Side effects (HTTP requests, clipboard) never run inside a reducer. The
//! caller inspects the new state after a dispatch and performs them.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
