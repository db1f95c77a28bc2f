//! Search state machine: keyword, page, and accumulated images in one value.

mod intent;
mod reducer;
mod state;

pub use intent::SearchIntent;
pub use reducer::SearchReducer;
pub use state::SearchState;
