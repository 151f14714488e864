//! Single-slice counter store.

mod action;
mod reducer;
mod state;

pub use action::{decrement, increment, reset, CounterAction};
pub use reducer::CounterReducer;
pub use state::CounterState;
