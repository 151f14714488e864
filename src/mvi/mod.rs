//! Unidirectional state container primitives.
//!
//! # Architecture
//!
//! ```text
//! Action ──→ Store::dispatch ──→ Reducer ──→ State ──→ Subscribers
//!    ↑                                                      │
//!    └──────────────────────────────────────────────────────┘
//! ```
//!
//! - **State**: Immutable snapshot owned by the store
//! - **Action**: Tagged intent to change state
//! - **Reducer**: Pure function that transforms state based on actions
//! - **Store**: Holds the current snapshot and notifies subscribers

mod action;
mod combine;
mod error;
mod reducer;
mod state;
mod store;
mod sync_store;

pub use action::Action;
pub use error::StoreError;
pub use reducer::Reducer;
pub use state::State;
pub use store::{Store, Subscription};
pub use sync_store::{SyncStore, SyncSubscription};
