//! Filter settings slice.

mod action;
mod reducer;
mod state;

pub use action::{set_end_date, set_start_date, set_text_filter, sort_by_amount, sort_by_date};
pub use reducer::FiltersReducer;
pub use state::{FiltersState, SortBy};
