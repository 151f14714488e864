//! The expense tracker: expense list and filter slices composed into one
//! root reducer.

mod action;
mod selectors;

use serde::{Deserialize, Serialize};

use crate::expenses::{Expense, ExpensesReducer};
use crate::filters::{FiltersReducer, FiltersState};

pub use action::AppAction;
pub use selectors::visible_expenses;

crate::combine_reducers! {
    /// Root state of the expense tracker.
    #[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
    #[serde(default)]
    pub struct AppState;
    pub reducer AppReducer for AppAction {
        expenses: Vec<Expense> => ExpensesReducer,
        filters: FiltersState => FiltersReducer,
    }
}

/// Store running the composed expense tracker reducer.
pub type AppStore = crate::mvi::Store<AppReducer>;
