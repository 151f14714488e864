use crate::app::AppAction;
use crate::filters::state::{FiltersState, SortBy};
use crate::mvi::Reducer;

pub struct FiltersReducer;

impl Reducer for FiltersReducer {
    type State = FiltersState;
    type Action = AppAction;

    fn reduce(state: Self::State, action: &Self::Action) -> Self::State {
        match action {
            AppAction::SetTextFilter { text } => FiltersState {
                text: text.clone(),
                ..state
            },
            AppAction::SortByDate => FiltersState {
                sort_by: SortBy::Date,
                ..state
            },
            AppAction::SortByAmount => FiltersState {
                sort_by: SortBy::Amount,
                ..state
            },
            AppAction::SetStartDate { start_date } => FiltersState {
                start_date: *start_date,
                ..state
            },
            AppAction::SetEndDate { end_date } => FiltersState {
                end_date: *end_date,
                ..state
            },
            AppAction::AddExpense { .. }
            | AppAction::RemoveExpense { .. }
            | AppAction::EditExpense { .. }
            | AppAction::Noop => state,
        }
    }
}
