use crate::app::AppAction;
use crate::expenses::model::Expense;
use crate::mvi::Reducer;

pub struct ExpensesReducer;

impl Reducer for ExpensesReducer {
    type State = Vec<Expense>;
    type Action = AppAction;

    fn reduce(state: Self::State, action: &Self::Action) -> Self::State {
        match action {
            AppAction::AddExpense { expense } => {
                let mut expenses = state;
                expenses.push(expense.clone());
                expenses
            }
            AppAction::RemoveExpense { id } => {
                state.into_iter().filter(|expense| &expense.id != id).collect()
            }
            AppAction::EditExpense { id, updates } => state
                .into_iter()
                .map(|expense| {
                    if &expense.id == id {
                        expense.apply(updates)
                    } else {
                        expense
                    }
                })
                .collect(),
            AppAction::SetTextFilter { .. }
            | AppAction::SortByDate
            | AppAction::SortByAmount
            | AppAction::SetStartDate { .. }
            | AppAction::SetEndDate { .. }
            | AppAction::Noop => state,
        }
    }
}
