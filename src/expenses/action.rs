//! Action creators for the expense list.

use crate::app::AppAction;
use crate::expenses::model::{new_expense_id, Expense, ExpenseUpdate, NewExpense};

/// `ADD_EXPENSE`. The identifier is generated here, so dispatching the same
/// action twice carries the same id both times.
pub fn add_expense(new: NewExpense) -> AppAction {
    let NewExpense {
        description,
        note,
        amount,
        created_at,
    } = new;

    AppAction::AddExpense {
        expense: Expense {
            id: new_expense_id(),
            description,
            note,
            amount,
            created_at,
        },
    }
}

/// `REMOVE_EXPENSE`.
pub fn remove_expense(id: impl Into<String>) -> AppAction {
    AppAction::RemoveExpense { id: id.into() }
}

/// `EDIT_EXPENSE`.
pub fn edit_expense(id: impl Into<String>, updates: ExpenseUpdate) -> AppAction {
    AppAction::EditExpense {
        id: id.into(),
        updates,
    }
}
