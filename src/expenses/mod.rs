//! Expense list slice.

mod action;
mod model;
mod reducer;

pub use action::{add_expense, edit_expense, remove_expense};
pub use model::{new_expense_id, Expense, ExpenseUpdate, NewExpense};
pub use reducer::ExpensesReducer;
