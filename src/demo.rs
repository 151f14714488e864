//! Scripted runs of the counter and expense tracker stores.

use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use crate::app::{visible_expenses, AppAction, AppState, AppStore};
use crate::counter::{decrement, increment, reset, CounterReducer, CounterState};
use crate::expenses::{add_expense, edit_expense, remove_expense, ExpenseUpdate, NewExpense};
use crate::filters::set_text_filter;
use crate::mvi::{Store, StoreError};
use crate::sink::ConsoleSink;

/// Increment, decrement and reset a counter, printing the state before and
/// after.
pub fn run_counter<W: Write>(sink: &ConsoleSink<W>) -> Result<CounterState> {
    let store: Store<CounterReducer> = Store::with_defaults();
    sink.emit(&*store.get_state())?;

    store.dispatch(increment())?;
    store.dispatch(decrement())?;
    store.dispatch(reset())?;

    let state = *store.get_state();
    sink.emit(&state)?;
    Ok(state)
}

/// What [`run_expenses`] prints once the script is done.
#[derive(Debug, Serialize)]
struct Summary<'a> {
    first_action: &'a AppAction,
    visible: Vec<&'a crate::expenses::Expense>,
}

/// Add two expenses, remove the first, edit the second and set a text
/// filter. The sink prints the state after every dispatch.
pub fn run_expenses<W: Write + 'static>(sink: &ConsoleSink<W>) -> Result<AppState> {
    let store = AppStore::with_defaults();
    let _printer = sink.attach(&store);

    let expense_one = store.dispatch(add_expense(NewExpense {
        description: "Rent".to_string(),
        amount: 100,
        ..Default::default()
    }))?;
    let expense_two = store.dispatch(add_expense(NewExpense {
        description: "Coffee".to_string(),
        amount: 200,
        ..Default::default()
    }))?;

    let rent = expense_one
        .added_expense()
        .context("ADD_EXPENSE action without an expense")?;
    let coffee = expense_two
        .added_expense()
        .context("ADD_EXPENSE action without an expense")?;
    info!(rent = %rent.id, coffee = %coffee.id, "expenses added");

    store.dispatch(remove_expense(rent.id.as_str()))?;
    store.dispatch(edit_expense(
        coffee.id.as_str(),
        ExpenseUpdate {
            amount: Some(500),
            ..Default::default()
        },
    ))?;
    store.dispatch(set_text_filter("rent"))?;

    let state = store.get_state();
    sink.emit(&Summary {
        first_action: &expense_one,
        visible: visible_expenses(&state.expenses, &state.filters),
    })?;

    Ok((*state).clone())
}

/// Dispatch `actions` in order to an expense store starting from `initial`
/// (or the reducer defaults). The sink prints the state after each one.
pub fn replay<W: Write + 'static>(
    actions: Vec<AppAction>,
    initial: Option<AppState>,
    sink: &ConsoleSink<W>,
) -> Result<AppState, StoreError> {
    let store = initial.map(AppStore::new).unwrap_or_default();
    let _printer = sink.attach(&store);

    let count = actions.len();
    for action in actions {
        store.dispatch(action)?;
    }
    info!(actions = count, "replay finished");

    let state = store.get_state();
    Ok((*state).clone())
}
