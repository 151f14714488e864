use serde::{Deserialize, Serialize};

use crate::expenses::{Expense, ExpenseUpdate};
use crate::mvi::{Action, StoreError};

/// Every action understood by the expense tracker.
///
/// The JSON form is tagged on `type`, e.g.
/// `{"type": "REMOVE_EXPENSE", "id": "..."}`. Unknown tags decode to
/// [`AppAction::Noop`], which every slice passes through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppAction {
    AddExpense {
        #[serde(default)]
        expense: Expense,
    },
    RemoveExpense {
        id: String,
    },
    EditExpense {
        id: String,
        #[serde(default)]
        updates: ExpenseUpdate,
    },
    SetTextFilter {
        #[serde(default)]
        text: String,
    },
    SortByDate,
    SortByAmount,
    SetStartDate {
        #[serde(rename = "startDate", default)]
        start_date: Option<i64>,
    },
    SetEndDate {
        #[serde(rename = "endDate", default)]
        end_date: Option<i64>,
    },
    #[serde(other)]
    Noop,
}

impl Action for AppAction {
    fn noop() -> Self {
        AppAction::Noop
    }

    fn kind(&self) -> &'static str {
        match self {
            AppAction::AddExpense { .. } => "ADD_EXPENSE",
            AppAction::RemoveExpense { .. } => "REMOVE_EXPENSE",
            AppAction::EditExpense { .. } => "EDIT_EXPENSE",
            AppAction::SetTextFilter { .. } => "SET_TEXT_FILTER",
            AppAction::SortByDate => "SORT_BY_DATE",
            AppAction::SortByAmount => "SORT_BY_AMOUNT",
            AppAction::SetStartDate { .. } => "SET_START_DATE",
            AppAction::SetEndDate { .. } => "SET_END_DATE",
            AppAction::Noop => "NOOP",
        }
    }
}

impl AppAction {
    /// The expense carried by an `ADD_EXPENSE` action.
    pub fn added_expense(&self) -> Option<&Expense> {
        match self {
            AppAction::AddExpense { expense } => Some(expense),
            _ => None,
        }
    }

    /// Decode one action. A missing `type` or a bad payload is rejected.
    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Decode a JSON array of actions.
    pub fn list_from_json(json: &str) -> Result<Vec<Self>, StoreError> {
        Ok(serde_json::from_str(json)?)
    }
}
