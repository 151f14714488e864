use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::mvi::State;

/// A recorded expense. `amount` is in cents, `created_at` in milliseconds
/// since the Unix epoch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    /// Generated when the expense is created, unless the input carries one.
    #[serde(default = "new_expense_id")]
    pub id: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub amount: u64,
    #[serde(default)]
    pub created_at: i64,
}

impl Default for Expense {
    /// Empty expense with a freshly generated id.
    fn default() -> Self {
        Self {
            id: new_expense_id(),
            description: String::new(),
            note: String::new(),
            amount: 0,
            created_at: 0,
        }
    }
}

impl Expense {
    /// Copy of `self` with the fields present in `updates` replaced.
    pub fn apply(&self, updates: &ExpenseUpdate) -> Expense {
        Expense {
            id: self.id.clone(),
            description: updates
                .description
                .clone()
                .unwrap_or_else(|| self.description.clone()),
            note: updates.note.clone().unwrap_or_else(|| self.note.clone()),
            amount: updates.amount.unwrap_or(self.amount),
            created_at: updates.created_at.unwrap_or(self.created_at),
        }
    }
}

impl State for Vec<Expense> {}

/// Fields accepted by [`add_expense`](crate::expenses::add_expense).
///
/// Anything left out falls back to its default: empty strings and zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewExpense {
    pub description: String,
    pub note: String,
    pub amount: u64,
    pub created_at: i64,
}

/// Partial update for an existing expense. `None` leaves a field as is;
/// the identifier cannot be edited.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
}

/// Fresh globally unique expense identifier.
pub fn new_expense_id() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rent() -> Expense {
        Expense {
            id: "e1".into(),
            description: "Rent".into(),
            note: "March".into(),
            amount: 100,
            created_at: 5,
        }
    }

    #[test]
    fn apply_replaces_only_listed_fields() {
        let updated = rent().apply(&ExpenseUpdate {
            amount: Some(500),
            ..Default::default()
        });
        assert_eq!(updated.amount, 500);
        assert_eq!(updated.description, "Rent");
        assert_eq!(updated.note, "March");
        assert_eq!(updated.created_at, 5);
        assert_eq!(updated.id, "e1");
    }

    #[test]
    fn empty_update_is_identity() {
        assert_eq!(rent().apply(&ExpenseUpdate::default()), rent());
    }

    #[test]
    fn decode_fills_missing_fields() {
        let expense: Expense =
            serde_json::from_str(r#"{"description":"Coffee","amount":200}"#).unwrap();
        assert_eq!(expense.description, "Coffee");
        assert_eq!(expense.amount, 200);
        assert_eq!(expense.note, "");
        assert_eq!(expense.created_at, 0);
        assert!(Uuid::parse_str(&expense.id).is_ok());
    }

    #[test]
    fn encodes_created_at_in_camel_case() {
        let json = serde_json::to_value(rent()).unwrap();
        assert_eq!(json["createdAt"], 5);
    }

    #[test]
    fn default_expense_gets_an_id() {
        let expense = Expense::default();
        assert!(Uuid::parse_str(&expense.id).is_ok());
        assert_eq!(expense.amount, 0);
        assert_ne!(expense.id, Expense::default().id);
    }

    #[test]
    fn ids_are_unique() {
        assert_ne!(new_expense_id(), new_expense_id());
    }
}
