use crate::expenses::Expense;
use crate::filters::{FiltersState, SortBy};

/// Expenses matching `filters`, in the order it asks for.
///
/// An expense is kept when its `created_at` falls within the optional
/// bounds and its description contains the text filter, ignoring case.
/// Date order is newest first, amount order is largest first.
pub fn visible_expenses<'a>(
    expenses: &'a [Expense],
    filters: &FiltersState,
) -> Vec<&'a Expense> {
    let text = filters.text.to_lowercase();

    let mut visible: Vec<&Expense> = expenses
        .iter()
        .filter(|expense| {
            let after_start = filters
                .start_date
                .map_or(true, |start| expense.created_at >= start);
            let before_end = filters
                .end_date
                .map_or(true, |end| expense.created_at <= end);
            let text_match = expense.description.to_lowercase().contains(&text);
            after_start && before_end && text_match
        })
        .collect();

    match filters.sort_by {
        SortBy::Date => visible.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortBy::Amount => visible.sort_by(|a, b| b.amount.cmp(&a.amount)),
    }

    visible
}
