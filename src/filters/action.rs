//! Action creators for the filter settings.

use crate::app::AppAction;

/// `SET_TEXT_FILTER`.
pub fn set_text_filter(text: impl Into<String>) -> AppAction {
    AppAction::SetTextFilter { text: text.into() }
}

/// `SORT_BY_DATE`.
pub fn sort_by_date() -> AppAction {
    AppAction::SortByDate
}

/// `SORT_BY_AMOUNT`.
pub fn sort_by_amount() -> AppAction {
    AppAction::SortByAmount
}

/// `SET_START_DATE`. `None` clears the bound.
pub fn set_start_date(start_date: Option<i64>) -> AppAction {
    AppAction::SetStartDate { start_date }
}

/// `SET_END_DATE`. `None` clears the bound.
pub fn set_end_date(end_date: Option<i64>) -> AppAction {
    AppAction::SetEndDate { end_date }
}
