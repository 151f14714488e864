use serde::{Deserialize, Serialize};

use crate::mvi::State;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    #[default]
    Date,
    Amount,
}

/// Filters applied when listing expenses. Dates are milliseconds since the
/// Unix epoch; `None` leaves that bound open.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FiltersState {
    pub text: String,
    pub sort_by: SortBy,
    pub start_date: Option<i64>,
    pub end_date: Option<i64>,
}

impl State for FiltersState {}
