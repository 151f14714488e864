use serde::Serialize;

use crate::mvi::State;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CounterState {
    pub count: i64,
}

impl State for CounterState {}
