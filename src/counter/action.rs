use crate::mvi::Action;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CounterAction {
    Increment,
    Decrement,
    Reset,
    Noop,
}

impl Action for CounterAction {
    fn noop() -> Self {
        CounterAction::Noop
    }

    fn kind(&self) -> &'static str {
        match self {
            CounterAction::Increment => "INCREMENT",
            CounterAction::Decrement => "DECREMENT",
            CounterAction::Reset => "RESET",
            CounterAction::Noop => "NOOP",
        }
    }
}

pub fn increment() -> CounterAction {
    CounterAction::Increment
}

pub fn decrement() -> CounterAction {
    CounterAction::Decrement
}

pub fn reset() -> CounterAction {
    CounterAction::Reset
}
