use crate::counter::action::CounterAction;
use crate::counter::state::CounterState;
use crate::mvi::Reducer;

/// Counts up and down by one, saturating at the `i64` bounds.
pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = CounterState;
    type Action = CounterAction;

    fn reduce(state: Self::State, action: &Self::Action) -> Self::State {
        match action {
            CounterAction::Increment => CounterState {
                count: state.count.saturating_add(1),
            },
            CounterAction::Decrement => CounterState {
                count: state.count.saturating_sub(1),
            },
            CounterAction::Reset => CounterState::default(),
            CounterAction::Noop => state,
        }
    }
}
