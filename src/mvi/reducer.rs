//! Reducer trait for the state container.

use super::action::Action;
use super::state::State;

/// Reducer transforms state based on actions.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, &Action) -> State
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: State;

    /// The action type this reducer handles.
    type Action: Action;

    /// Process an action and return the new state.
    ///
    /// Actions this reducer does not handle must return `state` as is.
    fn reduce(state: Self::State, action: &Self::Action) -> Self::State;

    /// The state produced by reducing the no-op action over the default state.
    fn init() -> Self::State {
        Self::reduce(<Self::State>::default(), &<Self::Action as Action>::noop())
    }
}
