use expensify::counter::{decrement, increment, reset, CounterAction, CounterReducer, CounterState};
use expensify::mvi::{Action, Reducer, Store};

#[test]
fn init_starts_at_zero() {
    assert_eq!(CounterReducer::init(), CounterState { count: 0 });
}

#[test]
fn increment_and_decrement_step_by_one() {
    let state = CounterReducer::reduce(CounterState::default(), &increment());
    assert_eq!(state.count, 1);
    let state = CounterReducer::reduce(state, &decrement());
    let state = CounterReducer::reduce(state, &decrement());
    assert_eq!(state.count, -1);
}

#[test]
fn reset_returns_to_zero() {
    let state = CounterReducer::reduce(CounterState { count: 42 }, &reset());
    assert_eq!(state.count, 0);
}

#[test]
fn noop_is_identity() {
    let state = CounterState { count: 3 };
    assert_eq!(CounterReducer::reduce(state, &CounterAction::noop()), state);
}

#[test]
fn kinds_match_action_tags() {
    assert_eq!(increment().kind(), "INCREMENT");
    assert_eq!(decrement().kind(), "DECREMENT");
    assert_eq!(reset().kind(), "RESET");
}

#[test]
fn increment_saturates_at_max() {
    let state = CounterReducer::reduce(CounterState { count: i64::MAX }, &increment());
    assert_eq!(state.count, i64::MAX);
}

#[test]
fn decrement_saturates_at_min() {
    let state = CounterReducer::reduce(CounterState { count: i64::MIN }, &decrement());
    assert_eq!(state.count, i64::MIN);
}

#[test]
fn store_at_max_keeps_state_on_increment() {
    let store: Store<CounterReducer> = Store::new(CounterState { count: i64::MAX });
    store.dispatch(increment()).unwrap();
    assert_eq!(store.get_state().count, i64::MAX);
    store.dispatch(decrement()).unwrap();
    assert_eq!(store.get_state().count, i64::MAX - 1);
}
