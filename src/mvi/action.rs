//! Base trait for actions in the state container.

/// Marker trait for action objects.
///
/// Actions are closed enums describing an intent to change state.
/// Every action type carries a no-op variant: the store seeds its
/// initial state with it, and reducers must pass state through
/// unchanged when they receive it.
pub trait Action: Send + 'static {
    /// The action used to seed default state.
    fn noop() -> Self;

    /// The `type` tag of this action, e.g. `"ADD_EXPENSE"`.
    fn kind(&self) -> &'static str;
}
