//! Reducer composition.
//!
//! `combine_reducers!` builds a root state struct with one field per slice
//! and a root reducer that hands every action to every slice reducer,
//! each receiving only its own sub-state. Slices that do not handle an
//! action pass their sub-state through, which keeps unrelated actions
//! inert for them.

/// Compose independent slice reducers into a root reducer.
///
/// ```ignore
/// combine_reducers! {
///     #[derive(Debug, Clone, PartialEq, Default)]
///     pub struct RootState;
///     pub reducer RootReducer for RootAction {
///         left: LeftState => LeftReducer,
///         right: RightState => RightReducer,
///     }
/// }
/// ```
///
/// The generated state struct has exactly the listed slices as public
/// fields, plus a `SLICES` constant naming them in declaration order.
#[macro_export]
macro_rules! combine_reducers {
    (
        $(#[$meta:meta])*
        $vis:vis struct $state:ident;
        $reducer_vis:vis reducer $reducer:ident for $action:ty {
            $(
                $(#[$field_meta:meta])*
                $slice:ident : $slice_state:ty => $slice_reducer:ty
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $state {
            $(
                $(#[$field_meta])*
                pub $slice: $slice_state,
            )+
        }

        impl $state {
            /// Slice names, in declaration order.
            pub const SLICES: &'static [&'static str] = &[$(stringify!($slice)),+];
        }

        impl $crate::mvi::State for $state {}

        $reducer_vis struct $reducer;

        impl $crate::mvi::Reducer for $reducer {
            type State = $state;
            type Action = $action;

            fn reduce(state: Self::State, action: &Self::Action) -> Self::State {
                $state {
                    $(
                        $slice: <$slice_reducer as $crate::mvi::Reducer>::reduce(
                            state.$slice,
                            action,
                        ),
                    )+
                }
            }
        }
    };
}
