//! Unidirectional state primitives.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ ViewModel
//! ```
//!
//! A reducer is the single place a state value changes. Side effects
//! (network, storing the catalog) stay with the caller around the dispatch.

/// Marker for state values driven by a reducer.
pub trait State: Clone + PartialEq + Default + Send + 'static {}

/// Marker for events fed into a reducer.
pub trait Intent: Send + 'static {}

/// Pure transition function: `(State, Intent) -> State`.
pub trait Reducer {
    type State: State;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
