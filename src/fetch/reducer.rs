//! Reducer for the fetch lifecycle.

use crate::mvi::Reducer;

use super::intent::FetchIntent;
use super::state::FetchState;

/// Transitions outside the documented edges leave the state untouched.
pub struct FetchReducer;

impl Reducer for FetchReducer {
    type State = FetchState;
    type Intent = FetchIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FetchIntent::Activate => match state {
                FetchState::Idle => FetchState::Loading,
                other => other,
            },

            FetchIntent::Succeeded => match state {
                FetchState::Loading => FetchState::Success,
                other => other,
            },

            FetchIntent::Failed { message } => match state {
                FetchState::Loading => FetchState::Error(message),
                other => other,
            },
        }
    }
}
