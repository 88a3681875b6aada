//! Fetch lifecycle state.

use crate::mvi::State;

/// Where the single catalog request of an activation stands.
///
/// ```text
/// Idle ──activate──→ Loading ──ok──→ Success
///                       └────err───→ Error(message)
/// ```
/// `Success` and `Error` are terminal for the activation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchState {
    #[default]
    Idle,
    Loading,
    Success,
    /// Short, stable failure description (`"network error"`, ...).
    Error(String),
}

impl State for FetchState {}

impl FetchState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Success => "success",
            Self::Error(_) => "error",
        }
    }
}
