use crate::mvi::Intent;

#[derive(Debug, Clone)]
pub enum FetchIntent {
    /// Activation started and the request was issued.
    Activate,

    /// Request resolved and the catalog was stored.
    Succeeded,

    /// Request failed. `message` is the short user-facing description.
    Failed { message: String },
}

impl Intent for FetchIntent {}
