use crate::catalog::{filter, CountryRecord};
use crate::fetch::FetchState;

/// Everything the presentation layer needs to draw the country list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewModel {
    /// Nothing requested yet.
    #[default]
    Idle,
    Loading,
    Error { message: String },
    /// Catalog loaded; `items` is the filtered subset, possibly empty.
    Ready { items: Vec<CountryRecord> },
}

impl ViewModel {
    /// Pure projection of the fetch state, catalog and search term.
    ///
    /// The catalog only matters in `Success`; a loading state wins over any
    /// catalog left from elsewhere.
    pub fn build(state: &FetchState, catalog: &[CountryRecord], term: &str) -> Self {
        match state {
            FetchState::Idle => ViewModel::Idle,
            FetchState::Loading => ViewModel::Loading,
            FetchState::Error(message) => ViewModel::Error {
                message: message.clone(),
            },
            FetchState::Success => ViewModel::Ready {
                items: filter(catalog, term),
            },
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ViewModel::Idle => "idle",
            ViewModel::Loading => "loading",
            ViewModel::Error { .. } => "error",
            ViewModel::Ready { .. } => "ready",
        }
    }

    /// Visible records; empty for every kind but `Ready`.
    pub fn items(&self) -> &[CountryRecord] {
        match self {
            ViewModel::Ready { items } => items,
            _ => &[],
        }
    }
}
