//! Presentation boundary: one search screen over one catalog activation.
//!
//! The session owns the fetcher and the search term and keeps the last built
//! [`ViewModel`]. Every mutating call rebuilds it and reports whether it
//! changed, so a front end only redraws when it has to.

use std::sync::Arc;

use crate::catalog::{CatalogSource, Normalizer};
use crate::fetch::{CatalogFetcher, FetchState};
use crate::view_model::ViewModel;

pub struct SearchSession<S: CatalogSource> {
    source: Arc<S>,
    normalizer: Normalizer,
    fetcher: CatalogFetcher<S>,
    search_term: String,
    view_model: ViewModel,
    torn_down: bool,
}

impl<S: CatalogSource> SearchSession<S> {
    pub fn new(source: Arc<S>, normalizer: Normalizer) -> Self {
        let fetcher = CatalogFetcher::new(Arc::clone(&source), normalizer.clone());
        Self {
            source,
            normalizer,
            fetcher,
            search_term: String::new(),
            view_model: ViewModel::default(),
            torn_down: false,
        }
    }

    pub fn view_model(&self) -> &ViewModel {
        &self.view_model
    }

    pub fn fetch_state(&self) -> &FetchState {
        self.fetcher.state()
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Number of records in the loaded catalog, before filtering.
    pub fn catalog_len(&self) -> usize {
        self.fetcher.catalog().len()
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Issue the activation's request. Repeated calls are no-ops.
    pub fn activate(&mut self) -> bool {
        self.fetcher.activate();
        self.refresh()
    }

    /// Start a fresh activation after a failed one.
    ///
    /// The previous fetcher (and its catalog) is discarded. Only allowed from
    /// the `Error` state of a live session.
    pub fn reactivate(&mut self) -> bool {
        if self.torn_down || !matches!(self.fetcher.state(), FetchState::Error(_)) {
            return false;
        }
        tracing::info!("Starting new catalog activation");
        self.fetcher = CatalogFetcher::new(Arc::clone(&self.source), self.normalizer.clone());
        self.fetcher.activate();
        self.refresh()
    }

    /// Replace the search term. Returns whether the view model changed.
    pub fn set_search_term(&mut self, term: impl Into<String>) -> bool {
        self.search_term = term.into();
        self.refresh()
    }

    /// Apply the fetch outcome if it has arrived. Never blocks.
    pub fn poll(&mut self) -> bool {
        if self.fetcher.poll() {
            self.refresh()
        } else {
            false
        }
    }

    /// Wait for the pending fetch outcome and apply it.
    pub async fn resolve(&mut self) -> bool {
        if self.fetcher.resolve().await {
            self.refresh()
        } else {
            false
        }
    }

    /// Tear the screen down. The view model is frozen from here on.
    pub fn teardown(&mut self) {
        self.fetcher.teardown();
        self.torn_down = true;
    }

    fn refresh(&mut self) -> bool {
        if self.torn_down {
            return false;
        }
        let next = ViewModel::build(
            self.fetcher.state(),
            self.fetcher.catalog(),
            &self.search_term,
        );
        if next == self.view_model {
            return false;
        }
        tracing::trace!(kind = next.kind(), items = next.items().len(), "View model changed");
        self.view_model = next;
        true
    }
}
