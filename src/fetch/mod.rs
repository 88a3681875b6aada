//! Catalog fetcher: one request per activation, driven through
//! [`FetchReducer`].
//!
//! The request runs on a tokio task and hands its outcome back over a
//! oneshot channel. The owner applies it with [`CatalogFetcher::poll`] or
//! [`CatalogFetcher::resolve`], so state only ever changes on the owner's
//! side. Teardown cancels the task and closes the channel; an outcome that
//! still arrives is discarded.

mod cancel;
mod intent;
mod reducer;
mod state;

pub use cancel::CancelHandle;
pub use intent::FetchIntent;
pub use reducer::FetchReducer;
pub use state::FetchState;

use std::sync::Arc;

use tokio::sync::oneshot;
use tokio::sync::oneshot::error::TryRecvError;

use crate::catalog::{CatalogSource, CountryRecord, FetchError, Normalizer, RawPayload};
use crate::mvi::Reducer;

type FetchOutcome = Result<RawPayload, FetchError>;

pub struct CatalogFetcher<S: CatalogSource> {
    source: Arc<S>,
    normalizer: Normalizer,
    state: FetchState,
    catalog: Vec<CountryRecord>,
    cancel: CancelHandle,
    pending: Option<oneshot::Receiver<FetchOutcome>>,
}

impl<S: CatalogSource> CatalogFetcher<S> {
    pub fn new(source: Arc<S>, normalizer: Normalizer) -> Self {
        Self {
            source,
            normalizer,
            state: FetchState::default(),
            catalog: Vec::new(),
            cancel: CancelHandle::new(),
            pending: None,
        }
    }

    pub fn state(&self) -> &FetchState {
        &self.state
    }

    /// Normalized catalog. Empty until the request succeeds.
    pub fn catalog(&self) -> &[CountryRecord] {
        &self.catalog
    }

    pub fn is_torn_down(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Start the activation's single request.
    ///
    /// Only acts from `Idle` on a live fetcher; any other call is a no-op.
    /// Must be called from within a tokio runtime. Returns whether a request
    /// was issued.
    pub fn activate(&mut self) -> bool {
        if self.is_torn_down() {
            tracing::debug!("Ignoring activate after teardown");
            return false;
        }
        if !self.state.is_idle() {
            tracing::debug!(state = self.state.label(), "Ignoring repeated activate");
            return false;
        }

        self.dispatch(FetchIntent::Activate);

        let (tx, rx) = oneshot::channel();
        let source = Arc::clone(&self.source);
        let cancel = self.cancel.clone();
        tracing::info!(source = %source.describe(), "Fetching catalog");

        tokio::spawn(async move {
            tokio::select! {
                _ = cancel.cancelled() => {
                    tracing::debug!("Catalog request abandoned on teardown");
                }
                outcome = source.fetch() => {
                    if tx.send(outcome).is_err() {
                        tracing::trace!("Catalog outcome dropped (fetcher gone)");
                    }
                }
            }
        });

        self.pending = Some(rx);
        true
    }

    /// Apply the outcome if it has arrived. Never blocks.
    ///
    /// Returns whether the fetch state changed.
    pub fn poll(&mut self) -> bool {
        let Some(rx) = self.pending.as_mut() else {
            return false;
        };

        match rx.try_recv() {
            Ok(outcome) => {
                self.pending = None;
                self.apply(outcome)
            }
            Err(TryRecvError::Empty) => false,
            Err(TryRecvError::Closed) => {
                self.pending = None;
                self.request_vanished()
            }
        }
    }

    /// Wait for the outcome and apply it.
    ///
    /// Returns whether the fetch state changed. Returns `false` right away
    /// when no request is pending.
    pub async fn resolve(&mut self) -> bool {
        let Some(rx) = self.pending.take() else {
            return false;
        };

        match rx.await {
            Ok(outcome) => self.apply(outcome),
            Err(_) => self.request_vanished(),
        }
    }

    /// End the activation. The in-flight request (if any) is abandoned and
    /// nothing it produces is applied.
    pub fn teardown(&mut self) {
        if self.cancel.cancel() {
            tracing::debug!(state = self.state.label(), "Catalog fetcher torn down");
        }
        if let Some(mut rx) = self.pending.take() {
            rx.close();
        }
    }

    fn apply(&mut self, outcome: FetchOutcome) -> bool {
        if self.is_torn_down() {
            tracing::debug!("Discarding catalog outcome after teardown");
            return false;
        }
        if !self.state.is_loading() {
            return false;
        }

        match outcome {
            Ok(payload) => {
                let catalog = self.normalizer.normalize_all(&payload);
                tracing::info!(
                    received = payload.len(),
                    records = catalog.len(),
                    "Catalog loaded"
                );
                self.catalog = catalog;
                self.dispatch(FetchIntent::Succeeded);
            }
            Err(err) => {
                tracing::warn!(error = %err, kind = err.error_type(), "Catalog fetch failed");
                self.dispatch(FetchIntent::Failed {
                    message: err.user_message(),
                });
            }
        }
        true
    }

    /// The request task ended without an outcome while still live, which
    /// only happens when it panicked or the runtime went away.
    fn request_vanished(&mut self) -> bool {
        if self.is_torn_down() || !self.state.is_loading() {
            return false;
        }
        tracing::warn!("Catalog request task ended without an outcome");
        self.dispatch(FetchIntent::Failed {
            message: "network error".to_string(),
        });
        true
    }

    fn dispatch(&mut self, intent: FetchIntent) {
        self.state = FetchReducer::reduce(std::mem::take(&mut self.state), intent);
    }
}

impl<S: CatalogSource> Drop for CatalogFetcher<S> {
    fn drop(&mut self) {
        self.teardown();
    }
}
