//! Browse and incrementally filter a remote country catalog.
//!
//! - [`catalog`]: canonical record, upstream normalization, filtering, HTTP source
//! - [`fetch`]: one-shot fetch lifecycle with cancellation on teardown
//! - [`view_model`]: renderable projection of fetch state and filter results
//! - [`session`]: the boundary a front end drives (`set_search_term`, `view_model`)
//! - [`ui`] / [`headless`]: terminal front end and plain listing

pub mod catalog;
pub mod config;
pub mod fetch;
pub mod headless;
pub mod logging;
pub mod mvi;
pub mod session;
pub mod ui;
pub mod view_model;

pub use catalog::{CatalogSource, CountryRecord, FetchError, HttpCatalog, Normalizer};
pub use fetch::{CatalogFetcher, FetchState};
pub use session::SearchSession;
pub use view_model::ViewModel;
