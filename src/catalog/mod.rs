//! Country catalog: canonical record, upstream normalization, filtering and
//! the HTTP source.

pub mod client;
pub mod error;
pub mod filter;
pub mod normalizer;
pub mod record;

pub use client::{decode_payload, CatalogSource, HttpCatalog, RawPayload, TimeoutConfig};
pub use error::FetchError;
pub use filter::filter;
pub use normalizer::{FieldCandidates, NormalizationFailure, Normalizer};
pub use record::CountryRecord;
