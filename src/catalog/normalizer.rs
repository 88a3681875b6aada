//! Upstream schema reconciliation.
//!
//! Deployments of the catalog endpoint disagree on field names (`common`/`png`,
//! `name`/`flag`, `name`/`alpha3Code`/`flag`). Each canonical attribute is
//! resolved from an ordered list of candidate keys; the first key holding a
//! non-empty string wins. Values are kept exactly as received.

use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::catalog::record::CountryRecord;

/// Reasons a raw entry cannot become a [`CountryRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NormalizationFailure {
    #[error("entry is not a JSON object")]
    NotAnObject,

    #[error("entry has no usable display name")]
    MissingDisplayName,
}

/// Ordered candidate keys for each canonical attribute.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FieldCandidates {
    #[serde(default = "default_display_name_fields")]
    pub display_name: Vec<String>,
    #[serde(default = "default_flag_image_url_fields")]
    pub flag_image_url: Vec<String>,
    /// Falls back to the display name when none of these is present.
    #[serde(default = "default_id_fields")]
    pub id: Vec<String>,
}

fn default_display_name_fields() -> Vec<String> {
    vec!["common".to_string(), "name".to_string()]
}

fn default_flag_image_url_fields() -> Vec<String> {
    vec!["png".to_string(), "flag".to_string()]
}

fn default_id_fields() -> Vec<String> {
    vec!["code".to_string(), "alpha3Code".to_string()]
}

impl Default for FieldCandidates {
    fn default() -> Self {
        Self {
            display_name: default_display_name_fields(),
            flag_image_url: default_flag_image_url_fields(),
            id: default_id_fields(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    fields: FieldCandidates,
}

impl Normalizer {
    pub fn new(fields: FieldCandidates) -> Self {
        Self { fields }
    }

    /// Map one raw upstream entry to the canonical shape.
    pub fn normalize(&self, raw: &Value) -> Result<CountryRecord, NormalizationFailure> {
        let object = raw.as_object().ok_or(NormalizationFailure::NotAnObject)?;

        let display_name = first_present(object, &self.fields.display_name)
            .ok_or(NormalizationFailure::MissingDisplayName)?;
        let flag_image_url = first_present(object, &self.fields.flag_image_url).unwrap_or_default();
        let id = first_present(object, &self.fields.id).unwrap_or_else(|| display_name.clone());

        Ok(CountryRecord {
            id,
            display_name,
            flag_image_url,
        })
    }

    /// Build a fresh catalog from a whole payload.
    ///
    /// Entries that fail normalization are left out; order of the survivors
    /// follows the payload.
    pub fn normalize_all(&self, payload: &[Value]) -> Vec<CountryRecord> {
        let mut dropped = 0usize;
        let catalog: Vec<CountryRecord> = payload
            .iter()
            .enumerate()
            .filter_map(|(index, raw)| match self.normalize(raw) {
                Ok(record) => Some(record),
                Err(reason) => {
                    dropped += 1;
                    tracing::trace!(index, %reason, "Skipping catalog entry");
                    None
                }
            })
            .collect();

        if dropped > 0 {
            tracing::debug!(
                dropped,
                kept = catalog.len(),
                "Dropped catalog entries without a usable display name"
            );
        }

        catalog
    }
}

/// First candidate key whose value is a non-empty string.
fn first_present(object: &Map<String, Value>, candidates: &[String]) -> Option<String> {
    candidates
        .iter()
        .filter_map(|key| object.get(key))
        .filter_map(Value::as_str)
        .find(|value| !value.is_empty())
        .map(str::to_string)
}
