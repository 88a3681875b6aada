use crate::catalog::record::CountryRecord;

/// Visible subset of `catalog` for `term`.
///
/// An empty term returns the whole catalog. Otherwise a record is kept when
/// its lowercased display name contains the lowercased term. Matches keep
/// their catalog order.
pub fn filter(catalog: &[CountryRecord], term: &str) -> Vec<CountryRecord> {
    if term.is_empty() {
        return catalog.to_vec();
    }

    let needle = term.to_lowercase();
    catalog
        .iter()
        .filter(|record| contains_folded(record, &needle))
        .cloned()
        .collect()
}

fn contains_folded(record: &CountryRecord, needle: &str) -> bool {
    record.display_name.to_lowercase().contains(needle)
}
