use super::model::Record;

// ---------------------------------------------------------------------------
// Free-text search over the catalog
// ---------------------------------------------------------------------------

/// Normalize a search term: trimmed and lowercased.
pub fn normalize_term(term: &str) -> String {
    term.trim().to_lowercase()
}

/// Whether `record` matches an already-normalized term.
///
/// A record matches when the term is a substring of its name, id, source
/// or the decimal form of its price, ignoring case. An empty term matches
/// everything.
pub fn matches(record: &Record, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    record.name.to_lowercase().contains(term)
        || record.id.to_lowercase().contains(term)
        || record.source.to_lowercase().contains(term)
        || record.price.to_string().contains(term)
}

/// Return indices of records matching `term`, in collection order.
pub fn filtered_indices(records: &[Record], term: &str) -> Vec<usize> {
    let term = normalize_term(term);
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| matches(record, &term))
        .map(|(i, _)| i)
        .collect()
}

/// Return the records matching `term`, in collection order.
pub fn filter_records<'a>(records: &'a [Record], term: &str) -> Vec<&'a Record> {
    let term = normalize_term(term);
    records.iter().filter(|record| matches(record, &term)).collect()
}
