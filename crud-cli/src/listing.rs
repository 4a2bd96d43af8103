//! Client-side search and ordering for record listings
//!
//! The server returns records in storage order with no filtering, so both
//! happen here after the full list has been fetched.

use std::cmp::Ordering;

use crud_core::domain::record::Record;

use crate::types::SortOrder;

/// Keep records whose name or city contains `term` (case-insensitive),
/// or whose age contains it as a decimal substring
///
/// A blank term keeps everything.
pub fn filter_records(records: Vec<Record>, term: &str) -> Vec<Record> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return records;
    }

    records
        .into_iter()
        .filter(|record| {
            contains_ignore_case(record.name.as_deref(), &term)
                || contains_ignore_case(record.city.as_deref(), &term)
                || record.age.to_string().contains(&term)
        })
        .collect()
}

fn contains_ignore_case(field: Option<&str>, lowered_term: &str) -> bool {
    field.is_some_and(|value| value.to_lowercase().contains(lowered_term))
}

/// Sort records in place; ties keep their storage order
pub fn sort_records(records: &mut [Record], order: SortOrder) {
    match order {
        SortOrder::NameAsc => records.sort_by(compare_names),
        SortOrder::NameDesc => records.sort_by(|a, b| compare_names(b, a)),
        SortOrder::AgeAsc => records.sort_by_key(|r| r.age),
        SortOrder::AgeDesc => records.sort_by(|a, b| b.age.cmp(&a.age)),
    }
}

// Missing names sort as empty strings
fn compare_names(a: &Record, b: &Record) -> Ordering {
    let a = a.name.as_deref().unwrap_or_default();
    let b = b.name.as_deref().unwrap_or_default();
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
