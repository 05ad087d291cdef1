//! In-memory implementations of the three admin service seams.
//!
//! Every mutation follows strict check-then-apply: the batch (or single
//! value) is validated against the relevant catalog first, and the record
//! is only touched once zero errors remain.

pub mod api_resource;
pub mod client;
pub mod identity_resource;


use idadmin_core::{
    DEFAULT_QUERY_COUNT,
    prelude::{AdminError, AdminResult, PropertyCatalog, PropertyValue, QueryResult, messages},
};

/// Subjects are decimal record ids on the wire.
pub(crate) fn parse_subject(subject: &str) -> Option<u32> {
    subject.trim().parse().ok()
}

/// Parse a subject for a mutating operation, where an unparseable handle is
/// a reportable error rather than a miss.
pub(crate) fn require_subject(subject: &str) -> AdminResult<u32> {
    parse_subject(subject).ok_or_else(AdminError::invalid_subject)
}

/// True when `filter` is absent, blank, or a substring of any haystack.
pub(crate) fn matches(filter: Option<&str>, haystacks: &[&str]) -> bool {
    filter.is_none_or(|needle| {
        needle.trim().is_empty() || haystacks.iter().any(|hay| hay.contains(needle))
    })
}

/// Window an already filtered and ordered listing. A zero count falls back
/// to [`DEFAULT_QUERY_COUNT`].
pub(crate) fn page<T>(
    all: Vec<T>,
    filter: Option<&str>,
    start: usize,
    count: usize,
) -> QueryResult<T> {
    let count = if count == 0 { DEFAULT_QUERY_COUNT } else { count };
    let total = all.len();
    let items: Vec<T> = all.into_iter().skip(start).take(count).collect();

    QueryResult {
        start,
        count,
        total,
        filter: filter.map(str::to_string),
        items,
    }
}

/// Required create properties that the bag omitted entirely. Batch
/// validation only sees the entries that are present; absence is checked
/// here, once, at the operation boundary.
pub(crate) fn missing_required<E>(
    catalog: &PropertyCatalog<E>,
    bag: &[PropertyValue],
) -> Vec<String> {
    catalog
        .iter()
        .filter(|prop| prop.is_required() && !bag.iter().any(|entry| entry.ty == prop.ty()))
        .map(|prop| messages::property_required(prop.ty()))
        .collect()
}
