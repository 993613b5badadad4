use crate::domain::model::{ArchivedShipment, SearchCriteria};
use chrono::{DateTime, Utc};

/// Applies the active criteria as sequential narrowing passes in a fixed
/// order: file number, client, responsible, from-date, to-date. All filters
/// are AND-combined over independent fields, so the order does not change the
/// result. Input order is preserved.
pub fn apply_filters(
    mut shipments: Vec<ArchivedShipment>,
    criteria: &SearchCriteria,
    now: DateTime<Utc>,
) -> Vec<ArchivedShipment> {
    if let Some(needle) = active(&criteria.file_number) {
        let needle = needle.to_lowercase();
        shipments.retain(|s| field_contains(&s.file_number, &needle));
    }

    if let Some(needle) = active(&criteria.client) {
        let needle = needle.to_lowercase();
        shipments.retain(|s| field_contains(&s.client, &needle));
    }

    if let Some(wanted) = active(&criteria.responsible) {
        shipments.retain(|s| s.responsible.as_deref() == Some(wanted));
    }

    if let Some(from) = criteria.from_date {
        shipments.retain(|s| s.archive_date(now).date_naive() >= from);
    }

    if let Some(to) = criteria.to_date {
        shipments.retain(|s| s.archive_date(now).date_naive() <= to);
    }

    shipments
}

/// A string criterion is active only if it has non-whitespace content.
fn active(criterion: &Option<String>) -> Option<&str> {
    criterion
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// Case-insensitive substring test; a missing field never matches.
fn field_contains(field: &Option<String>, needle_lower: &str) -> bool {
    field
        .as_deref()
        .map(|v| v.to_lowercase().contains(needle_lower))
        .unwrap_or(false)
}
