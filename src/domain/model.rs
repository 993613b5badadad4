use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An archived shipment record. Created elsewhere; this crate only reads.
///
/// Every field is optional: records written over time by different form
/// versions are not guaranteed to carry all fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ArchivedShipment {
    pub file_number: Option<String>,
    pub client: Option<String>,
    pub responsible: Option<String>,
    pub shipment_type: Option<String>,
    pub port: Option<String>,
    pub policy_number: Option<String>,
    pub declaration_number: Option<String>,
    pub declaration_date: Option<NaiveDate>,
    pub container_count: Option<ContainerCount>,
    pub priority: Option<String>,
    pub customs_details: Option<String>,
    pub stages: Option<Vec<String>>,
    pub archived_at: Option<DateTime<Utc>>,
    pub archived_date: Option<NaiveDate>,
}

impl ArchivedShipment {
    /// Resolves the archive date as `archived_at`, else `archived_date` at
    /// midnight UTC, else the supplied `now`. Callers capture `now` once per
    /// operation so a record with neither date resolves consistently within
    /// that operation.
    pub fn archive_date(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        self.archived_at
            .or_else(|| {
                self.archived_date
                    .map(|d| d.and_time(NaiveTime::MIN).and_utc())
            })
            .unwrap_or(now)
    }
}

/// Container count as stored: older records hold it as a string, newer ones
/// as a number.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ContainerCount {
    Number(u64),
    Text(String),
}

impl fmt::Display for ContainerCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContainerCount::Number(n) => write!(f, "{}", n),
            ContainerCount::Text(s) => f.write_str(s),
        }
    }
}

/// Search criteria for the archive. All fields optional; each active field is
/// applied as an AND-combined filter. Blank/whitespace strings count as
/// inactive.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchCriteria {
    pub file_number: Option<String>,
    pub client: Option<String>,
    pub responsible: Option<String>,
    pub from_date: Option<NaiveDate>,
    pub to_date: Option<NaiveDate>,
}

impl SearchCriteria {
    pub fn is_empty(&self) -> bool {
        fn blank(v: &Option<String>) -> bool {
            v.as_deref().map_or(true, |s| s.trim().is_empty())
        }
        blank(&self.file_number)
            && blank(&self.client)
            && blank(&self.responsible)
            && self.from_date.is_none()
            && self.to_date.is_none()
    }
}

/// Severity of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Danger,
}

/// One entry of a selector control: a stored value plus its display label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}
