use crate::domain::model::ArchivedShipment;
use chrono::{DateTime, Utc};

pub const REPORT_TITLE: &str = "Archived Shipments Report";
pub const COMPANY_NAME: &str = "Shipment Management";
pub const FOOTER_ATTRIBUTION: &str = "Generated by the shipment management system";
pub const FIELD_PLACEHOLDER: &str = "-";
pub const DEFAULT_PRIORITY: &str = "Standard";

/// A printable report as a typed document tree, free of any markup. The HTML
/// serializer in `core::html` turns this into the final page.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportDocument {
    pub title: String,
    pub generated_at: DateTime<Utc>,
    pub record_count: usize,
    pub summary: SummaryTable,
    pub details: Vec<DetailBlock>,
    pub footer: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// One numbered per-shipment block: a heading, rows of paired label/value
/// cells, and optional trailing sections (free text, stage list).
#[derive(Debug, Clone, PartialEq)]
pub struct DetailBlock {
    pub index: usize,
    pub heading: String,
    pub rows: Vec<[DetailCell; 2]>,
    pub extras: Vec<DetailExtra>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailCell {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DetailExtra {
    /// Full-width free-text section; embedded newlines are preserved by the
    /// serializer.
    TextBlock { label: String, text: String },
    /// Ordered process milestones, rendered verbatim in sequence order.
    Stages(Vec<String>),
}

/// Builds the report document for the given shipments. `now` is the render
/// instant, used for the generation timestamp and as the archive-date
/// fallback for records carrying neither date.
pub fn build_report(shipments: &[ArchivedShipment], now: DateTime<Utc>) -> ReportDocument {
    let summary = SummaryTable {
        headers: [
            "File No.",
            "Client",
            "Responsible",
            "Shipment Type",
            "Port",
            "Archive Date",
        ]
        .iter()
        .map(|h| h.to_string())
        .collect(),
        rows: shipments
            .iter()
            .map(|s| {
                vec![
                    text_or_dash(&s.file_number),
                    text_or_dash(&s.client),
                    text_or_dash(&s.responsible),
                    text_or_dash(&s.shipment_type),
                    text_or_dash(&s.port),
                    format_date(s.archive_date(now)),
                ]
            })
            .collect(),
    };

    let details = shipments
        .iter()
        .enumerate()
        .map(|(i, s)| build_detail(i + 1, s, now))
        .collect();

    ReportDocument {
        title: REPORT_TITLE.to_string(),
        generated_at: now,
        record_count: shipments.len(),
        summary,
        details,
        footer: FOOTER_ATTRIBUTION.to_string(),
    }
}

fn build_detail(index: usize, s: &ArchivedShipment, now: DateTime<Utc>) -> DetailBlock {
    let heading = format!("Shipment {} - File No: {}", index, text_or_dash(&s.file_number));

    let rows = vec![
        [
            cell("Client", text_or_dash(&s.client)),
            cell("Responsible", text_or_dash(&s.responsible)),
        ],
        [
            cell("Shipment Type", text_or_dash(&s.shipment_type)),
            cell("Port", text_or_dash(&s.port)),
        ],
        [
            cell("Policy No.", text_or_dash(&s.policy_number)),
            cell("Declaration No.", text_or_dash(&s.declaration_number)),
        ],
        [
            cell(
                "Declaration Date",
                s.declaration_date
                    .map(|d| d.format("%Y-%m-%d").to_string())
                    .unwrap_or_else(|| FIELD_PLACEHOLDER.to_string()),
            ),
            cell(
                "Container Count",
                s.container_count
                    .as_ref()
                    .map(|c| c.to_string())
                    .unwrap_or_else(|| FIELD_PLACEHOLDER.to_string()),
            ),
        ],
        [
            cell("Archive Date", format_date(s.archive_date(now))),
            cell(
                "Priority",
                s.priority
                    .clone()
                    .unwrap_or_else(|| DEFAULT_PRIORITY.to_string()),
            ),
        ],
    ];

    let mut extras = Vec::new();
    if let Some(customs) = s.customs_details.as_deref() {
        if !customs.is_empty() {
            extras.push(DetailExtra::TextBlock {
                label: "Customs Clearance Details".to_string(),
                text: customs.to_string(),
            });
        }
    }
    if let Some(stages) = &s.stages {
        if !stages.is_empty() {
            extras.push(DetailExtra::Stages(stages.clone()));
        }
    }

    DetailBlock {
        index,
        heading,
        rows,
        extras,
    }
}

fn cell(label: &str, value: String) -> DetailCell {
    DetailCell {
        label: label.to_string(),
        value,
    }
}

fn text_or_dash(field: &Option<String>) -> String {
    match field.as_deref() {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => FIELD_PLACEHOLDER.to_string(),
    }
}

fn format_date(instant: DateTime<Utc>) -> String {
    instant.format("%Y-%m-%d").to_string()
}
