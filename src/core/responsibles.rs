use crate::domain::model::SelectOption;
use crate::domain::ports::KeyValueCache;
use crate::utils::error::{ArchiveError, Result};

pub const RESPONSIBLES_CACHE_KEY: &str = "responsibles";
pub const ALL_OPTION_LABEL: &str = "All";

/// Builds the responsible-person selector options: a leading "All" sentinel
/// (empty value), then one option per cached name in stored order. No
/// deduplication, no sorting. An absent or malformed cache degrades to the
/// sentinel alone; the parse failure is logged, never surfaced.
pub fn populate_responsible_options<C: KeyValueCache>(cache: &C) -> Vec<SelectOption> {
    let names = match cache.read_value(RESPONSIBLES_CACHE_KEY) {
        Some(raw) => match parse_names(&raw) {
            Ok(names) => names,
            Err(e) => {
                tracing::warn!("responsible cache unreadable, using empty list: {}", e);
                Vec::new()
            }
        },
        None => Vec::new(),
    };

    let mut options = Vec::with_capacity(names.len() + 1);
    options.push(SelectOption {
        value: String::new(),
        label: ALL_OPTION_LABEL.to_string(),
    });
    options.extend(names.into_iter().map(|name| SelectOption {
        value: name.clone(),
        label: name,
    }));
    options
}

fn parse_names(raw: &str) -> Result<Vec<String>> {
    serde_json::from_str::<Vec<String>>(raw).map_err(|e| ArchiveError::MalformedCache {
        key: RESPONSIBLES_CACHE_KEY.to_string(),
        reason: e.to_string(),
    })
}
