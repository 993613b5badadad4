use crate::domain::ports::KeyValueCache;
use std::path::PathBuf;

/// File-backed key-value cache: key `k` is the raw content of `<base>/k.json`.
/// Absent or unreadable entries are simply `None`; interpreting the content
/// is the reader's concern.
#[derive(Debug, Clone)]
pub struct JsonFileCache {
    base_path: PathBuf,
}

impl JsonFileCache {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }
}

impl KeyValueCache for JsonFileCache {
    fn read_value(&self, key: &str) -> Option<String> {
        let path = self.base_path.join(format!("{}.json", key));
        std::fs::read_to_string(path).ok()
    }
}
