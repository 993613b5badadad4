use crate::domain::model::ArchivedShipment;
use crate::domain::ports::RecordStore;
use crate::utils::error::{ArchiveError, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// File-backed record store: a collection named `archived` lives at
/// `<base>/archived.json` as a JSON array of shipment records. Any IO or
/// parse failure surfaces as a single `StoreRead` error.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    base_path: PathBuf,
}

impl JsonFileStore {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    fn collection_path(&self, collection: &str) -> PathBuf {
        Path::new(&self.base_path).join(format!("{}.json", collection))
    }
}

#[async_trait]
impl RecordStore for JsonFileStore {
    async fn read_all(&self, collection: &str) -> Result<Vec<ArchivedShipment>> {
        let path = self.collection_path(collection);
        tracing::debug!("reading collection from {}", path.display());

        let raw = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| ArchiveError::StoreRead {
                message: format!("cannot read {}: {}", path.display(), e),
            })?;

        serde_json::from_str(&raw).map_err(|e| ArchiveError::StoreRead {
            message: format!("cannot parse {}: {}", path.display(), e),
        })
    }
}
