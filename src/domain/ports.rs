use crate::domain::model::{ArchivedShipment, Severity};
use crate::utils::error::Result;
use async_trait::async_trait;

/// The persistent record store. One bulk fetch per operation, no filtering
/// pushed down, no retry, no cancellation.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn read_all(&self, collection: &str) -> Result<Vec<ArchivedShipment>>;
}

/// Synchronous key-value storage for small cached lists.
pub trait KeyValueCache: Send + Sync {
    fn read_value(&self, key: &str) -> Option<String>;
}

/// User-facing notification surface. Fire-and-forget.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str, severity: Severity);
}

/// A display surface a report can be written to and printed from.
///
/// `trigger_print` must only be called after `wait_ready` has returned Ok:
/// printing before the surface finished loading the content yields a blank
/// or partial print.
#[async_trait]
pub trait PrintSurface: Send {
    async fn write_content(&mut self, document: &str) -> Result<()>;
    async fn wait_ready(&mut self) -> Result<()>;
    async fn trigger_print(&mut self) -> Result<()>;
}

/// Acquires blank print surfaces. Fails with `SurfaceUnavailable` when the
/// host environment refuses to provide one.
#[async_trait]
pub trait SurfaceProvider: Send + Sync {
    async fn open_blank(&self) -> Result<Box<dyn PrintSurface>>;
}
