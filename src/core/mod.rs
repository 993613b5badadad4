pub mod engine;
pub mod filter;
pub mod html;
pub mod report;
pub mod responsibles;

pub use crate::domain::model::{ArchivedShipment, SearchCriteria, SelectOption, Severity};
pub use crate::domain::ports::{KeyValueCache, Notifier, PrintSurface, RecordStore, SurfaceProvider};
pub use crate::utils::error::Result;
