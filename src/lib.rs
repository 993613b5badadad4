pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{FileSurfaceProvider, JsonFileCache, JsonFileStore, TracingNotifier};
pub use crate::core::engine::{ArchiveEngine, ARCHIVE_COLLECTION};
pub use crate::core::responsibles::populate_responsible_options;
pub use domain::model::{ArchivedShipment, SearchCriteria, SelectOption, Severity};
pub use utils::error::{ArchiveError, Result};
