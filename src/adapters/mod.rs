pub mod cache;
pub mod json_store;
pub mod notify;
pub mod surface;

pub use cache::JsonFileCache;
pub use json_store::JsonFileStore;
pub use notify::TracingNotifier;
pub use surface::FileSurfaceProvider;
