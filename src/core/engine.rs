use crate::core::{filter, html, report};
use crate::domain::model::{ArchivedShipment, SearchCriteria, Severity};
use crate::domain::ports::{Notifier, RecordStore, SurfaceProvider};
use crate::utils::error::Result;
use chrono::Utc;

/// Collection name for archived shipments in the record store.
pub const ARCHIVE_COLLECTION: &str = "archived";

/// Operation boundary over the injected collaborators. Store and surface
/// failures are converted to Danger notifications here and never escape an
/// operation, so every operation can simply be re-invoked by the user.
pub struct ArchiveEngine<S: RecordStore, N: Notifier, P: SurfaceProvider> {
    store: S,
    notifier: N,
    surfaces: P,
}

impl<S: RecordStore, N: Notifier, P: SurfaceProvider> ArchiveEngine<S, N, P> {
    pub fn new(store: S, notifier: N, surfaces: P) -> Self {
        Self {
            store,
            notifier,
            surfaces,
        }
    }

    /// Searches the archive: one bulk read, then the filter passes. Reports
    /// the result count on success. On a store-read failure it notifies with
    /// Danger severity and returns an empty set without filtering.
    pub async fn search(&self, criteria: &SearchCriteria) -> Vec<ArchivedShipment> {
        let all = match self.store.read_all(ARCHIVE_COLLECTION).await {
            Ok(records) => records,
            Err(e) => {
                tracing::error!("archive search failed: {}", e);
                self.notifier
                    .notify("An error occurred during search", Severity::Danger);
                return Vec::new();
            }
        };

        tracing::debug!("loaded {} archived shipments", all.len());
        let hits = filter::apply_filters(all, criteria, Utc::now());
        self.notifier
            .notify(&format!("Found {} shipments", hits.len()), Severity::Info);
        hits
    }

    /// Renders and prints a report over the whole archive. An empty archive
    /// short-circuits with a Warning before any surface is touched.
    pub async fn print_report(&self) {
        let shipments = match self.store.read_all(ARCHIVE_COLLECTION).await {
            Ok(records) => records,
            Err(e) => {
                tracing::error!("loading archive for report failed: {}", e);
                self.notifier
                    .notify("An error occurred while loading data", Severity::Danger);
                return;
            }
        };

        if shipments.is_empty() {
            self.notifier
                .notify("No archived shipments to print", Severity::Warning);
            return;
        }

        self.print_shipments(&shipments).await;
    }

    /// Renders and prints a report over the given shipments. Accepts any
    /// list; emptiness checks are the caller's concern.
    pub async fn print_shipments(&self, shipments: &[ArchivedShipment]) {
        if let Err(e) = self.render_and_print(shipments).await {
            tracing::error!("report generation failed: {}", e);
            self.notifier.notify(
                "An error occurred while generating the report",
                Severity::Danger,
            );
        }
    }

    async fn render_and_print(&self, shipments: &[ArchivedShipment]) -> Result<()> {
        let document = report::build_report(shipments, Utc::now());
        let page = html::render_html(&document);

        let mut surface = self.surfaces.open_blank().await?;
        surface.write_content(&page).await?;
        // Printing before the surface finished loading yields a partial
        // print, so readiness is awaited first.
        surface.wait_ready().await?;
        surface.trigger_print().await?;

        tracing::info!("printed report with {} shipments", shipments.len());
        Ok(())
    }
}
