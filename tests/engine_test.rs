use async_trait::async_trait;
use shipment_archive::domain::ports::{Notifier, PrintSurface, RecordStore, SurfaceProvider};
use shipment_archive::utils::error::ArchiveError;
use shipment_archive::{ArchiveEngine, ArchivedShipment, Result, SearchCriteria, Severity};
use std::sync::{Arc, Mutex};

#[derive(Clone)]
struct MockStore {
    records: Arc<Mutex<std::result::Result<Vec<ArchivedShipment>, String>>>,
}

impl MockStore {
    fn with_records(records: Vec<ArchivedShipment>) -> Self {
        Self {
            records: Arc::new(Mutex::new(Ok(records))),
        }
    }

    fn failing(message: &str) -> Self {
        Self {
            records: Arc::new(Mutex::new(Err(message.to_string()))),
        }
    }
}

#[async_trait]
impl RecordStore for MockStore {
    async fn read_all(&self, _collection: &str) -> Result<Vec<ArchivedShipment>> {
        match &*self.records.lock().unwrap() {
            Ok(records) => Ok(records.clone()),
            Err(message) => Err(ArchiveError::StoreRead {
                message: message.clone(),
            }),
        }
    }
}

#[derive(Clone, Default)]
struct RecordingNotifier {
    messages: Arc<Mutex<Vec<(String, Severity)>>>,
}

impl RecordingNotifier {
    fn recorded(&self) -> Vec<(String, Severity)> {
        self.messages.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str, severity: Severity) {
        self.messages
            .lock()
            .unwrap()
            .push((message.to_string(), severity));
    }
}

/// Records the order of surface interactions so the write -> ready -> print
/// sequencing can be asserted.
#[derive(Clone, Default)]
struct RecordingSurfaces {
    events: Arc<Mutex<Vec<String>>>,
    content: Arc<Mutex<Option<String>>>,
    unavailable: bool,
}

impl RecordingSurfaces {
    fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Default::default()
        }
    }

    fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    fn written(&self) -> Option<String> {
        self.content.lock().unwrap().clone()
    }
}

struct RecordingSurface {
    events: Arc<Mutex<Vec<String>>>,
    content: Arc<Mutex<Option<String>>>,
}

#[async_trait]
impl SurfaceProvider for RecordingSurfaces {
    async fn open_blank(&self) -> Result<Box<dyn PrintSurface>> {
        if self.unavailable {
            return Err(ArchiveError::SurfaceUnavailable {
                message: "blocked by host".to_string(),
            });
        }
        self.events.lock().unwrap().push("open".to_string());
        Ok(Box::new(RecordingSurface {
            events: self.events.clone(),
            content: self.content.clone(),
        }))
    }
}

#[async_trait]
impl PrintSurface for RecordingSurface {
    async fn write_content(&mut self, document: &str) -> Result<()> {
        self.events.lock().unwrap().push("write".to_string());
        *self.content.lock().unwrap() = Some(document.to_string());
        Ok(())
    }

    async fn wait_ready(&mut self) -> Result<()> {
        self.events.lock().unwrap().push("ready".to_string());
        Ok(())
    }

    async fn trigger_print(&mut self) -> Result<()> {
        self.events.lock().unwrap().push("print".to_string());
        Ok(())
    }
}

fn shipment(file_number: &str, client: &str) -> ArchivedShipment {
    ArchivedShipment {
        file_number: Some(file_number.to_string()),
        client: Some(client.to_string()),
        ..Default::default()
    }
}

fn engine_with(
    store: MockStore,
) -> (
    ArchiveEngine<MockStore, RecordingNotifier, RecordingSurfaces>,
    RecordingNotifier,
    RecordingSurfaces,
) {
    let notifier = RecordingNotifier::default();
    let surfaces = RecordingSurfaces::default();
    let engine = ArchiveEngine::new(store, notifier.clone(), surfaces.clone());
    (engine, notifier, surfaces)
}

#[tokio::test]
async fn search_reports_result_count_with_info_severity() {
    let store = MockStore::with_records(vec![
        shipment("F-100", "Acme Corp"),
        shipment("F-200", "Beta Trading"),
        shipment("F-300", "Acme Logistics"),
    ]);
    let (engine, notifier, _) = engine_with(store);

    let criteria = SearchCriteria {
        client: Some("acme".to_string()),
        ..Default::default()
    };
    let hits = engine.search(&criteria).await;

    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].file_number.as_deref(), Some("F-100"));
    assert_eq!(hits[1].file_number.as_deref(), Some("F-300"));
    assert_eq!(
        notifier.recorded(),
        vec![("Found 2 shipments".to_string(), Severity::Info)]
    );
}

#[tokio::test]
async fn search_without_criteria_returns_everything_in_order() {
    let store = MockStore::with_records(vec![
        shipment("F-1", "a"),
        shipment("F-2", "b"),
        shipment("F-3", "c"),
    ]);
    let (engine, notifier, _) = engine_with(store);

    let hits = engine.search(&SearchCriteria::default()).await;

    let numbers: Vec<&str> = hits
        .iter()
        .map(|s| s.file_number.as_deref().unwrap())
        .collect();
    assert_eq!(numbers, vec!["F-1", "F-2", "F-3"]);
    assert_eq!(
        notifier.recorded(),
        vec![("Found 3 shipments".to_string(), Severity::Info)]
    );
}

#[tokio::test]
async fn store_failure_notifies_danger_and_returns_empty() {
    let (engine, notifier, _) = engine_with(MockStore::failing("disk gone"));

    let hits = engine.search(&SearchCriteria::default()).await;

    assert!(hits.is_empty());
    let recorded = notifier.recorded();
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].1, Severity::Danger);
}

#[tokio::test]
async fn print_report_runs_write_ready_print_in_order() {
    let store = MockStore::with_records(vec![shipment("F-100", "Acme Corp")]);
    let (engine, notifier, surfaces) = engine_with(store);

    engine.print_report().await;

    assert_eq!(surfaces.events(), vec!["open", "write", "ready", "print"]);
    let page = surfaces.written().expect("document written to surface");
    assert!(page.contains("Acme Corp"));
    assert!(page.contains("F-100"));
    // Printing the archive emits no notification of its own.
    assert!(notifier.recorded().is_empty());
}

#[tokio::test]
async fn empty_archive_warns_and_never_opens_a_surface() {
    let (engine, notifier, surfaces) = engine_with(MockStore::with_records(vec![]));

    engine.print_report().await;

    assert!(surfaces.events().is_empty());
    assert_eq!(
        notifier.recorded(),
        vec![(
            "No archived shipments to print".to_string(),
            Severity::Warning
        )]
    );
}

#[tokio::test]
async fn unavailable_surface_becomes_a_danger_notification() {
    let store = MockStore::with_records(vec![shipment("F-100", "Acme Corp")]);
    let notifier = RecordingNotifier::default();
    let engine = ArchiveEngine::new(store, notifier.clone(), RecordingSurfaces::unavailable());

    engine.print_report().await;

    let recorded = notifier.recorded();
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].1, Severity::Danger);
}

#[tokio::test]
async fn print_shipments_accepts_a_filtered_subset() {
    let store = MockStore::with_records(vec![]);
    let (engine, _, surfaces) = engine_with(store);

    let subset = vec![shipment("F-700", "Gamma Freight")];
    engine.print_shipments(&subset).await;

    let page = surfaces.written().expect("document written to surface");
    assert!(page.contains("Gamma Freight"));
}

#[tokio::test]
async fn print_report_load_failure_notifies_danger() {
    let (engine, notifier, surfaces) = engine_with(MockStore::failing("disk gone"));

    engine.print_report().await;

    assert!(surfaces.events().is_empty());
    let recorded = notifier.recorded();
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].1, Severity::Danger);
}
