use crate::domain::model::Severity;
use crate::domain::ports::Notifier;

/// Maps notification severities onto tracing levels. The CLI has no alert
/// banner, so the log stream is its notification surface.
#[derive(Debug, Clone, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, message: &str, severity: Severity) {
        match severity {
            Severity::Info => tracing::info!("{}", message),
            Severity::Warning => tracing::warn!("{}", message),
            Severity::Danger => tracing::error!("{}", message),
        }
    }
}
