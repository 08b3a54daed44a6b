//! Bundle of backend implementations plugged into the service.

use std::sync::Arc;

use crate::ports::{Classifier, NotificationDispatcher, ScanLookup};

#[derive(Clone)]
/// One implementation of every backend port.
///
/// Simulated and remote providers each build one of these; the service never
/// knows which concrete backend it is talking to.
pub struct ProviderBundle {
    /// Waste item classification.
    pub classifier: Arc<dyn Classifier>,
    /// Collection point lookup.
    pub scan_lookup: Arc<dyn ScanLookup>,
    /// Vehicle notification delivery.
    pub dispatcher: Arc<dyn NotificationDispatcher>,
}

impl ProviderBundle {
    /// Names of the plugged backends, for start-up logging.
    #[must_use]
    pub fn describe(&self) -> String {
        format!(
            "classifier={}, scan={}, dispatch={}",
            self.classifier.name(),
            self.scan_lookup.name(),
            self.dispatcher.name()
        )
    }
}
