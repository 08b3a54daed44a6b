//! In-memory collection of citizen reports.

use parking_lot::Mutex;

use crate::model::Report;

#[derive(Default)]
/// Append-only report collection kept in insertion order.
pub struct ReportStore {
    reports: Mutex<Vec<Report>>,
}

impl ReportStore {
    /// Empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with existing reports.
    #[must_use]
    pub fn with_reports(reports: Vec<Report>) -> Self {
        Self {
            reports: Mutex::new(reports),
        }
    }

    /// Append a report and hand back a copy of it.
    pub fn append(&self, report: Report) -> Report {
        self.reports.lock().push(report.clone());
        report
    }

    /// All reports in insertion order.
    #[must_use]
    pub fn list(&self) -> Vec<Report> {
        self.reports.lock().clone()
    }
}
