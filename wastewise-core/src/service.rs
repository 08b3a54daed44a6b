//! High-level service facade combining backends, reports and the fleet.

use chrono::Utc;

use crate::fleet::FleetTracker;
use crate::model::{
    IdentificationRequest, IdentificationResult, NotificationAck, NotificationRequest, Report,
    ReportDraft, ReportId, ScanRequest, ScanResult, VehicleState,
};
use crate::plugin::ProviderBundle;
use crate::ports::PortError;
use crate::profile::{SimulationProfile, simulate_latency};
use crate::reports::ReportStore;

/// Public entry point for every operation the API exposes.
pub struct WastewiseService {
    providers: ProviderBundle,
    reports: ReportStore,
    fleet: FleetTracker,
    profile: SimulationProfile,
}

impl WastewiseService {
    /// Create a new service around its backends and initial state.
    #[must_use]
    pub fn new(
        providers: ProviderBundle,
        reports: ReportStore,
        fleet: FleetTracker,
        profile: SimulationProfile,
    ) -> Self {
        tracing::info!(backends = %providers.describe(), "wastewise service ready");
        Self {
            providers,
            reports,
            fleet,
            profile,
        }
    }

    /// All citizen reports in insertion order.
    #[must_use]
    pub fn reports(&self) -> Vec<Report> {
        self.reports.list()
    }

    /// File a new citizen report after the intake delay.
    ///
    /// The report is appended only once the delay has elapsed, so a caller
    /// that goes away mid-delay leaves the collection untouched.
    pub async fn create_report(&self, draft: ReportDraft) -> Report {
        simulate_latency(self.profile.report_intake).await;

        let report = Report::from_draft(draft, ReportId::generate(), Utc::now());
        tracing::info!(report = %report.id, category = %report.category, "report created");
        self.reports.append(report)
    }

    /// Identify the waste item in an image.
    ///
    /// # Errors
    ///
    /// Returns a [`PortError`] if the classifier fails.
    pub async fn identify(
        &self,
        request: &IdentificationRequest,
    ) -> Result<IdentificationResult, PortError> {
        let result = self.providers.classifier.identify(request).await?;
        tracing::debug!(item = %result.item.id, confidence = result.confidence, "waste identified");
        Ok(result)
    }

    /// Resolve a collection point QR code.
    ///
    /// # Errors
    ///
    /// Returns a [`PortError`] if the lookup backend fails.
    pub async fn scan(&self, request: &ScanRequest) -> Result<ScanResult, PortError> {
        let result = self.providers.scan_lookup.lookup(request).await?;
        tracing::debug!(point = %result.id, verified = result.verified, "qr code resolved");
        Ok(result)
    }

    /// Advance and return the fleet.
    #[must_use]
    pub fn track_vehicles(&self) -> Vec<VehicleState> {
        self.fleet.observe()
    }

    /// Register a vehicle notification. The fleet itself is not touched.
    ///
    /// # Errors
    ///
    /// Returns a [`PortError`] if the dispatcher rejects the registration.
    pub async fn set_notification(
        &self,
        request: &NotificationRequest,
    ) -> Result<NotificationAck, PortError> {
        let ack = self.providers.dispatcher.dispatch(request).await?;
        tracing::info!(
            vehicle = %request.vehicle_id,
            kind = %request.notification_type,
            notification = %ack.notification_id,
            "notification registered"
        );
        Ok(ack)
    }
}
