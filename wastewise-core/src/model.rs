//! Domain data structures for reports, waste identification, scans and the fleet.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Upper bound of route progress, in percent.
pub const MAX_PROGRESS: f64 = 100.0;

/// Arrival label a vehicle carries once its route is finished.
pub const COMPLETED_ARRIVAL: &str = "Completed";

/// Identity recorded on reports until real identity resolution is wired in.
pub const PLACEHOLDER_REPORTER: &str = "citizen-anonymous";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Opaque identifier of a citizen report.
pub struct ReportId(pub String);

impl ReportId {
    /// Mint a fresh identifier that does not collide under concurrent creates.
    #[must_use]
    pub fn generate() -> Self {
        ReportId(format!("RPT-{}", Uuid::new_v4().simple()))
    }
}

impl fmt::Display for ReportId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// Lifecycle of a citizen report. Only `Pending` is assigned by this service.
pub enum ReportStatus {
    /// Newly filed, nobody has picked it up yet.
    #[default]
    Pending,
    /// Crew assigned.
    InProgress,
    /// Closed.
    Resolved,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Client-supplied fields of a new report.
pub struct ReportDraft {
    /// Short headline.
    pub title: String,
    /// Free-form description of the problem.
    pub description: String,
    /// Report category such as "overflowing bin".
    pub category: String,
    /// Where the problem was observed.
    pub location: String,
    /// Client-chosen urgency.
    pub priority: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Citizen report as stored and returned by the service.
pub struct Report {
    /// Unique identifier assigned on creation.
    pub id: ReportId,
    /// Short headline.
    pub title: String,
    /// Free-form description of the problem.
    pub description: String,
    /// Report category.
    pub category: String,
    /// Where the problem was observed.
    pub location: String,
    /// Client-chosen urgency.
    pub priority: String,
    /// Current lifecycle state.
    pub status: ReportStatus,
    /// Creation instant.
    pub reported_at: DateTime<Utc>,
    /// Reference to the reporting citizen.
    pub reported_by: String,
}

impl Report {
    /// Build a pending report from a validated draft.
    #[must_use]
    pub fn from_draft(draft: ReportDraft, id: ReportId, reported_at: DateTime<Utc>) -> Self {
        let ReportDraft {
            title,
            description,
            category,
            location,
            priority,
        } = draft;

        Self {
            id,
            title,
            description,
            category,
            location,
            priority,
            status: ReportStatus::Pending,
            reported_at,
            reported_by: PLACEHOLDER_REPORTER.to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Entry of the waste item catalog a classifier picks from.
pub struct WasteItem {
    /// Catalog key.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Waste stream the item belongs to.
    pub category: String,
    /// Whether the item can be recycled.
    pub recyclable: bool,
    /// How to dispose of the item.
    pub disposal: String,
    /// Reward points for correct disposal.
    pub points: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Image submitted for identification.
pub struct IdentificationRequest {
    /// Encoded image payload, opaque to this service.
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Outcome of classifying a waste item.
pub struct IdentificationResult {
    /// Matched catalog entry.
    pub item: WasteItem,
    /// Confidence in percent, within 80..=99.
    pub confidence: u8,
    /// When the classification was produced.
    pub timestamp: DateTime<Utc>,
    /// Human-readable processing time such as "1.5s". Decorative.
    pub processing_time: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// QR code read at a collection point.
pub struct ScanRequest {
    /// Raw QR payload.
    pub qr_data: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Collection point resolved from a QR scan.
pub struct ScanResult {
    /// Collection point code.
    pub id: String,
    /// Waste stream accepted at the point.
    pub waste_type: String,
    /// Reward points credited for the drop-off.
    pub points: u32,
    /// Collection point address.
    pub location: String,
    /// Whether the point is a verified collection site.
    pub verified: bool,
    /// When the lookup was produced.
    pub timestamp: DateTime<Utc>,
    /// Human-readable processing time such as "1.0s". Decorative.
    pub processing_time: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
/// Identifier of a collection vehicle.
pub struct VehicleId(pub String);

impl fmt::Display for VehicleId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Route state of a vehicle. `Completed` is terminal.
pub enum VehicleStatus {
    /// Driving its route.
    Active,
    /// Behind schedule but still driving.
    Delayed,
    /// Route finished.
    Completed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Live progress of a collection vehicle along its route.
pub struct VehicleState {
    /// Vehicle identifier.
    pub id: VehicleId,
    /// Last reported position.
    pub current_location: String,
    /// Route completion in percent, within 0..=100.
    pub progress: f64,
    /// Arrival estimate, or "Completed" once the route is done.
    pub estimated_arrival: String,
    /// Route state.
    pub status: VehicleStatus,
}

impl VehicleState {
    /// Whether the vehicle reached its terminal state.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.status == VehicleStatus::Completed
    }

    /// Advance progress by `step` percent.
    ///
    /// Completed vehicles are left untouched. Returns `true` when this call
    /// moved the vehicle into the completed state.
    pub fn advance(&mut self, step: f64) -> bool {
        if self.is_completed() {
            return false;
        }

        self.progress = (self.progress + step.max(0.0)).min(MAX_PROGRESS);
        if self.progress >= MAX_PROGRESS {
            self.complete();
            return true;
        }
        false
    }

    /// Bring a seeded state in line with the completion rules.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.progress = self.progress.clamp(0.0, MAX_PROGRESS);
        if self.is_completed() || self.progress >= MAX_PROGRESS {
            self.complete();
        }
        self
    }

    fn complete(&mut self) {
        self.progress = MAX_PROGRESS;
        self.status = VehicleStatus::Completed;
        COMPLETED_ARRIVAL.clone_into(&mut self.estimated_arrival);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Request to be notified about a vehicle.
pub struct NotificationRequest {
    /// Vehicle to watch.
    pub vehicle_id: String,
    /// Kind of notification, e.g. "arrival".
    pub notification_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Confirmation that a notification was set up.
pub struct NotificationAck {
    /// Freshly minted identifier.
    pub notification_id: String,
    /// Human-readable confirmation.
    pub message: String,
}
