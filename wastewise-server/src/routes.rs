//! Endpoint handlers: validator, then service, then JSON.

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode};
use wastewise_core::{
    model::{
        IdentificationRequest, IdentificationResult, NotificationAck, NotificationRequest, Report,
        ReportDraft, ScanRequest, ScanResult, VehicleState,
    },
    service::WastewiseService,
};

use crate::error::ApiError;
use crate::extract::ValidatedJson;

/// Service handle shared by all handlers.
pub type SharedService = Arc<WastewiseService>;

/// `GET /health`
pub async fn health() -> &'static str {
    "OK"
}

/// `GET /community-reports`
pub async fn list_reports(State(service): State<SharedService>) -> Json<Vec<Report>> {
    Json(service.reports())
}

/// `POST /community-reports`
pub async fn create_report(
    State(service): State<SharedService>,
    ValidatedJson(draft): ValidatedJson<ReportDraft>,
) -> (StatusCode, Json<Report>) {
    let report = service.create_report(draft).await;
    (StatusCode::CREATED, Json(report))
}

/// `POST /identify-waste`
///
/// # Errors
///
/// Fails with 400 without an image and with 500 when the classifier fails.
pub async fn identify_waste(
    State(service): State<SharedService>,
    ValidatedJson(request): ValidatedJson<IdentificationRequest>,
) -> Result<Json<IdentificationResult>, ApiError> {
    Ok(Json(service.identify(&request).await?))
}

/// `POST /qr-scan`
///
/// # Errors
///
/// Fails with 400 without `qrData` and with 500 when the lookup fails.
pub async fn scan_qr(
    State(service): State<SharedService>,
    ValidatedJson(request): ValidatedJson<ScanRequest>,
) -> Result<Json<ScanResult>, ApiError> {
    Ok(Json(service.scan(&request).await?))
}

/// `GET /vehicle-tracking`
pub async fn track_vehicles(State(service): State<SharedService>) -> Json<Vec<VehicleState>> {
    Json(service.track_vehicles())
}

/// `POST /vehicle-tracking`
///
/// # Errors
///
/// Fails with 400 on missing fields and with 500 when dispatch fails.
pub async fn set_notification(
    State(service): State<SharedService>,
    ValidatedJson(request): ValidatedJson<NotificationRequest>,
) -> Result<(StatusCode, Json<NotificationAck>), ApiError> {
    let ack = service.set_notification(&request).await?;
    Ok((StatusCode::CREATED, Json(ack)))
}
