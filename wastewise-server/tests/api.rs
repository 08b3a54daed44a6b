//! Router tests driving every endpoint through `tower::ServiceExt::oneshot`.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header},
};
use chrono::{DateTime, Utc};
use serde_json::{Value, json};
use tower::ServiceExt;
use wastewise_core::{
    fleet::FleetTracker,
    model::{IdentificationRequest, IdentificationResult, PLACEHOLDER_REPORTER},
    plugin::ProviderBundle,
    ports::{Classifier, PortError},
    profile::SimulationProfile,
    reports::ReportStore,
    service::WastewiseService,
};
use wastewise_provider_sim::{CONFIDENCE_RANGE, catalog, seeded_plugin};
use wastewise_server::{error::INTERNAL_MESSAGE, router};

fn app_with(providers: ProviderBundle) -> Router {
    let profile = SimulationProfile::instant();
    let service = WastewiseService::new(
        providers,
        ReportStore::new(),
        FleetTracker::seeded(catalog::demo_fleet(), 17),
        profile,
    );
    router(Arc::new(service))
}

fn app() -> Router {
    app_with(seeded_plugin(SimulationProfile::instant(), 17))
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("request builds");

    let response = app.clone().oneshot(request).await.expect("router is infallible");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, value)
}

fn report_body() -> Value {
    json!({
        "title": "Overflowing bin",
        "description": "The bin outside number 12 is overflowing",
        "category": "overflow",
        "location": "Elm Street 12",
        "priority": "high"
    })
}

#[tokio::test]
async fn created_report_is_pending_and_listed() {
    let app = app();
    let before = Utc::now();

    let (status, created) =
        send(&app, Method::POST, "/community-reports", Some(report_body())).await;
    assert_eq!(status, StatusCode::CREATED, "report created");
    assert_eq!(created["status"], "pending", "new reports are pending");
    assert!(
        created["id"].as_str().is_some_and(|id| !id.is_empty()),
        "id assigned"
    );
    let reported_at: DateTime<Utc> = created["reportedAt"]
        .as_str()
        .and_then(|raw| raw.parse().ok())
        .expect("reportedAt is a timestamp");
    assert!(reported_at >= before, "reportedAt not before the request");

    let (status, listed) = send(&app, Method::GET, "/community-reports", None).await;
    assert_eq!(status, StatusCode::OK, "list succeeds");
    let reports = listed.as_array().expect("bare array");
    assert_eq!(reports.len(), 1, "exactly the new report");
    assert_eq!(reports.first(), Some(&created), "identical field values");
}

#[tokio::test]
async fn missing_report_field_is_rejected_and_nothing_stored() {
    let app = app();

    for field in ["title", "description", "category", "location", "priority"] {
        let mut body = report_body();
        body.as_object_mut().expect("object").remove(field);

        let (status, error) = send(&app, Method::POST, "/community-reports", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{field} required");
        assert_eq!(
            error["error"],
            format!("Missing required field: {field}"),
            "message names {field}"
        );
    }

    let (_, listed) = send(&app, Method::GET, "/community-reports", None).await;
    assert_eq!(listed, json!([]), "no report appended");
}

#[tokio::test]
async fn report_ids_are_unique() {
    let app = app();
    let mut ids = Vec::new();
    for _ in 0..10 {
        let (_, created) =
            send(&app, Method::POST, "/community-reports", Some(report_body())).await;
        ids.push(created["id"].as_str().expect("id").to_owned());
    }
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 10, "all ids distinct");
}

#[tokio::test]
async fn server_owned_report_fields_ignore_the_client() {
    let app = app();
    let mut body = report_body();
    let fields = body.as_object_mut().expect("object");
    fields.insert("status".to_owned(), json!("resolved"));
    fields.insert("id".to_owned(), json!("X"));
    fields.insert("reportedBy".to_owned(), json!("me"));

    let (status, created) = send(&app, Method::POST, "/community-reports", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED, "extra fields tolerated");
    assert_eq!(created["status"], "pending", "status set by the server");
    assert!(
        created["id"].as_str().is_some_and(|id| id.starts_with("RPT-")),
        "id minted by the server"
    );
    assert_eq!(created["reportedBy"], PLACEHOLDER_REPORTER, "reporter set by the server");
}

#[tokio::test]
async fn malformed_json_is_a_bad_request() {
    let app = app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/qr-scan")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .expect("request builds");

    let response = app.oneshot(request).await.expect("router is infallible");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST, "unparseable body");
}

#[tokio::test]
async fn identify_requires_an_image() {
    let app = app();
    let (status, error) = send(&app, Method::POST, "/identify-waste", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST, "image required");
    assert_eq!(error["error"], "Missing required field: image", "names the field");
}

#[tokio::test]
async fn identify_returns_catalog_item_with_confidence() {
    let app = app();
    let ids: Vec<_> = catalog::waste_catalog().into_iter().map(|item| item.id).collect();

    for _ in 0..20 {
        let (status, result) = send(
            &app,
            Method::POST,
            "/identify-waste",
            Some(json!({ "image": "data:image/jpeg;base64,/9j/4AAQ" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK, "identified");

        let confidence = result["confidence"]
            .as_u64()
            .and_then(|value| u8::try_from(value).ok())
            .expect("integer confidence");
        assert!(CONFIDENCE_RANGE.contains(&confidence), "confidence {confidence} in range");

        let item = result["item"]["id"].as_str().expect("item id");
        assert!(ids.iter().any(|id| id == item), "{item} is a catalog item");

        let label = result["processingTime"].as_str().expect("label present");
        assert!(
            label
                .strip_suffix('s')
                .is_some_and(|seconds| seconds.parse::<f64>().is_ok()),
            "label {label} formatted as seconds"
        );
        assert!(result["timestamp"].is_string(), "timestamp present");
    }
}

#[tokio::test]
async fn qr_scan_requires_qr_data() {
    let app = app();
    let (status, error) = send(&app, Method::POST, "/qr-scan", Some(json!({ "qrData": "" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST, "empty qrData rejected");
    assert_eq!(error["error"], "Missing required field: qrData", "names the field");
}

#[tokio::test]
async fn qr_scan_returns_one_of_the_collection_points() {
    let app = app();
    for _ in 0..20 {
        let (status, result) = send(
            &app,
            Method::POST,
            "/qr-scan",
            Some(json!({ "qrData": "WW:CP:0042" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK, "scan resolved");
        assert!(result["verified"].is_boolean(), "verified is a boolean");

        let id = result["id"].as_str().expect("point id");
        let candidate = catalog::SCAN_CANDIDATES
            .iter()
            .find(|candidate| candidate.id == id)
            .expect("known collection point");
        assert_eq!(result["verified"], candidate.verified, "flag matches the candidate");
        assert_eq!(result["points"], candidate.points, "points match the candidate");
    }
}

#[tokio::test]
async fn vehicle_progress_is_monotonic_across_reads() {
    let app = app();

    let (status, first) = send(&app, Method::GET, "/vehicle-tracking", None).await;
    assert_eq!(status, StatusCode::OK, "tracking read");
    let (_, second) = send(&app, Method::GET, "/vehicle-tracking", None).await;

    let first = first.as_array().expect("bare array");
    let second = second.as_array().expect("bare array");
    assert_eq!(first.len(), second.len(), "same fleet");

    for (before, after) in first.iter().zip(second) {
        assert_eq!(before["id"], after["id"], "stable order");
        let progress_before = before["progress"].as_f64().expect("progress");
        let progress_after = after["progress"].as_f64().expect("progress");
        assert!(progress_after >= progress_before, "{} went backwards", before["id"]);

        if progress_before >= 100.0 {
            assert_eq!(after["status"], "completed", "completion is terminal");
            assert_eq!(after["estimatedArrival"], "Completed", "eta fixed");
            assert!(progress_after >= 100.0, "stays at 100");
        }
    }
}

#[tokio::test]
async fn completed_vehicles_never_change() {
    let app = app();

    // mean step is 5%, sixty reads finish every demo route
    for _ in 0..59 {
        send(&app, Method::GET, "/vehicle-tracking", None).await;
    }
    let (_, last) = send(&app, Method::GET, "/vehicle-tracking", None).await;

    let (_, again) = send(&app, Method::GET, "/vehicle-tracking", None).await;
    for vehicle in last.as_array().expect("bare array") {
        assert_eq!(vehicle["status"], "completed", "{} finished", vehicle["id"]);
    }
    assert_eq!(again, last, "a completed fleet is stable");
}

#[tokio::test]
async fn notification_setup_is_acknowledged() {
    let app = app();
    let (_, before) = send(&app, Method::GET, "/vehicle-tracking", None).await;

    let (status, ack) = send(
        &app,
        Method::POST,
        "/vehicle-tracking",
        Some(json!({ "vehicleId": "WW-101", "notificationType": "arrival" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "notification registered");
    assert!(
        ack["notificationId"].as_str().is_some_and(|id| !id.is_empty()),
        "fresh notification id"
    );
    assert!(ack["message"].is_string(), "confirmation message");

    let (status, error) = send(
        &app,
        Method::POST,
        "/vehicle-tracking",
        Some(json!({ "vehicleId": "WW-101" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST, "type required");
    assert_eq!(error["error"], "Missing required field: notificationType", "names the field");

    let (_, after) = send(&app, Method::GET, "/vehicle-tracking", None).await;
    assert_eq!(
        before.as_array().map(Vec::len),
        after.as_array().map(Vec::len),
        "fleet untouched by notifications"
    );
}

struct OfflineClassifier;

#[async_trait]
impl Classifier for OfflineClassifier {
    fn name(&self) -> &str {
        "offline"
    }

    async fn identify(
        &self,
        _request: &IdentificationRequest,
    ) -> Result<IdentificationResult, PortError> {
        Err(PortError::Internal("model weights missing on gpu-7".to_owned()))
    }
}

#[tokio::test]
async fn backend_failures_hide_their_cause() {
    let mut providers = seeded_plugin(SimulationProfile::instant(), 1);
    providers.classifier = Arc::new(OfflineClassifier);
    let app = app_with(providers);

    let (status, error) = send(
        &app,
        Method::POST,
        "/identify-waste",
        Some(json!({ "image": "abc" })),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "internal failure");
    assert_eq!(error, json!({ "error": INTERNAL_MESSAGE }), "generic message only");
}

#[tokio::test]
async fn health_reports_ok() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK, "alive");
    assert_eq!(body, Value::String("OK".to_owned()), "plain text body");
}
