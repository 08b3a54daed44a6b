//! HTTP surface of the wastewise operations API.

/// Command line and environment settings.
pub mod config;
/// Error-to-response mapping.
pub mod error;
/// Validating JSON extractor.
pub mod extract;
/// Endpoint handlers.
pub mod routes;

use std::sync::Arc;

use anyhow::Context;
use axum::{
    Router,
    routing::{get, post},
};
use reqwest::Client;
use tower_http::trace::TraceLayer;
use wastewise_core::{fleet::FleetTracker, reports::ReportStore, service::WastewiseService};
use wastewise_provider_remote as remote;
use wastewise_provider_sim::{self as sim, SimDispatcher, catalog};

use crate::config::{Backend, Settings};
use crate::routes::SharedService;

/// Wire backends, seed data and latencies into a service.
///
/// # Errors
///
/// Fails when the remote backend is selected without a URL or the HTTP
/// client cannot be built.
pub fn build_service(settings: &Settings) -> anyhow::Result<WastewiseService> {
    let profile = settings.profile();

    let providers = match settings.backend {
        Backend::Sim => sim::plugin(profile),
        Backend::Remote => {
            let base_url = settings
                .remote_url
                .as_deref()
                .context("the remote backend needs --remote-url")?;
            let client = Client::builder().user_agent("wastewise/0.1").build()?;
            remote::plugin(
                client,
                base_url,
                Arc::new(SimDispatcher::new(profile.notification)),
            )
        }
    };

    let reports = if settings.no_demo_data {
        ReportStore::new()
    } else {
        ReportStore::with_reports(catalog::demo_reports())
    };
    let fleet = FleetTracker::new(catalog::demo_fleet());

    Ok(WastewiseService::new(providers, reports, fleet, profile))
}

/// All API routes over the shared service.
#[must_use]
pub fn router(service: SharedService) -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .route(
            "/community-reports",
            get(routes::list_reports).post(routes::create_report),
        )
        .route("/identify-waste", post(routes::identify_waste))
        .route("/qr-scan", post(routes::scan_qr))
        .route(
            "/vehicle-tracking",
            get(routes::track_vehicles).post(routes::set_notification),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}
