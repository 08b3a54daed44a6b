//! Backends that forward identification and scan requests to an external
//! service over HTTP.
//!
//! The remote service exposes `POST {base}/identify` and `POST {base}/scan`.
//! Notification delivery is not offered remotely, so [`plugin`] takes the
//! dispatcher to pair the HTTP ports with.

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use chrono::Utc;
use reqwest::{Client, RequestBuilder};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use wastewise_core::{
    model::{IdentificationRequest, IdentificationResult, ScanRequest, ScanResult, WasteItem},
    plugin::ProviderBundle,
    ports::{Classifier, NotificationDispatcher, PortError, ScanLookup, processing_label},
};

const BACKEND_NAME: &str = "remote";

#[derive(Debug, Deserialize)]
/// Response from /identify
struct IdentifyResponse {
    item: WasteItem,
    /// Percent, 0..=100
    confidence: u8,
}

#[derive(Debug, Deserialize)]
/// Response from /scan
struct ScanResponse {
    point: CollectionPoint,
}

#[derive(Debug, Deserialize)]
/// Collection point nested in /scan responses
#[serde(rename_all = "camelCase")]
struct CollectionPoint {
    id: String,
    waste_type: String,
    points: u32,
    location: String,

    // unknown sites are reported without the flag
    #[serde(default)]
    verified: bool,
}

/// Classifier backed by the remote inference endpoint.
pub struct RemoteClassifier {
    client: Client,
    base_url: String,
}

impl RemoteClassifier {
    /// Create a classifier talking to `base_url` through `client`.
    #[must_use]
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl Classifier for RemoteClassifier {
    fn name(&self) -> &str {
        BACKEND_NAME
    }

    async fn identify(
        &self,
        request: &IdentificationRequest,
    ) -> Result<IdentificationResult, PortError> {
        let started = Instant::now();

        let req = self
            .client
            .post(endpoint(&self.base_url, "identify"))
            .json(request);
        let resp = fetch_json::<IdentifyResponse>(req).await?;

        if resp.confidence > 100 {
            return Err(PortError::Decode(format!(
                "confidence {} is not a percentage",
                resp.confidence
            )));
        }

        Ok(IdentificationResult {
            item: resp.item,
            confidence: resp.confidence,
            timestamp: Utc::now(),
            processing_time: processing_label(started.elapsed()),
        })
    }
}

/// Collection point lookup backed by the remote registry.
pub struct RemoteScanLookup {
    client: Client,
    base_url: String,
}

impl RemoteScanLookup {
    /// Create a lookup talking to `base_url` through `client`.
    #[must_use]
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl ScanLookup for RemoteScanLookup {
    fn name(&self) -> &str {
        BACKEND_NAME
    }

    async fn lookup(&self, request: &ScanRequest) -> Result<ScanResult, PortError> {
        let started = Instant::now();

        let req = self
            .client
            .post(endpoint(&self.base_url, "scan"))
            .json(request);
        let ScanResponse { point } = fetch_json::<ScanResponse>(req).await?;

        Ok(ScanResult {
            id: point.id,
            waste_type: point.waste_type,
            points: point.points,
            location: point.location,
            verified: point.verified,
            timestamp: Utc::now(),
            processing_time: processing_label(started.elapsed()),
        })
    }
}

/// Build a backend bundle using the remote service for identification and scans.
#[must_use]
pub fn plugin(
    client: Client,
    base_url: &str,
    dispatcher: Arc<dyn NotificationDispatcher>,
) -> ProviderBundle {
    let classifier = Arc::new(RemoteClassifier::new(client.clone(), base_url));
    let scan_lookup = Arc::new(RemoteScanLookup::new(client, base_url));

    ProviderBundle {
        classifier,
        scan_lookup,
        dispatcher,
    }
}

fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}/{path}", base_url.trim_end_matches('/'))
}

// Small helper to fetch and decode JSON with status handling.
async fn fetch_json<T: DeserializeOwned>(req: RequestBuilder) -> Result<T, PortError> {
    let resp = req
        .send()
        .await
        .map_err(PortError::from)?
        .error_for_status()
        .map_err(PortError::from)?;

    tracing::trace!(url = %resp.url(), status = %resp.status(), "remote backend answered");

    resp.json().await.map_err(|err| {
        if err.is_decode() {
            PortError::Decode(err.to_string())
        } else {
            PortError::Network(err)
        }
    })
}
