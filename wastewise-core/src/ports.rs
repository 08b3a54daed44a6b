//! Traits describing backend capabilities and shared helper types.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Error as ReqwestError;

use crate::model::{
    IdentificationRequest, IdentificationResult, NotificationAck, NotificationRequest, ScanRequest,
    ScanResult,
};

#[derive(thiserror::Error, Debug)]
/// Errors that can occur while talking to identification, scan or dispatch backends.
pub enum PortError {
    /// Network layer failed.
    #[error("Network error: {0}")]
    Network(#[from] ReqwestError),
    /// Backend answered with a body that could not be decoded.
    #[error("Decode error: {0}")]
    Decode(String),
    /// The backend has nothing to draw a result from.
    #[error("No candidates available for {0}")]
    EmptyCandidates(&'static str),
    /// Internal backend error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Render a latency as the decorative label attached to results, e.g. `"1.5s"`.
#[must_use]
pub fn processing_label(latency: Duration) -> String {
    format!("{:.1}s", latency.as_secs_f64())
}

#[async_trait]
/// Classifies a waste item from an image.
pub trait Classifier: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Identify the item shown in the request image.
    ///
    /// # Errors
    ///
    /// Returns a [`PortError`] when the backend fails or has no catalog to match against.
    async fn identify(
        &self,
        request: &IdentificationRequest,
    ) -> Result<IdentificationResult, PortError>;
}

#[async_trait]
/// Resolves a collection point QR code.
pub trait ScanLookup: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Look up the collection point encoded in the request.
    ///
    /// # Errors
    ///
    /// Returns a [`PortError`] when the backend fails.
    async fn lookup(&self, request: &ScanRequest) -> Result<ScanResult, PortError>;
}

#[async_trait]
/// Registers vehicle notifications with a delivery backend.
pub trait NotificationDispatcher: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Set up a notification and acknowledge it.
    ///
    /// # Errors
    ///
    /// Returns a [`PortError`] when the backend rejects the registration.
    async fn dispatch(&self, request: &NotificationRequest) -> Result<NotificationAck, PortError>;
}
