//! Simulated backends standing in for the waste classifier, the collection
//! point registry and the notification service.
//!
//! Every operation suspends for the latency configured in the
//! [`SimulationProfile`] and then draws its answer at random from fixed
//! reference data.

/// Reference data: waste catalog, collection points and demo seed data.
pub mod catalog;

use std::ops::RangeInclusive;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use uuid::Uuid;

use wastewise_core::{
    model::{
        IdentificationRequest, IdentificationResult, NotificationAck, NotificationRequest,
        ScanRequest, ScanResult, WasteItem,
    },
    plugin::ProviderBundle,
    ports::{Classifier, NotificationDispatcher, PortError, ScanLookup, processing_label},
    profile::{SimulationProfile, simulate_latency},
};

use crate::catalog::{SCAN_CANDIDATES, ScanCandidate, waste_catalog};

/// Confidence range reported by the simulated classifier, in percent.
pub const CONFIDENCE_RANGE: RangeInclusive<u8> = 80..=99;

const BACKEND_NAME: &str = "simulated";

fn rng_from(seed: Option<u64>) -> Mutex<StdRng> {
    Mutex::new(seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64))
}

/// Classifier that picks a catalog item uniformly at random.
pub struct SimClassifier {
    catalog: Vec<WasteItem>,
    latency: Duration,
    rng: Mutex<StdRng>,
}

impl SimClassifier {
    /// Create a classifier over `catalog`.
    #[must_use]
    pub fn new(catalog: Vec<WasteItem>, latency: Duration, seed: Option<u64>) -> Self {
        Self {
            catalog,
            latency,
            rng: rng_from(seed),
        }
    }
}

#[async_trait]
impl Classifier for SimClassifier {
    fn name(&self) -> &str {
        BACKEND_NAME
    }

    async fn identify(
        &self,
        _request: &IdentificationRequest,
    ) -> Result<IdentificationResult, PortError> {
        simulate_latency(self.latency).await;

        let (item, confidence) = {
            let mut rng = self.rng.lock();
            let item = self
                .catalog
                .choose(&mut *rng)
                .cloned()
                .ok_or(PortError::EmptyCandidates("waste catalog"))?;
            (item, rng.gen_range(CONFIDENCE_RANGE))
        };

        Ok(IdentificationResult {
            item,
            confidence,
            timestamp: Utc::now(),
            processing_time: processing_label(self.latency),
        })
    }
}

/// QR lookup that resolves any code to one of a fixed set of collection points.
pub struct SimScanLookup {
    candidates: Vec<ScanCandidate>,
    latency: Duration,
    rng: Mutex<StdRng>,
}

impl SimScanLookup {
    /// Create a lookup over `candidates`.
    #[must_use]
    pub fn new(candidates: Vec<ScanCandidate>, latency: Duration, seed: Option<u64>) -> Self {
        Self {
            candidates,
            latency,
            rng: rng_from(seed),
        }
    }
}

#[async_trait]
impl ScanLookup for SimScanLookup {
    fn name(&self) -> &str {
        BACKEND_NAME
    }

    async fn lookup(&self, request: &ScanRequest) -> Result<ScanResult, PortError> {
        simulate_latency(self.latency).await;

        let candidate = self
            .candidates
            .choose(&mut *self.rng.lock())
            .cloned()
            .ok_or(PortError::EmptyCandidates("collection points"))?;

        tracing::trace!(qr = %request.qr_data, point = candidate.id, "simulated scan");

        Ok(ScanResult {
            id: candidate.id.to_owned(),
            waste_type: candidate.waste_type.to_owned(),
            points: candidate.points,
            location: candidate.location.to_owned(),
            verified: candidate.verified,
            timestamp: Utc::now(),
            processing_time: processing_label(self.latency),
        })
    }
}

/// Dispatcher that acknowledges every registration after a short delay.
pub struct SimDispatcher {
    latency: Duration,
}

impl SimDispatcher {
    /// Create a dispatcher with the given delay.
    #[must_use]
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

#[async_trait]
impl NotificationDispatcher for SimDispatcher {
    fn name(&self) -> &str {
        BACKEND_NAME
    }

    async fn dispatch(&self, request: &NotificationRequest) -> Result<NotificationAck, PortError> {
        simulate_latency(self.latency).await;

        Ok(NotificationAck {
            notification_id: format!("NTF-{}", Uuid::new_v4().simple()),
            message: format!(
                "{} notification set for vehicle {}",
                request.notification_type, request.vehicle_id
            ),
        })
    }
}

/// Build the fully simulated backend bundle.
#[must_use]
pub fn plugin(profile: SimulationProfile) -> ProviderBundle {
    build(profile, None)
}

/// Build the simulated bundle with reproducible random draws.
#[must_use]
pub fn seeded_plugin(profile: SimulationProfile, seed: u64) -> ProviderBundle {
    build(profile, Some(seed))
}

fn build(profile: SimulationProfile, seed: Option<u64>) -> ProviderBundle {
    let classifier = Arc::new(SimClassifier::new(waste_catalog(), profile.identify, seed));
    let scan_lookup = Arc::new(SimScanLookup::new(
        SCAN_CANDIDATES.to_vec(),
        profile.scan,
        seed,
    ));
    let dispatcher = Arc::new(SimDispatcher::new(profile.notification));

    ProviderBundle {
        classifier,
        scan_lookup,
        dispatcher,
    }
}
