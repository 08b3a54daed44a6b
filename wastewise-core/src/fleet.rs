//! Process-wide store of vehicle route progress.

use std::collections::HashSet;

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::model::{VehicleId, VehicleState};

/// Upper bound (exclusive) of the progress gained per tracking read, in percent.
pub const MAX_STEP: f64 = 10.0;

struct FleetTable {
    vehicles: Vec<VehicleState>,
    rng: StdRng,
}

/// Owns the tracked vehicles and advances them on every observation.
///
/// The vehicle table and its random source sit behind a single lock, so
/// concurrent observations apply their increments one after another and a
/// vehicle's progress never goes backwards.
pub struct FleetTracker {
    table: Mutex<FleetTable>,
}

impl FleetTracker {
    /// Start tracking the seeded vehicles with an entropy-seeded random source.
    #[must_use]
    pub fn new(seed: Vec<VehicleState>) -> Self {
        Self::with_rng(seed, StdRng::from_entropy())
    }

    /// Start tracking with a reproducible random source.
    #[must_use]
    pub fn seeded(seed: Vec<VehicleState>, rng_seed: u64) -> Self {
        Self::with_rng(seed, StdRng::seed_from_u64(rng_seed))
    }

    fn with_rng(seed: Vec<VehicleState>, rng: StdRng) -> Self {
        let mut seen = HashSet::<VehicleId>::new();
        let mut vehicles = Vec::with_capacity(seed.len());

        for vehicle in seed {
            if !seen.insert(vehicle.id.clone()) {
                tracing::warn!(
                    vehicle = %vehicle.id,
                    "duplicate vehicle in fleet seed, keeping first"
                );
                continue;
            }
            vehicles.push(vehicle.normalized());
        }

        tracing::debug!(vehicles = vehicles.len(), "fleet tracker initialised");

        Self {
            table: Mutex::new(FleetTable { vehicles, rng }),
        }
    }

    /// Advance every active vehicle by a random step in `[0, MAX_STEP)` and
    /// return the updated fleet.
    pub fn observe(&self) -> Vec<VehicleState> {
        let mut table = self.table.lock();
        let FleetTable { vehicles, rng } = &mut *table;

        for vehicle in vehicles.iter_mut() {
            if vehicle.is_completed() {
                continue;
            }
            let step = rng.gen_range(0.0..MAX_STEP);
            if vehicle.advance(step) {
                tracing::info!(vehicle = %vehicle.id, "vehicle completed its route");
            }
        }

        vehicles.clone()
    }

    /// Current fleet without advancing anything.
    #[must_use]
    pub fn snapshot(&self) -> Vec<VehicleState> {
        self.table.lock().vehicles.clone()
    }

    /// Number of tracked vehicles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.table.lock().vehicles.len()
    }

    /// Whether no vehicle is tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
