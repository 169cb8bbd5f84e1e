//! Synthetic zone augmentation for demos.
//!
//! Off unless explicitly configured: it makes every snapshot nondeterministic
//! unless a seed is supplied.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use zonal_core::{Zone, ZoneCategory};

/// Anchor of the first synthetic zone; each next one steps 0.1° in both axes.
const ANCHOR_LAT: f64 = 15.0;
const ANCHOR_LON: f64 = 75.0;
const STEP_DEG: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoAugmentation {
    /// Synthetic zones appended per snapshot.
    pub count: u32,
    /// Fixed seed for reproducible output; `None` draws from the thread RNG.
    pub seed: Option<u64>,
}

impl DemoAugmentation {
    #[must_use]
    pub const fn new(count: u32, seed: Option<u64>) -> Self {
        Self { count, seed }
    }

    /// Append synthetic zones after `zones`.
    #[must_use]
    pub fn augment(&self, mut zones: Vec<Zone>) -> Vec<Zone> {
        zones.extend(self.synthesize());
        zones
    }

    #[must_use]
    pub fn synthesize(&self) -> Vec<Zone> {
        match self.seed {
            Some(seed) => synthesize_with(self.count, &mut ChaCha8Rng::seed_from_u64(seed)),
            None => synthesize_with(self.count, &mut rand::thread_rng()),
        }
    }
}

fn synthesize_with<R: Rng + ?Sized>(count: u32, rng: &mut R) -> Vec<Zone> {
    (0..count)
        .map(|i| {
            let offset = f64::from(i) * STEP_DEG;
            Zone {
                latitude: Some(ANCHOR_LAT + offset),
                longitude: Some(ANCHOR_LON + offset),
                business_count: Some(rng.gen_range(0..50)),
                transport_count: Some(rng.gen_range(0..30)),
                population: Some(rng.gen_range(0..10_000)),
                category_label: Some(ZoneCategory::Opportunity.label().to_string()),
                adjusted_score: Some(rng.gen_range(0.0..10.0)),
            }
        })
        .collect()
}
