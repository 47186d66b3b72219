// src/config.rs
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;
use tracing::info;

use crate::errors::{GeneticsError, Result};

/// Average number of locus-level meiosis events per mutation.
///
/// Higher is rarer: each locus of each child mutates with probability
/// `1 / rate`. Has no default value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct MutationRate(NonZeroU32);

impl MutationRate {
    pub fn new(rate: u32) -> Result<Self> {
        NonZeroU32::new(rate)
            .map(Self)
            .ok_or(GeneticsError::InvalidMutationRate(rate))
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl TryFrom<u32> for MutationRate {
    type Error = GeneticsError;

    fn try_from(rate: u32) -> Result<Self> {
        Self::new(rate)
    }
}

impl From<MutationRate> for u32 {
    fn from(rate: MutationRate) -> Self {
        rate.get()
    }
}

/// Process-wide genetics settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneticsConfig {
    pub mutation_rate: MutationRate,
    /// Fixed RNG seed for reproducible worlds; `None` seeds from entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl GeneticsConfig {
    pub fn new(mutation_rate: MutationRate) -> Self {
        Self {
            mutation_rate,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Random source for one world.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => {
                info!("Using fixed RNG seed: {}", seed);
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        }
    }
}
