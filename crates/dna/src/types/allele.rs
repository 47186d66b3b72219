// src/types/allele.rs
use serde::{Deserialize, Serialize};

/// Dominance index given to both prototype alleles of a new gene.
pub const NEUTRAL_DOMINANCE: f64 = 0.5;

/// One value-carrying variant at a locus (e.g. brown eyes).
///
/// `dominance_index` lies in `[0, 1)` and decides which allele shows under
/// complete dominance. Alleles are plain values: copying one into a child
/// never aliases the parent's.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Allele {
    pub value: f64,
    pub dominance_index: f64,
}

impl Allele {
    pub fn new(value: f64, dominance_index: f64) -> Self {
        Self {
            value,
            dominance_index,
        }
    }

    /// Prototype allele: `value` with neutral dominance.
    pub fn neutral(value: f64) -> Self {
        Self::new(value, NEUTRAL_DOMINANCE)
    }

    /// Same dominance, different value.
    pub fn with_value(self, value: f64) -> Self {
        Self { value, ..self }
    }
}
