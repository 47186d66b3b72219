// src/types/gene.rs
use serde::{Deserialize, Serialize};

use super::{Allele, ExpressionType};
use crate::errors::{GeneticsError, Result};

/// Limits for a single mutation step of one trait.
///
/// A mutation draws a candidate within `range / 2` of the current value and
/// only keeps it if it lies in `[min, max]`; `max = None` is unbounded above.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MutationBounds {
    pub range: f64,
    pub min: f64,
    pub max: Option<f64>,
}

impl MutationBounds {
    pub fn new(trait_name: &str, range: f64, min: f64, max: Option<f64>) -> Result<Self> {
        let invalid = |reason: String| GeneticsError::InvalidMutationBounds {
            trait_name: trait_name.to_string(),
            reason,
        };
        if !range.is_finite() || range < 0.0 {
            return Err(invalid(format!("range must be finite and >= 0, got {range}")));
        }
        if !min.is_finite() {
            return Err(invalid(format!("min must be finite, got {min}")));
        }
        if let Some(max) = max {
            if !max.is_finite() || max < min {
                return Err(invalid(format!("max must be finite and >= min ({min}), got {max}")));
            }
        }
        Ok(Self { range, min, max })
    }

    /// Closed interval a mutation of `value` draws its candidate from.
    pub fn window(&self, value: f64) -> (f64, f64) {
        let half = self.range / 2.0;
        (value - half, value + half)
    }

    /// Whether a drawn candidate may replace the current value.
    pub fn accepts(&self, candidate: f64) -> bool {
        candidate >= self.min && self.max.map_or(true, |max| candidate <= max)
    }
}

/// Blueprint for one trait of a species, owned by the registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneDefinition {
    pub name: String,
    pub initial_value: f64,
    pub expression: ExpressionType,
    pub bounds: MutationBounds,
}

impl GeneDefinition {
    /// Generation-zero locus: two identical alleles of neutral dominance.
    pub fn prototype(&self) -> GenePair {
        GenePair {
            allele1: Allele::neutral(self.initial_value),
            allele2: Allele::neutral(self.initial_value),
            bounds: self.bounds,
            expression: self.expression,
        }
    }
}

/// A locus in an individual: two alleles plus the trait's inherited metadata.
///
/// `bounds` and `expression` are copied from the definition and never change
/// across generations; only the alleles do.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenePair {
    pub allele1: Allele,
    pub allele2: Allele,
    pub bounds: MutationBounds,
    pub expression: ExpressionType,
}

impl GenePair {
    pub fn alleles(&self) -> [Allele; 2] {
        [self.allele1, self.allele2]
    }
}
