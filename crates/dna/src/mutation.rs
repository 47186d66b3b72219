// src/mutation.rs
use tracing::trace;

use crate::errors::Result;
use crate::random::RandomSource;
use crate::registry::SpeciesRegistry;
use crate::types::{Allele, ExpressionType, MutationBounds};

/// Mutates one allele of `trait_name` within the trait's mutation bounds.
///
/// The candidate is drawn uniformly from `value ± range/2`: a whole number for
/// complete dominance, a real number otherwise. Candidates outside
/// `[min, max]` are dropped and the allele comes back unchanged. The
/// dominance index is never touched.
pub fn mutate<R: RandomSource + ?Sized>(
    registry: &SpeciesRegistry,
    species: &str,
    trait_name: &str,
    allele: Allele,
    rng: &mut R,
) -> Result<Allele> {
    let definition = registry.gene_definition(species, trait_name)?;
    Ok(mutate_allele(
        definition.expression,
        &definition.bounds,
        allele,
        rng,
    ))
}

pub(crate) fn mutate_allele<R: RandomSource + ?Sized>(
    expression: ExpressionType,
    bounds: &MutationBounds,
    allele: Allele,
    rng: &mut R,
) -> Allele {
    let (low, high) = bounds.window(allele.value);
    if !(low.is_finite() && high.is_finite() && low <= high) {
        return allele;
    }

    let candidate = if expression.is_discrete() {
        let (low, high) = (low.ceil(), high.floor());
        if low > high {
            // no whole number within reach
            return allele;
        }
        if low < i64::MIN as f64 || high >= i64::MAX as f64 {
            // window not representable as i64
            return allele;
        }
        rng.random_int_inclusive(low as i64, high as i64) as f64
    } else {
        rng.random_float_in_range(low, high)
    };

    if bounds.accepts(candidate) {
        trace!("Mutation accepted: {} -> {}", allele.value, candidate);
        allele.with_value(candidate)
    } else {
        trace!(
            "Mutation rejected: candidate {} outside [{}, {:?}]",
            candidate,
            bounds.min,
            bounds.max
        );
        allele
    }
}
