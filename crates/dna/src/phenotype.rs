// src/phenotype.rs
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::genome::Genotype;
use crate::types::{ExpressionType, GenePair, Sex};

// --- ExpressedTrait ---

/// Observed value of one trait.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ExpressedTrait {
    /// Complete or partial dominance collapse the pair into one number.
    Value(f64),
    /// Co-dominance shows both allele values, in allele order. How they are
    /// combined (two stripe colours, a mottled coat, ...) is up to the host.
    Pair(f64, f64),
}

impl ExpressedTrait {
    /// Expresses a single locus according to its expression type.
    pub fn from_gene_pair(pair: &GenePair) -> Self {
        let (a, b) = (pair.allele1, pair.allele2);
        match pair.expression {
            ExpressionType::Complete => {
                // ties go to allele1
                if a.dominance_index - b.dominance_index >= 0.0 {
                    ExpressedTrait::Value(a.value)
                } else {
                    ExpressedTrait::Value(b.value)
                }
            }
            ExpressionType::Partial => ExpressedTrait::Value((a.value + b.value) / 2.0),
            ExpressionType::Co => ExpressedTrait::Pair(a.value, b.value),
        }
    }

    pub fn value(&self) -> Option<f64> {
        match *self {
            ExpressedTrait::Value(value) => Some(value),
            ExpressedTrait::Pair(..) => None,
        }
    }

    pub fn pair(&self) -> Option<(f64, f64)> {
        match *self {
            ExpressedTrait::Pair(first, second) => Some((first, second)),
            ExpressedTrait::Value(_) => None,
        }
    }
}

// --- Phenotype ---

/// Expressed traits of one organism, derived from its genotype on demand.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "bevy", derive(bevy::prelude::Component))]
pub struct Phenotype {
    species: String,
    sex: Option<Sex>,
    traits: BTreeMap<String, ExpressedTrait>,
}

impl Phenotype {
    /// Expresses every locus of `genotype`. Pure; does not check the
    /// genotype against its species (see `SpeciesRegistry::express_phenotype`).
    pub fn express(genotype: &Genotype) -> Self {
        Self {
            species: genotype.species().to_string(),
            sex: genotype.sex(),
            traits: genotype
                .gene_pairs()
                .map(|(name, pair)| (name.to_string(), ExpressedTrait::from_gene_pair(pair)))
                .collect(),
        }
    }

    pub fn species(&self) -> &str {
        &self.species
    }

    pub fn sex(&self) -> Option<Sex> {
        self.sex
    }

    pub fn get(&self, trait_name: &str) -> Option<&ExpressedTrait> {
        self.traits.get(trait_name)
    }

    /// Single expressed value; `None` for unknown or co-dominant traits.
    pub fn value(&self, trait_name: &str) -> Option<f64> {
        self.get(trait_name).and_then(ExpressedTrait::value)
    }

    /// Both values of a co-dominant trait.
    pub fn pair(&self, trait_name: &str) -> Option<(f64, f64)> {
        self.get(trait_name).and_then(ExpressedTrait::pair)
    }

    pub fn traits(&self) -> impl Iterator<Item = (&str, &ExpressedTrait)> {
        self.traits.iter().map(|(name, expressed)| (name.as_str(), expressed))
    }

    pub fn len(&self) -> usize {
        self.traits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.traits.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Allele, MutationBounds};

    fn pair(expression: ExpressionType, allele1: Allele, allele2: Allele) -> GenePair {
        GenePair {
            allele1,
            allele2,
            bounds: MutationBounds::new("t", 1.0, 0.0, None).unwrap(),
            expression,
        }
    }

    #[test]
    fn complete_dominance_shows_higher_index() {
        // brown = 1, blue = 2
        let eye_color = pair(
            ExpressionType::Complete,
            Allele::new(1.0, 0.9),
            Allele::new(2.0, 0.3),
        );
        assert_eq!(ExpressedTrait::from_gene_pair(&eye_color), ExpressedTrait::Value(1.0));

        let flipped = pair(
            ExpressionType::Complete,
            Allele::new(1.0, 0.3),
            Allele::new(2.0, 0.9),
        );
        assert_eq!(ExpressedTrait::from_gene_pair(&flipped), ExpressedTrait::Value(2.0));
    }

    #[test]
    fn complete_dominance_tie_favours_first_allele() {
        let tie = pair(
            ExpressionType::Complete,
            Allele::new(7.0, 0.5),
            Allele::new(9.0, 0.5),
        );
        assert_eq!(ExpressedTrait::from_gene_pair(&tie), ExpressedTrait::Value(7.0));
    }

    #[test]
    fn partial_dominance_is_exact_mean() {
        let height = pair(
            ExpressionType::Partial,
            Allele::new(10.0, 0.1),
            Allele::new(20.0, 0.8),
        );
        assert_eq!(ExpressedTrait::from_gene_pair(&height), ExpressedTrait::Value(15.0));

        let odd = pair(
            ExpressionType::Partial,
            Allele::new(0.1, 0.5),
            Allele::new(0.2, 0.5),
        );
        assert_eq!(
            ExpressedTrait::from_gene_pair(&odd).value(),
            Some((0.1 + 0.2) / 2.0)
        );
    }

    #[test]
    fn co_dominance_keeps_both_values_in_order() {
        let stripes = pair(ExpressionType::Co, Allele::new(2.0, 0.9), Allele::new(0.0, 0.1));
        let expressed = ExpressedTrait::from_gene_pair(&stripes);
        assert_eq!(expressed.pair(), Some((2.0, 0.0)));
        assert_eq!(expressed.value(), None);
    }
}
