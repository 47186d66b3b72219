// src/genome.rs
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::errors::{GeneticsError, Result};
use crate::types::{Allele, GenePair, Sex};

// --- Genotype ---

/// All allele pairs of one organism, keyed by trait name.
///
/// A genotype is built once (by the factory or by meiosis) and is not changed
/// afterwards; [`Genotype::with_alleles`] returns an edited copy. Its key set
/// always matches the trait set of the species it was built for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "bevy", derive(bevy::prelude::Component))]
pub struct Genotype {
    species: String,
    sex: Option<Sex>,
    gene_pairs: BTreeMap<String, GenePair>,
}

impl Genotype {
    pub(crate) fn new(species: &str, sex: Option<Sex>) -> Self {
        Self {
            species: species.to_string(),
            sex,
            gene_pairs: BTreeMap::new(),
        }
    }

    pub(crate) fn set_sex(&mut self, sex: Option<Sex>) {
        self.sex = sex;
    }

    pub(crate) fn insert_gene_pair(&mut self, trait_name: &str, gene_pair: GenePair) {
        self.gene_pairs.insert(trait_name.to_string(), gene_pair);
    }

    pub fn species(&self) -> &str {
        &self.species
    }

    /// `Some` only for members of sexually reproducing species.
    pub fn sex(&self) -> Option<Sex> {
        self.sex
    }

    pub fn gene_pair(&self, trait_name: &str) -> Option<&GenePair> {
        self.gene_pairs.get(trait_name)
    }

    pub fn gene_pairs(&self) -> impl Iterator<Item = (&str, &GenePair)> {
        self.gene_pairs.iter().map(|(name, pair)| (name.as_str(), pair))
    }

    pub fn trait_names(&self) -> impl Iterator<Item = &str> {
        self.gene_pairs.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.gene_pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gene_pairs.is_empty()
    }

    /// Copy of this genotype with the alleles of one locus replaced.
    ///
    /// Mutation bounds and expression type of the locus are kept.
    pub fn with_alleles(&self, trait_name: &str, allele1: Allele, allele2: Allele) -> Result<Self> {
        let mut edited = self.clone();
        let pair = edited
            .gene_pairs
            .get_mut(trait_name)
            .ok_or_else(|| GeneticsError::UnknownTrait {
                species: self.species.clone(),
                trait_name: trait_name.to_string(),
            })?;
        pair.allele1 = allele1;
        pair.allele2 = allele2;
        Ok(edited)
    }
}
