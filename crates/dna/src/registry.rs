// src/registry.rs
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, info};

use crate::errors::{GeneticsError, Result};
use crate::genome::Genotype;
use crate::mutation::mutate;
use crate::phenotype::Phenotype;
use crate::random::RandomSource;
use crate::types::{ExpressionType, GeneDefinition, MutationBounds, ReproductionMode, Sex};

/// Gene definitions of one species, keyed (and ordered) by trait name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Species {
    name: String,
    mode: ReproductionMode,
    genes: BTreeMap<String, GeneDefinition>,
}

impl Species {
    fn new(name: &str, mode: ReproductionMode) -> Self {
        Self {
            name: name.to_string(),
            mode,
            genes: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mode(&self) -> ReproductionMode {
        self.mode
    }

    pub fn gene(&self, trait_name: &str) -> Option<&GeneDefinition> {
        self.genes.get(trait_name)
    }

    /// Definitions in trait-name order.
    pub fn genes(&self) -> impl Iterator<Item = &GeneDefinition> {
        self.genes.values()
    }

    pub fn trait_names(&self) -> impl Iterator<Item = &str> {
        self.genes.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    pub(crate) fn gene_or_err(&self, trait_name: &str) -> Result<&GeneDefinition> {
        self.genes
            .get(trait_name)
            .ok_or_else(|| GeneticsError::UnknownTrait {
                species: self.name.clone(),
                trait_name: trait_name.to_string(),
            })
    }

    /// Draws a sex for a new member; asexual species consume no randomness.
    pub(crate) fn draw_sex<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Option<Sex> {
        match self.mode {
            ReproductionMode::Asexual => None,
            ReproductionMode::Sexual => Some(if rng.coin_flip() {
                Sex::Female
            } else {
                Sex::Male
            }),
        }
    }

    /// Checks that `genotype` was built for this species and carries exactly
    /// its traits.
    pub fn validate(&self, genotype: &Genotype) -> Result<()> {
        let malformed = |reason: String| GeneticsError::MalformedGenotype {
            species: self.name.clone(),
            reason,
        };
        if genotype.species() != self.name {
            return Err(malformed(format!(
                "genotype belongs to species '{}'",
                genotype.species()
            )));
        }
        if let Some(missing) = self.trait_names().find(|t| genotype.gene_pair(t).is_none()) {
            return Err(malformed(format!("missing trait '{missing}'")));
        }
        if let Some(extra) = genotype.trait_names().find(|t| !self.genes.contains_key(*t)) {
            return Err(malformed(format!("unexpected trait '{extra}'")));
        }
        Ok(())
    }
}

/// Catalog of species and their gene definitions.
///
/// Populated during setup through `&mut self` methods and read-only
/// afterwards, so a finished registry can be shared (e.g. behind an `Arc`)
/// by any number of reproduction and expression calls.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "bevy", derive(bevy::prelude::Resource))]
pub struct SpeciesRegistry {
    species: BTreeMap<String, Species>,
}

impl SpeciesRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an empty, asexual species.
    pub fn create_species(&mut self, name: &str) -> Result<&Species> {
        self.create_species_with_mode(name, ReproductionMode::Asexual)
    }

    pub fn create_species_with_mode(
        &mut self,
        name: &str,
        mode: ReproductionMode,
    ) -> Result<&Species> {
        if self.species.contains_key(name) {
            return Err(GeneticsError::DuplicateSpecies(name.to_string()));
        }
        info!("Registered species '{}' ({})", name, mode);
        Ok(&*self
            .species
            .entry(name.to_string())
            .or_insert_with(|| Species::new(name, mode)))
    }

    /// Adds a trait to a species. Both prototype alleles carry
    /// `initial_value` with neutral dominance.
    #[allow(clippy::too_many_arguments)]
    pub fn define_gene(
        &mut self,
        species: &str,
        trait_name: &str,
        initial_value: f64,
        expression: ExpressionType,
        mutation_range: f64,
        mutation_min: f64,
        mutation_max: Option<f64>,
    ) -> Result<&GeneDefinition> {
        let entry = self
            .species
            .get_mut(species)
            .ok_or_else(|| GeneticsError::UnknownSpecies(species.to_string()))?;
        if entry.genes.contains_key(trait_name) {
            return Err(GeneticsError::DuplicateGene {
                species: species.to_string(),
                trait_name: trait_name.to_string(),
            });
        }
        let bounds = MutationBounds::new(trait_name, mutation_range, mutation_min, mutation_max)?;

        debug!(
            "Defined gene '{}' for species '{}': initial={}, expression={}, bounds={:?}",
            trait_name, species, initial_value, expression, bounds
        );
        Ok(&*entry
            .genes
            .entry(trait_name.to_string())
            .or_insert(GeneDefinition {
                name: trait_name.to_string(),
                initial_value,
                expression,
                bounds,
            }))
    }

    /// [`define_gene`](Self::define_gene) with the expression type given by
    /// name (`"complete"`, `"partial"`, `"co"`).
    #[allow(clippy::too_many_arguments)]
    pub fn define_gene_str(
        &mut self,
        species: &str,
        trait_name: &str,
        initial_value: f64,
        expression: &str,
        mutation_range: f64,
        mutation_min: f64,
        mutation_max: Option<f64>,
    ) -> Result<&GeneDefinition> {
        let expression = ExpressionType::parse(expression)?;
        self.define_gene(
            species,
            trait_name,
            initial_value,
            expression,
            mutation_range,
            mutation_min,
            mutation_max,
        )
    }

    pub fn species(&self, name: &str) -> Result<&Species> {
        self.species
            .get(name)
            .ok_or_else(|| GeneticsError::UnknownSpecies(name.to_string()))
    }

    pub fn gene_definition(&self, species: &str, trait_name: &str) -> Result<&GeneDefinition> {
        self.species(species)?.gene_or_err(trait_name)
    }

    pub fn contains_species(&self, name: &str) -> bool {
        self.species.contains_key(name)
    }

    pub fn species_names(&self) -> impl Iterator<Item = &str> {
        self.species.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.species.len()
    }

    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }

    // --- Genotype factory ---

    /// Creates a generation-zero genotype by copying every prototype locus
    /// of the species.
    pub fn new_genotype<R: RandomSource + ?Sized>(
        &self,
        species: &str,
        rng: &mut R,
    ) -> Result<Genotype> {
        let entry = self.species(species)?;
        let mut genotype = Genotype::new(species, entry.draw_sex(rng));
        for definition in entry.genes() {
            genotype.insert_gene_pair(&definition.name, definition.prototype());
        }
        Ok(genotype)
    }

    /// Like [`new_genotype`](Self::new_genotype), but both alleles of every
    /// trait in `traits` are passed through a mutation, giving a starting
    /// population some spread.
    pub fn varied_genotype<R: RandomSource + ?Sized>(
        &self,
        species: &str,
        traits: &[&str],
        rng: &mut R,
    ) -> Result<Genotype> {
        let entry = self.species(species)?;
        for trait_name in traits {
            entry.gene_or_err(trait_name)?;
        }
        let mut genotype = self.new_genotype(species, rng)?;
        for trait_name in traits {
            let [allele1, allele2] = genotype
                .gene_pair(trait_name)
                .map(|pair| pair.alleles())
                .ok_or_else(|| GeneticsError::UnknownTrait {
                    species: species.to_string(),
                    trait_name: trait_name.to_string(),
                })?;
            let allele1 = mutate(self, species, trait_name, allele1, rng)?;
            let allele2 = mutate(self, species, trait_name, allele2, rng)?;
            genotype = genotype.with_alleles(trait_name, allele1, allele2)?;
        }
        Ok(genotype)
    }

    // --- Phenotype ---

    /// Expresses `genotype` after checking it against its species' current
    /// definitions.
    pub fn express_phenotype(&self, genotype: &Genotype) -> Result<Phenotype> {
        self.species(genotype.species())?.validate(genotype)?;
        Ok(Phenotype::express(genotype))
    }
}
