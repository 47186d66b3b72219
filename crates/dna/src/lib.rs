//! Lightweight genetics engine based on Mendelian inheritance.
//!
//! Species are registered once in a [`SpeciesRegistry`] with their genes
//! (initial value, [`ExpressionType`], mutation bounds). Organisms carry a
//! [`Genotype`] created by the registry's factory or by [`Meiosis`], and
//! their observable traits are derived on demand as a [`Phenotype`].
//!
//! All randomness flows through a caller-supplied [`RandomSource`]; any
//! `rand::Rng` works, and a seeded one makes every run reproducible.
//!
//! # Example
//! ```
//! use dna::{ExpressionType, GeneticsConfig, Meiosis, MutationRate, Phenotype, SpeciesRegistry};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut registry = SpeciesRegistry::new();
//! registry.create_species("spoid")?;
//! registry.define_gene("spoid", "width", 40.0, ExpressionType::Partial, 40.0, 20.0, None)?;
//!
//! let config = GeneticsConfig::new(MutationRate::new(5)?).with_seed(7);
//! let meiosis = Meiosis::new(config);
//! let mut rng: StdRng = config.rng();
//!
//! let parent = registry.new_genotype("spoid", &mut rng)?;
//! let child = meiosis.self_fertilize(&registry, "spoid", &parent, &mut rng)?;
//! let phenotype = Phenotype::express(&child);
//! assert!(phenotype.value("width").unwrap() >= 20.0);
//! # Ok::<(), dna::GeneticsError>(())
//! ```

#[cfg(feature = "bevy")]
mod bevy_adapter;

pub mod catalog;
pub mod config;
pub mod errors;
pub mod genome;
pub mod meiosis;
pub mod mutation;
pub mod phenotype;
pub mod random;
pub mod registry;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;

#[cfg(feature = "bevy")]
pub use bevy_adapter::*;

pub use catalog::{
    load_catalog_from_file, save_catalog_to_file, GeneData, SpeciesCatalog, SpeciesData,
};
pub use config::{GeneticsConfig, MutationRate};
pub use errors::{CatalogError, GeneticsError};
pub use genome::Genotype;
pub use meiosis::Meiosis;
pub use mutation::mutate;
pub use phenotype::{ExpressedTrait, Phenotype};
pub use random::RandomSource;
pub use registry::{Species, SpeciesRegistry};
pub use types::{
    Allele, ExpressionType, GeneDefinition, GenePair, MutationBounds, ReproductionMode, Sex,
    NEUTRAL_DOMINANCE,
};
