// src/meiosis.rs
use tracing::debug;

use crate::config::{GeneticsConfig, MutationRate};
use crate::errors::{GeneticsError, Result};
use crate::genome::Genotype;
use crate::mutation::mutate_allele;
use crate::random::RandomSource;
use crate::registry::SpeciesRegistry;
use crate::types::{Allele, GenePair};

/// Produces child genotypes from one or two parents.
///
/// Loci are unlinked: every trait segregates independently, and every trait
/// gets its own mutation roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "bevy", derive(bevy::prelude::Resource))]
pub struct Meiosis {
    config: GeneticsConfig,
}

impl Meiosis {
    pub fn new(config: GeneticsConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneticsConfig {
        &self.config
    }

    pub fn mutation_rate(&self) -> MutationRate {
        self.config.mutation_rate
    }

    /// Takes effect from the next `reproduce` call on.
    pub fn set_mutation_rate(&mut self, rate: MutationRate) {
        self.config.mutation_rate = rate;
    }

    /// Builds a child of `parent_a` and `parent_b`.
    ///
    /// With `parent_b = None` the parent fertilizes itself: both alleles of
    /// each child locus are drawn, independently, from `parent_a`'s own pair.
    /// That is not cloning; a heterozygous parent can have homozygous young.
    ///
    /// Per trait:
    /// 1. one allele of each parent is picked with probability 1/2,
    /// 2. both are copied into the child,
    /// 3. with probability `1 / mutation_rate` one of the two copies (chosen
    ///    1/2 each) is mutated,
    /// 4. mutation bounds and expression type come from `parent_a`'s locus.
    ///
    /// Neither parent is modified.
    pub fn reproduce<R: RandomSource + ?Sized>(
        &self,
        registry: &SpeciesRegistry,
        species: &str,
        parent_a: &Genotype,
        parent_b: Option<&Genotype>,
        rng: &mut R,
    ) -> Result<Genotype> {
        let entry = registry.species(species)?;
        entry.validate(parent_a)?;
        let parent_b = match parent_b {
            Some(parent_b) => {
                entry.validate(parent_b)?;
                parent_b
            }
            None => parent_a,
        };
        let rate = i64::from(self.config.mutation_rate.get());

        let mut child = Genotype::new(species, None);
        let mut mutations = 0usize;
        for definition in entry.genes() {
            let trait_name = definition.name.as_str();
            let locus_a = locus(parent_a, trait_name)?;
            let locus_b = locus(parent_b, trait_name)?;

            let mut allele1 = segregate(locus_a, rng);
            let mut allele2 = segregate(locus_b, rng);

            if rng.random_int_inclusive(1, rate) == 1 {
                mutations += 1;
                let target = if rng.coin_flip() {
                    &mut allele1
                } else {
                    &mut allele2
                };
                *target = mutate_allele(definition.expression, &definition.bounds, *target, rng);
            }

            child.insert_gene_pair(
                trait_name,
                GenePair {
                    allele1,
                    allele2,
                    bounds: locus_a.bounds,
                    expression: locus_a.expression,
                },
            );
        }
        child.set_sex(entry.draw_sex(rng));

        debug!(
            "Meiosis for '{}': {} loci, {} mutation attempts",
            species,
            child.len(),
            mutations
        );
        Ok(child)
    }

    /// Self-fertilization: `reproduce` with `parent` in both roles.
    pub fn self_fertilize<R: RandomSource + ?Sized>(
        &self,
        registry: &SpeciesRegistry,
        species: &str,
        parent: &Genotype,
        rng: &mut R,
    ) -> Result<Genotype> {
        self.reproduce(registry, species, parent, None, rng)
    }
}

fn locus<'a>(genotype: &'a Genotype, trait_name: &str) -> Result<&'a GenePair> {
    genotype
        .gene_pair(trait_name)
        .ok_or_else(|| GeneticsError::MalformedGenotype {
            species: genotype.species().to_string(),
            reason: format!("missing trait '{trait_name}'"),
        })
}

/// Picks one of the two alleles at a locus, 1/2 each.
fn segregate<R: RandomSource + ?Sized>(pair: &GenePair, rng: &mut R) -> Allele {
    if rng.coin_flip() {
        pair.allele1
    } else {
        pair.allele2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ScriptedSource;
    use crate::types::{ExpressionType, ReproductionMode};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn meiosis(rate: u32) -> Meiosis {
        Meiosis::new(GeneticsConfig::new(MutationRate::new(rate).unwrap()))
    }

    fn registry() -> SpeciesRegistry {
        let mut registry = SpeciesRegistry::new();
        registry.create_species("spoid").unwrap();
        registry
            .define_gene("spoid", "width", 40.0, ExpressionType::Partial, 40.0, 0.0, Some(100.0))
            .unwrap();
        registry
    }

    fn parent(registry: &SpeciesRegistry, a1: f64, a2: f64) -> Genotype {
        let mut rng = StdRng::seed_from_u64(0);
        registry
            .new_genotype("spoid", &mut rng)
            .unwrap()
            .with_alleles("width", Allele::new(a1, 0.1), Allele::new(a2, 0.2))
            .unwrap()
    }

    #[test]
    fn segregates_one_allele_from_each_parent() {
        let registry = registry();
        let mother = parent(&registry, 10.0, 20.0);
        let father = parent(&registry, 30.0, 40.0);

        // mother -> allele2, father -> allele1, mutation roll misses
        let mut rng = ScriptedSource::ints(&[2, 1, 3]);
        let child = meiosis(5)
            .reproduce(&registry, "spoid", &mother, Some(&father), &mut rng)
            .unwrap();

        let pair = child.gene_pair("width").unwrap();
        assert_eq!(pair.allele1, Allele::new(20.0, 0.2));
        assert_eq!(pair.allele2, Allele::new(30.0, 0.1));
        assert_eq!(rng.int_requests(), &[(1, 2), (1, 2), (1, 5)]);
        assert!(rng.is_exhausted());
    }

    #[test]
    fn mutation_hits_exactly_one_chosen_allele() {
        let registry = registry();
        let mother = parent(&registry, 10.0, 20.0);
        let father = parent(&registry, 30.0, 40.0);

        // picks, roll hits, second allele mutates to 35
        let mut rng = ScriptedSource::new(&[1, 2, 1, 2], &[35.0]);
        let child = meiosis(1)
            .reproduce(&registry, "spoid", &mother, Some(&father), &mut rng)
            .unwrap();

        let pair = child.gene_pair("width").unwrap();
        assert_eq!(pair.allele1, Allele::new(10.0, 0.1));
        assert_eq!(pair.allele2, Allele::new(35.0, 0.2));
        // mutation window is centred on the chosen allele (40 ± 20)
        assert_eq!(rng.float_requests(), &[(20.0, 60.0)]);
    }

    #[test]
    fn every_locus_rolls_and_mutates_on_its_own() {
        let mut registry = registry();
        registry
            .define_gene("spoid", "length", 50.0, ExpressionType::Partial, 10.0, 0.0, Some(100.0))
            .unwrap();
        let two_traits = |length: (f64, f64), width: (f64, f64)| {
            let mut rng = StdRng::seed_from_u64(0);
            registry
                .new_genotype("spoid", &mut rng)
                .unwrap()
                .with_alleles("length", Allele::new(length.0, 0.1), Allele::new(length.1, 0.2))
                .unwrap()
                .with_alleles("width", Allele::new(width.0, 0.1), Allele::new(width.1, 0.2))
                .unwrap()
        };
        let mother = two_traits((50.0, 52.0), (10.0, 20.0));
        let father = two_traits((54.0, 56.0), (30.0, 40.0));

        // length: picks 1/2, roll, first allele mutates
        // width: picks 2/1, roll, second allele mutates
        let mut rng = ScriptedSource::new(&[1, 2, 1, 1, 2, 1, 1, 2], &[47.0, 33.0]);
        let child = meiosis(1)
            .reproduce(&registry, "spoid", &mother, Some(&father), &mut rng)
            .unwrap();

        let rolls = rng.int_requests().iter().filter(|r| **r == (1, 1)).count();
        assert_eq!(rolls, 2);
        assert_eq!(rng.float_requests(), &[(45.0, 55.0), (10.0, 50.0)]);
        assert!(rng.is_exhausted());

        let length = child.gene_pair("length").unwrap();
        assert_eq!(length.allele1, Allele::new(47.0, 0.1));
        assert_eq!(length.allele2, Allele::new(56.0, 0.2));
        let width = child.gene_pair("width").unwrap();
        assert_eq!(width.allele1, Allele::new(20.0, 0.2));
        assert_eq!(width.allele2, Allele::new(33.0, 0.1));
    }

    #[test]
    fn self_fertilization_draws_both_alleles_from_the_one_parent() {
        let registry = registry();
        let single = parent(&registry, 10.0, 20.0);

        let mut rng = ScriptedSource::ints(&[2, 2, 4]);
        let child = meiosis(5)
            .self_fertilize(&registry, "spoid", &single, &mut rng)
            .unwrap();
        let pair = child.gene_pair("width").unwrap();
        assert_eq!(pair.allele1, Allele::new(20.0, 0.2));
        assert_eq!(pair.allele2, Allele::new(20.0, 0.2));
    }

    #[test]
    fn parents_are_left_untouched() {
        let registry = registry();
        let mother = parent(&registry, 10.0, 20.0);
        let father = parent(&registry, 30.0, 40.0);
        let (mother_before, father_before) = (mother.clone(), father.clone());

        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..100 {
            meiosis(1)
                .reproduce(&registry, "spoid", &mother, Some(&father), &mut rng)
                .unwrap();
        }
        assert_eq!(mother, mother_before);
        assert_eq!(father, father_before);
    }

    #[test]
    fn same_seed_gives_identical_children() {
        let registry = registry();
        let mother = parent(&registry, 10.0, 20.0);
        let father = parent(&registry, 30.0, 40.0);
        let meiosis = meiosis(2);

        let mut rng_a = StdRng::seed_from_u64(77);
        let mut rng_b = StdRng::seed_from_u64(77);
        for _ in 0..50 {
            let a = meiosis
                .reproduce(&registry, "spoid", &mother, Some(&father), &mut rng_a)
                .unwrap();
            let b = meiosis
                .reproduce(&registry, "spoid", &mother, Some(&father), &mut rng_b)
                .unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn rejects_genotype_of_other_species() {
        let mut registry = registry();
        registry.create_species("blob").unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        let blob = registry.new_genotype("blob", &mut rng).unwrap();
        let spoid = parent(&registry, 1.0, 2.0);

        let err = meiosis(3)
            .reproduce(&registry, "spoid", &spoid, Some(&blob), &mut rng)
            .unwrap_err();
        assert!(matches!(err, GeneticsError::MalformedGenotype { .. }));
    }

    #[test]
    fn rejects_genotype_missing_a_newer_trait() {
        let mut registry = registry();
        let old = parent(&registry, 1.0, 2.0);
        registry
            .define_gene("spoid", "litterSize", 3.0, ExpressionType::Complete, 3.0, 1.0, None)
            .unwrap();

        let mut rng = StdRng::seed_from_u64(5);
        let err = meiosis(3)
            .self_fertilize(&registry, "spoid", &old, &mut rng)
            .unwrap_err();
        assert_eq!(
            err,
            GeneticsError::MalformedGenotype {
                species: "spoid".into(),
                reason: "missing trait 'litterSize'".into()
            }
        );
    }

    #[test]
    fn sexual_species_children_get_a_sex() {
        let mut registry = SpeciesRegistry::new();
        registry
            .create_species_with_mode("spoid", ReproductionMode::Sexual)
            .unwrap();
        registry
            .define_gene("spoid", "width", 40.0, ExpressionType::Partial, 4.0, 0.0, None)
            .unwrap();
        let mut rng = StdRng::seed_from_u64(21);
        let a = registry.new_genotype("spoid", &mut rng).unwrap();
        let b = registry.new_genotype("spoid", &mut rng).unwrap();
        assert!(a.sex().is_some() && b.sex().is_some());

        let child = meiosis(3)
            .reproduce(&registry, "spoid", &a, Some(&b), &mut rng)
            .unwrap();
        assert!(child.sex().is_some());
    }

    #[test]
    fn mutation_rate_can_change_between_calls() {
        let mut meiosis = meiosis(5);
        meiosis.set_mutation_rate(MutationRate::new(2).unwrap());
        assert_eq!(meiosis.mutation_rate().get(), 2);
    }
}
