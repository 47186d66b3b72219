#![cfg(feature = "bevy")]

use bevy::prelude::*;

use crate::{Genotype, GeneticsConfig, Meiosis, Phenotype, SpeciesRegistry};

/// Inserts the species registry and meiosis settings as resources and keeps
/// every entity's [`Phenotype`] in sync with its [`Genotype`].
pub struct GeneticsPlugin {
    pub registry: SpeciesRegistry,
    pub config: GeneticsConfig,
}

impl Plugin for GeneticsPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.registry.clone())
            .insert_resource(Meiosis::new(self.config))
            .add_systems(Update, genotype_to_phenotype_system);
    }
}

/// Recomputes the phenotype of entities whose genotype changed.
pub fn genotype_to_phenotype_system(
    mut query: Query<(&Genotype, &mut Phenotype), Changed<Genotype>>,
) {
    for (genotype, mut phenotype) in query.iter_mut() {
        *phenotype = Phenotype::express(genotype);
    }
}
