//! Species catalogs.
//!
//! A catalog is the RON description of every species a world starts with:
//! the genetics settings plus each species' genes. It is read once during
//! setup and applied to a [`SpeciesRegistry`]; a registry can also be
//! exported back into a catalog.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use crate::config::GeneticsConfig;
use crate::errors::{CatalogError, GeneticsError};
use crate::registry::SpeciesRegistry;
use crate::types::{ExpressionType, ReproductionMode};

/// Serializable set of species definitions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesCatalog {
    pub config: GeneticsConfig,
    #[serde(default)]
    pub species: Vec<SpeciesData>,
}

/// One species entry of a catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesData {
    pub name: String,
    #[serde(default)]
    pub mode: ReproductionMode,
    #[serde(default)]
    pub genes: Vec<GeneData>,
}

/// One gene entry. `expression` is the expression type's name
/// (`"complete"`, `"partial"` or `"co"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneData {
    pub name: String,
    pub initial_value: f64,
    pub expression: String,
    pub range: f64,
    pub min: f64,
    #[serde(default)]
    pub max: Option<f64>,
}

impl SpeciesCatalog {
    pub fn from_ron_str(source: &str) -> Result<Self, CatalogError> {
        ron::from_str(source).map_err(|e| CatalogError::Deserialization(e.to_string()))
    }

    pub fn to_ron_string(&self) -> Result<String, CatalogError> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| CatalogError::Serialization(e.to_string()))
    }

    /// Registers every species and gene of the catalog.
    ///
    /// All or nothing: on error `registry` is left exactly as it was.
    pub fn apply(&self, registry: &mut SpeciesRegistry) -> Result<(), GeneticsError> {
        let mut staged = registry.clone();
        for species in &self.species {
            staged.create_species_with_mode(&species.name, species.mode)?;
            for gene in &species.genes {
                staged.define_gene(
                    &species.name,
                    &gene.name,
                    gene.initial_value,
                    ExpressionType::parse(&gene.expression)?,
                    gene.range,
                    gene.min,
                    gene.max,
                )?;
            }
        }
        *registry = staged;

        info!("Applied species catalog: {} species", self.species.len());
        Ok(())
    }

    /// Snapshot of everything currently registered.
    pub fn from_registry(registry: &SpeciesRegistry, config: GeneticsConfig) -> Self {
        let species = registry
            .species_names()
            .filter_map(|name| registry.species(name).ok())
            .map(|species| SpeciesData {
                name: species.name().to_string(),
                mode: species.mode(),
                genes: species
                    .genes()
                    .map(|gene| GeneData {
                        name: gene.name.clone(),
                        initial_value: gene.initial_value,
                        expression: gene.expression.to_string(),
                        range: gene.bounds.range,
                        min: gene.bounds.min,
                        max: gene.bounds.max,
                    })
                    .collect(),
            })
            .collect();
        Self { config, species }
    }
}

/// Reads a catalog file (RON format).
pub fn load_catalog_from_file<P: AsRef<Path>>(path: P) -> Result<SpeciesCatalog, CatalogError> {
    let ron_string =
        std::fs::read_to_string(path.as_ref()).map_err(|e| CatalogError::Io(e.to_string()))?;
    let catalog = SpeciesCatalog::from_ron_str(&ron_string)?;

    info!("Species catalog loaded from {}", path.as_ref().display());
    Ok(catalog)
}

/// Writes a catalog file (RON format).
pub fn save_catalog_to_file<P: AsRef<Path>>(
    catalog: &SpeciesCatalog,
    path: P,
) -> Result<(), CatalogError> {
    let ron_string = catalog.to_ron_string()?;
    std::fs::write(path.as_ref(), ron_string).map_err(|e| CatalogError::Io(e.to_string()))?;

    info!("Species catalog saved to {}", path.as_ref().display());
    Ok(())
}
