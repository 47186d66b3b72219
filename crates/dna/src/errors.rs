use thiserror::Error;

/// Caller-input errors reported by the genetics engine.
///
/// None of these leave the engine in a partially updated state.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeneticsError {
    #[error("unknown species: {0}")]
    UnknownSpecies(String),

    #[error("species already registered: {0}")]
    DuplicateSpecies(String),

    #[error("unknown trait '{trait_name}' for species '{species}'")]
    UnknownTrait { species: String, trait_name: String },

    #[error("trait '{trait_name}' already defined for species '{species}'")]
    DuplicateGene { species: String, trait_name: String },

    #[error("invalid expression type: {0}")]
    InvalidExpressionType(String),

    #[error("malformed genotype for species '{species}': {reason}")]
    MalformedGenotype { species: String, reason: String },

    #[error("invalid mutation bounds for trait '{trait_name}': {reason}")]
    InvalidMutationBounds { trait_name: String, reason: String },

    #[error("mutation rate must be at least 1, got {0}")]
    InvalidMutationRate(u32),
}

/// Errors for reading and writing species catalogs.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error(transparent)]
    Genetics(#[from] GeneticsError),
}

pub type Result<T, E = GeneticsError> = std::result::Result<T, E>;
