// src/types/expression.rs
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString};

use crate::errors::{GeneticsError, Result};

/// How the two alleles at a locus combine into the observed trait value.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ExpressionType {
    /// Only the allele with the higher dominance index shows (1,2 -> 2).
    Complete,
    /// Blend: the mean of both allele values (1,2 -> 1.5).
    Partial,
    /// Both values show side by side (1,2 -> 1&2).
    #[strum(to_string = "co", serialize = "codominant")]
    Co,
}

impl ExpressionType {
    /// Parses an expression name (`"complete"`, `"partial"`, `"co"`).
    pub fn parse(name: &str) -> Result<Self> {
        Self::from_str(name.trim())
            .map_err(|_| GeneticsError::InvalidExpressionType(name.to_string()))
    }

    /// Complete dominance snaps mutated values to whole numbers.
    pub fn is_discrete(self) -> bool {
        matches!(self, ExpressionType::Complete)
    }
}

#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ReproductionMode {
    #[default]
    Asexual,
    /// Individuals carry a sex, drawn 50/50 at birth.
    Sexual,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Sex {
    Female,
    Male,
}
