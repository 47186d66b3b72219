// src/types/mod.rs
pub mod allele;
pub mod expression;
pub mod gene;

pub use allele::*;
pub use expression::*;
pub use gene::*;
