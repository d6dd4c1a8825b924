use itertools::Itertools;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::validation::Violation;

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ModelError {
    #[error("{shape} failed validation: {}", .violations.iter().join("; "))]
    Validation {
        shape: String,
        violations: Vec<Violation>,
    },

    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}

impl ModelError {
    /// The violations carried by a validation failure, empty for other errors.
    pub fn violations(&self) -> &[Violation] {
        match self {
            ModelError::Validation { violations, .. } => violations,
            ModelError::InvalidFormat(_) => &[],
        }
    }
}
