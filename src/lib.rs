// src/lib.rs
//! Typed request and response shapes for the Amazon EMR cluster-management API.
//!
//! The crate is a data model only: it builds, reads, compares, prints and
//! (de)serializes shapes, and optionally validates them. Signing, transport
//! and retries belong to whatever sends the requests.

#[macro_use]
mod macros;

mod error;
mod traits;
pub mod types;
pub mod validation;

pub use error::ModelError;
pub use traits::{OpenEnum, Shape, Validate};
pub use validation::{ConstraintKind, ValidationConfig, Violation};

#[cfg(test)]
mod tests;
