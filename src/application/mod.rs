//! Application layer: orchestration services
//!
//! This layer wires domain logic to the fetch boundary trait.

pub mod assembler;
pub mod error;

pub use assembler::HierarchyAssembler;
pub use error::{ApplicationError, ApplicationResult};
