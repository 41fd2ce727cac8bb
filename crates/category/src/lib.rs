//! Category catalog entity.
//!
//! The reference consumer of `seedwork-core`: a validated, identity-bearing entity
//! whose fields only change through its own operations.

pub mod category;

pub use category::{Category, CategoryProps, MAX_NAME_LENGTH, NewCategory};
