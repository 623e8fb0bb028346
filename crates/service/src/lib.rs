//! Service layer providing business-oriented CRUD operations on top of models.
//! - Separates storage access from the HTTP surface behind `DinosaurStore`.
//! - Reuses validation and entity definitions in the `models` crate.
//! - Provides clear error types and documented interfaces.

pub mod dinosaur;
pub mod errors;
pub mod pagination;
#[cfg(test)]
pub mod test_support;
