use async_trait::async_trait;

use models::dinosaur::Model;

use crate::errors::ServiceError;
use crate::pagination::Pagination;

/// Storage interface for dinosaur records.
///
/// Update uses merge semantics: a `None` field is left unchanged. The store
/// assigns identifiers on create and never reuses one after deletion.
#[async_trait]
pub trait DinosaurStore: Send + Sync {
    /// List records ordered by ascending id. `page: None` returns everything.
    async fn list(&self, page: Option<Pagination>) -> Result<Vec<Model>, ServiceError>;
    async fn create(
        &self,
        name: &str,
        species: Option<&str>,
        era: Option<&str>,
    ) -> Result<Model, ServiceError>;
    async fn get(&self, id: i64) -> Result<Option<Model>, ServiceError>;
    async fn update(
        &self,
        id: i64,
        name: Option<&str>,
        species: Option<&str>,
        era: Option<&str>,
    ) -> Result<Model, ServiceError>;
    /// Returns true if a record was removed.
    async fn delete(&self, id: i64) -> Result<bool, ServiceError>;
}
