use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use models::dinosaur::{self, Model};

use crate::errors::ServiceError;
use crate::pagination::Pagination;
use crate::dinosaur::repository::DinosaurStore;

/// In-memory store for tests and local development without a database.
///
/// Holds records in a `BTreeMap` so iteration yields ascending ids. The id
/// counter is monotonic; deleted ids are never handed out again.
#[derive(Default)]
pub struct InMemoryDinosaurStore {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    rows: BTreeMap<i64, Model>,
    last_id: i64,
}

impl InMemoryDinosaurStore {
    pub fn new() -> Self { Self::default() }
}

#[async_trait]
impl DinosaurStore for InMemoryDinosaurStore {
    async fn list(&self, page: Option<Pagination>) -> Result<Vec<Model>, ServiceError> {
        let inner = self.inner.read().await;
        let all = inner.rows.values().cloned();
        let rows = match page {
            Some(p) => {
                let (idx, per) = p.normalize();
                all.skip((idx * per) as usize).take(per as usize).collect()
            }
            None => all.collect(),
        };
        Ok(rows)
    }

    async fn create(
        &self,
        name: &str,
        species: Option<&str>,
        era: Option<&str>,
    ) -> Result<Model, ServiceError> {
        let name = dinosaur::validate_name(name)?;
        if let Some(s) = species { dinosaur::validate_species(s)?; }
        if let Some(e) = era { dinosaur::validate_era(e)?; }

        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let now = Utc::now().into();
        let row = Model {
            id: inner.last_id,
            name,
            species: species.map(str::to_string),
            era: era.map(str::to_string),
            created_at: now,
            updated_at: now,
        };
        inner.rows.insert(row.id, row.clone());
        Ok(row)
    }

    async fn get(&self, id: i64) -> Result<Option<Model>, ServiceError> {
        let inner = self.inner.read().await;
        Ok(inner.rows.get(&id).cloned())
    }

    async fn update(
        &self,
        id: i64,
        name: Option<&str>,
        species: Option<&str>,
        era: Option<&str>,
    ) -> Result<Model, ServiceError> {
        let name = name.map(dinosaur::validate_name).transpose()?;
        if let Some(s) = species { dinosaur::validate_species(s)?; }
        if let Some(e) = era { dinosaur::validate_era(e)?; }

        let mut inner = self.inner.write().await;
        let Some(row) = inner.rows.get_mut(&id) else {
            return Err(ServiceError::not_found("dinosaur"));
        };
        if let Some(n) = name { row.name = n; }
        if let Some(s) = species { row.species = Some(s.to_string()); }
        if let Some(e) = era { row.era = Some(e.to_string()); }
        row.updated_at = Utc::now().into();
        Ok(row.clone())
    }

    async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
        let mut inner = self.inner.write().await;
        Ok(inner.rows.remove(&id).is_some())
    }
}
