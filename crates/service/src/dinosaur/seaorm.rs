use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, Set,
};

use models::dinosaur::{self, Entity as DinosaurEntity, Model};

use crate::errors::ServiceError;
use crate::pagination::Pagination;
use crate::dinosaur::repository::DinosaurStore;

/// SeaORM-backed store; the database serializes concurrent writes.
pub struct SeaOrmDinosaurStore {
    pub db: DatabaseConnection,
}

impl SeaOrmDinosaurStore {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl DinosaurStore for SeaOrmDinosaurStore {
    async fn list(&self, page: Option<Pagination>) -> Result<Vec<Model>, ServiceError> {
        let finder = DinosaurEntity::find().order_by_asc(dinosaur::Column::Id);
        let rows = match page {
            Some(p) => {
                let (idx, per) = p.normalize();
                finder
                    .paginate(&self.db, per)
                    .fetch_page(idx)
                    .await
                    .map_err(|e| ServiceError::Db(e.to_string()))?
            }
            None => finder.all(&self.db).await.map_err(|e| ServiceError::Db(e.to_string()))?,
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

        let now = Utc::now().into();
        let am = dinosaur::ActiveModel {
            name: Set(name),
            species: Set(species.map(str::to_string)),
            era: Set(era.map(str::to_string)),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        am.insert(&self.db).await.map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn get(&self, id: i64) -> Result<Option<Model>, ServiceError> {
        DinosaurEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn update(
        &self,
        id: i64,
        name: Option<&str>,
        species: Option<&str>,
        era: Option<&str>,
    ) -> Result<Model, ServiceError> {
        // Validate the patch before touching the database; a bad body is a
        // validation error regardless of whether the id exists.
        let name = name.map(dinosaur::validate_name).transpose()?;
        if let Some(s) = species { dinosaur::validate_species(s)?; }
        if let Some(e) = era { dinosaur::validate_era(e)?; }

        let current = DinosaurEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        let Some(existing) = current else { return Err(ServiceError::not_found("dinosaur")); };

        let mut am: dinosaur::ActiveModel = existing.into();
        if let Some(n) = name {
            am.name = Set(n);
        }
        if let Some(s) = species {
            am.species = Set(Some(s.to_string()));
        }
        if let Some(e) = era {
            am.era = Set(Some(e.to_string()));
        }
        am.updated_at = Set(Utc::now().into());
        am.update(&self.db).await.map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
        let res = DinosaurEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(res.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    #[tokio::test]
    async fn dinosaur_crud_against_database() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        if std::env::var("DATABASE_URL").is_err() { return Ok(()); }
        let db = get_db().await?;
        let store = SeaOrmDinosaurStore::new(db);

        let a = store.create("Velociraptor", Some("V. mongoliensis"), Some("Cretaceous")).await?;
        assert!(a.id > 0);
        let found = store.get(a.id).await?.unwrap();
        assert_eq!(found.name, "Velociraptor");
        assert_eq!(found.species.as_deref(), Some("V. mongoliensis"));

        let updated = store.update(a.id, Some("Raptor"), None, None).await?;
        assert_eq!(updated.name, "Raptor");
        assert_eq!(updated.era.as_deref(), Some("Cretaceous"));

        let list_all = store.list(None).await?;
        assert!(list_all.iter().any(|x| x.id == a.id));

        let deleted = store.delete(a.id).await?;
        assert!(deleted);
        assert!(store.get(a.id).await?.is_none());
        assert!(!store.delete(a.id).await?);

        // Bad input on a missing id is still a validation error
        assert!(matches!(
            store.update(a.id, Some("   "), None, None).await,
            Err(ServiceError::Model(_))
        ));

        Ok(())
    }
}
