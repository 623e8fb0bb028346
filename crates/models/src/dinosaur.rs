use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors;

pub const NAME_MAX_LEN: usize = 128;
pub const SPECIES_MAX_LEN: usize = 128;
pub const ERA_MAX_LEN: usize = 64;

/// The `id` column is serialized along with every other field; API responses
/// always carry the assigned identifier.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "dinosaur")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub species: Option<String>,
    pub era: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { panic!("no relations defined here") }
}

impl ActiveModelBehavior for ActiveModel {}

/// Trim and validate the required name field.
pub fn validate_name(name: &str) -> Result<String, errors::ModelError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(errors::ModelError::Validation("name required".into()));
    }
    if trimmed.len() > NAME_MAX_LEN {
        return Err(errors::ModelError::Validation(format!(
            "name must be at most {} characters",
            NAME_MAX_LEN
        )));
    }
    Ok(trimmed.to_string())
}

pub fn validate_species(species: &str) -> Result<(), errors::ModelError> {
    if species.len() > SPECIES_MAX_LEN {
        return Err(errors::ModelError::Validation(format!(
            "species must be at most {} characters",
            SPECIES_MAX_LEN
        )));
    }
    Ok(())
}

pub fn validate_era(era: &str) -> Result<(), errors::ModelError> {
    if era.len() > ERA_MAX_LEN {
        return Err(errors::ModelError::Validation(format!(
            "era must be at most {} characters",
            ERA_MAX_LEN
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_trimmed() {
        assert_eq!(validate_name("  Tyrannosaurus ").unwrap(), "Tyrannosaurus");
    }

    #[test]
    fn empty_name_rejected() {
        assert!(validate_name("   ").is_err());
        assert!(validate_name("").is_err());
    }

    #[test]
    fn overlong_fields_rejected() {
        let long = "x".repeat(NAME_MAX_LEN + 1);
        assert!(validate_name(&long).is_err());
        assert!(validate_species(&long).is_err());
        assert!(validate_era(&"y".repeat(ERA_MAX_LEN + 1)).is_err());
    }

    #[test]
    fn serialized_model_includes_id() {
        let m = Model {
            id: 7,
            name: "Stegosaurus".into(),
            species: None,
            era: Some("Jurassic".into()),
            created_at: chrono::Utc::now().into(),
            updated_at: chrono::Utc::now().into(),
        };
        let json = serde_json::to_value(&m).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["name"], "Stegosaurus");
    }
}
