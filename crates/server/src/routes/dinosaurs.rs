use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use models::dinosaur::Model;
use service::pagination::Pagination;

use crate::{errors::ApiError, routes::ServerState};

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct ListQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl ListQuery {
    fn pagination(&self) -> Option<Pagination> {
        if self.page.is_none() && self.per_page.is_none() {
            return None;
        }
        Some(Pagination {
            page: self.page.unwrap_or(1),
            per_page: self.per_page.unwrap_or(20),
        })
    }
}

/// Unknown fields, including a client-supplied `id`, are dropped on
/// deserialization; the store always assigns the identifier.
#[derive(Debug, Deserialize, Serialize)]
pub struct CreateDinosaurInput {
    pub name: String,
    #[serde(default)]
    pub species: Option<String>,
    #[serde(default)]
    pub era: Option<String>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct UpdateDinosaurInput {
    pub name: Option<String>,
    pub species: Option<String>,
    pub era: Option<String>,
}

#[utoipa::path(
    get, path = "/dinosaurs", tag = "dinosaurs",
    params(ListQuery),
    responses(
        (status = 200, description = "List OK"),
        (status = 500, description = "List Failed")
    )
)]
pub async fn list(
    State(state): State<ServerState>,
    Query(q): Query<ListQuery>,
) -> Result<Json<Vec<Model>>, ApiError> {
    let rows = state.store.list(q.pagination()).await?;
    info!(count = rows.len(), "list dinosaurs");
    Ok(Json(rows))
}

#[utoipa::path(
    post, path = "/dinosaurs", tag = "dinosaurs",
    request_body = crate::openapi::CreateDinosaurInputDoc,
    responses(
        (status = 201, description = "Created"),
        (status = 400, description = "Validation Error"),
        (status = 500, description = "Create Failed")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<CreateDinosaurInput>,
) -> Result<(StatusCode, Json<Model>), ApiError> {
    let m = state
        .store
        .create(&input.name, input.species.as_deref(), input.era.as_deref())
        .await?;
    info!(id = m.id, name = %m.name, "created dinosaur");
    Ok((StatusCode::CREATED, Json(m)))
}

#[utoipa::path(
    get, path = "/dinosaurs/{id}", tag = "dinosaurs",
    params(("id" = i64, Path, description = "Dinosaur ID")),
    responses(
        (status = 200, description = "OK"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> Result<Json<Model>, ApiError> {
    match state.store.get(id).await? {
        Some(m) => Ok(Json(m)),
        None => Err(ApiError::new(StatusCode::NOT_FOUND, "Not Found", None)),
    }
}

#[utoipa::path(
    put, path = "/dinosaurs/{id}", tag = "dinosaurs",
    params(("id" = i64, Path, description = "Dinosaur ID")),
    request_body = crate::openapi::UpdateDinosaurInputDoc,
    responses(
        (status = 200, description = "Updated"),
        (status = 400, description = "Validation Error"),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Update Failed")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(input): Json<UpdateDinosaurInput>,
) -> Result<Json<Model>, ApiError> {
    let m = state
        .store
        .update(id, input.name.as_deref(), input.species.as_deref(), input.era.as_deref())
        .await?;
    info!(id = m.id, "updated dinosaur");
    Ok(Json(m))
}

#[utoipa::path(
    delete, path = "/dinosaurs/{id}", tag = "dinosaurs",
    params(("id" = i64, Path, description = "Dinosaur ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Delete Failed")
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    if state.store.delete(id).await? {
        info!(id, "deleted dinosaur");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::new(StatusCode::NOT_FOUND, "Not Found", None))
    }
}
