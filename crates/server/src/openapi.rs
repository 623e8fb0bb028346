use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(utoipa::ToSchema)]
pub struct DinosaurDoc {
    pub id: i64,
    pub name: String,
    pub species: Option<String>,
    pub era: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(utoipa::ToSchema)]
pub struct CreateDinosaurInputDoc {
    pub name: String,
    pub species: Option<String>,
    pub era: Option<String>,
}

#[derive(utoipa::ToSchema)]
pub struct UpdateDinosaurInputDoc {
    pub name: Option<String>,
    pub species: Option<String>,
    pub era: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::dinosaurs::list,
        crate::routes::dinosaurs::create,
        crate::routes::dinosaurs::get,
        crate::routes::dinosaurs::update,
        crate::routes::dinosaurs::delete,
    ),
    components(
        schemas(
            HealthResponse,
            DinosaurDoc,
            CreateDinosaurInputDoc,
            UpdateDinosaurInputDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "dinosaurs")
    )
)]
pub struct ApiDoc;
