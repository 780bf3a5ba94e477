// src/presentation/http/openapi.rs
use axum::Router;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::communes::resolve_commune,
        crate::presentation::http::controllers::communes::register_commune,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::communes::RegisterCommuneRequest,
            crate::application::dto::CommuneDto
        )
    ),
    tags(
        (name = "Communes", description = "Commune identity resolution and registration."),
        (name = "System", description = "Service health.")
    ),
    info(
        title = "Contribcit commune identity service",
        description = "Resolves commune identifiers (canonical slugs and legacy raw ids) and backfills slugs for records that predate slug support."
    )
)]
pub struct ApiDoc;

pub fn docs_router() -> Router {
    Router::new().merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
