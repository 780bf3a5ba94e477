// src/presentation/http/controllers/communes.rs
use crate::application::{
    commands::communes::RegisterCommuneCommand,
    dto::CommuneDto,
    error::ApplicationError,
    queries::communes::ResolveCommuneQuery,
};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use utoipa::ToSchema;

const fn default_visible() -> bool {
    true
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterCommuneRequest {
    pub name: String,
    pub postal_code: String,
    #[serde(default = "default_visible")]
    pub is_visible: bool,
}

/// Resolve a commune by canonical slug or legacy raw id.
///
/// This handler owns the two policies the resolver deliberately leaves
/// to its caller: hidden communes answer 404 on the public surface, and
/// a resolved slug that differs from the requested identifier becomes a
/// permanent redirect to the canonical URL.
#[utoipa::path(
    get,
    path = "/api/v1/communes/{identifier}",
    params(
        ("identifier" = String, Path, description = "Canonical slug or legacy raw id.")
    ),
    responses(
        (status = 200, description = "Commune resolved at its canonical URL.", body = CommuneDto),
        (status = 308, description = "Identifier is valid but not canonical; redirect to the canonical slug URL."),
        (status = 404, description = "No visible commune matches the identifier.", body = crate::presentation::http::error::ErrorResponse),
        (status = 503, description = "Commune store unavailable.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Communes"
)]
pub async fn resolve_commune(
    Extension(state): Extension<HttpState>,
    Path(identifier): Path<String>,
) -> HttpResult<Response> {
    let commune = state
        .services
        .commune_queries
        .resolve_commune(ResolveCommuneQuery {
            identifier: identifier.clone(),
        })
        .await
        .into_http()?;

    if !commune.is_visible {
        return Err(HttpError::from_error(ApplicationError::not_found(
            "commune not found",
        )));
    }

    match commune.slug.as_deref() {
        Some(slug) if slug != identifier => {
            Ok(Redirect::permanent(&format!("/api/v1/communes/{slug}")).into_response())
        }
        _ => Ok(Json(commune).into_response()),
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/communes",
    request_body = RegisterCommuneRequest,
    responses(
        (status = 201, description = "Commune registered with its canonical slug.", body = CommuneDto),
        (status = 409, description = "Another commune already owns this slug.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Name and postal code normalize to an empty slug.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Communes"
)]
pub async fn register_commune(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<RegisterCommuneRequest>,
) -> HttpResult<(StatusCode, Json<CommuneDto>)> {
    let command = RegisterCommuneCommand {
        name: payload.name,
        postal_code: payload.postal_code,
        is_visible: payload.is_visible,
    };

    state
        .services
        .commune_commands
        .register_commune(command)
        .await
        .into_http()
        .map(|dto| (StatusCode::CREATED, Json(dto)))
}
