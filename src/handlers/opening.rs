//! Opening CRUD handlers: get, create, update, delete, list.

use crate::docs::{CreateOpeningRequest, OpeningEnvelope, OpeningListEnvelope, UpdateOpeningRequest};
use crate::error::{AppError, ErrorBody};
use crate::extractors::{JsonObject, OpeningId};
use crate::response::{success_many, success_message, success_one, success_one_with_message, MessageBody};
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};

/// GET /api/v1/opening?id= — fetch one opening.
#[utoipa::path(
    get,
    path = "/api/v1/opening",
    tag = "openings",
    params(("id" = i64, Query, description = "Opening id")),
    responses(
        (status = 200, description = "Opening found", body = OpeningEnvelope),
        (status = 400, description = "Missing or invalid id", body = ErrorBody),
        (status = 404, description = "No opening with this id", body = ErrorBody)
    )
)]
pub async fn get_opening(
    State(state): State<AppState>,
    OpeningId(id): OpeningId,
) -> Result<impl IntoResponse, AppError> {
    let opening = state.service.get(id).await?;
    Ok(success_one(opening))
}

/// POST /api/v1/opening — validate and create.
#[utoipa::path(
    post,
    path = "/api/v1/opening",
    tag = "openings",
    request_body = CreateOpeningRequest,
    responses(
        (status = 200, description = "Opening created", body = OpeningEnvelope),
        (status = 400, description = "Invalid body or validation failure", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody)
    )
)]
pub async fn create_opening(
    State(state): State<AppState>,
    JsonObject(body): JsonObject,
) -> Result<impl IntoResponse, AppError> {
    let opening = state.service.create(&body).await?;
    Ok(success_one_with_message("opening created successfully", opening))
}

/// PUT /api/v1/opening — partial update; `id` comes from the body.
#[utoipa::path(
    put,
    path = "/api/v1/opening",
    tag = "openings",
    request_body = UpdateOpeningRequest,
    responses(
        (status = 200, description = "Opening updated", body = OpeningEnvelope),
        (status = 400, description = "Missing id or invalid body", body = ErrorBody),
        (status = 404, description = "No opening with this id", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody)
    )
)]
pub async fn update_opening(
    State(state): State<AppState>,
    JsonObject(body): JsonObject,
) -> Result<impl IntoResponse, AppError> {
    let opening = state.service.update(&body).await?;
    Ok(success_one_with_message("opening updated successfully", opening))
}

/// DELETE /api/v1/opening?id=
#[utoipa::path(
    delete,
    path = "/api/v1/opening",
    tag = "openings",
    params(("id" = i64, Query, description = "Opening id")),
    responses(
        (status = 200, description = "Opening deleted", body = MessageBody),
        (status = 400, description = "Missing or invalid id", body = ErrorBody),
        (status = 404, description = "No opening with this id", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody)
    )
)]
pub async fn delete_opening(
    State(state): State<AppState>,
    OpeningId(id): OpeningId,
) -> Result<impl IntoResponse, AppError> {
    state.service.delete(id).await?;
    Ok(success_message(format!("opening with id {} deleted successfully", id)))
}

/// GET /api/v1/openings — every live opening, ordered by id.
#[utoipa::path(
    get,
    path = "/api/v1/openings",
    tag = "openings",
    responses(
        (status = 200, description = "All openings", body = OpeningListEnvelope),
        (status = 404, description = "No openings (legacy empty-list policy only)", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody)
    )
)]
pub async fn list_openings(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let openings = state.service.list().await?;
    Ok(success_many(openings))
}
