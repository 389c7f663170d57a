use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        region::{CreateRegionDto, RegionDto, UpdateRegionDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthUser,
        model::region::{CreateRegionParam, UpdateRegionParam},
        service::region::RegionService,
        state::AppState,
        util::extract::{AppJson, AppPath},
    },
};

/// Tag for grouping region endpoints in OpenAPI documentation
pub static REGION_TAG: &str = "region";

/// List all regions.
///
/// # Returns
/// - `200 OK` - All regions ordered by NOC
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/regions",
    tag = REGION_TAG,
    responses(
        (status = 200, description = "Successfully retrieved regions", body = Vec<RegionDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_regions(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = RegionService::new(&state.db);

    let regions = service.get_all().await?;

    let dtos: Vec<RegionDto> = regions.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a region by its NOC code.
///
/// # Returns
/// - `200 OK` - The region
/// - `404 Not Found` - No region with that code
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/regions/{code}",
    tag = REGION_TAG,
    params(
        ("code" = String, Path, description = "Three letter NOC code")
    ),
    responses(
        (status = 200, description = "Successfully retrieved region", body = RegionDto),
        (status = 404, description = "Region not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_region(
    State(state): State<AppState>,
    AppPath(code): AppPath<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = RegionService::new(&state.db);

    let region = service.get_by_noc(&code).await?;

    Ok((StatusCode::OK, Json(region.into_dto())))
}

/// Create a new region.
///
/// # Access Control
/// - Requires a valid access token
///
/// # Returns
/// - `201 Created` - Region created, message names the new code
/// - `400 Bad Request` - Malformed body or invalid fields
/// - `401 Unauthorized` - Missing, invalid or expired token
/// - `409 Conflict` - A region with the same code exists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/regions",
    tag = REGION_TAG,
    request_body = CreateRegionDto,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Successfully created region", body = MessageDto),
        (status = 400, description = "Invalid region data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 409, description = "Region already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_region(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    AppJson(payload): AppJson<CreateRegionDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = RegionService::new(&state.db);

    let params = CreateRegionParam::from_dto(payload)?;

    let region = service.create(params).await?;

    tracing::info!("User {} created region {}", user.id, region.noc);

    Ok((
        StatusCode::CREATED,
        Json(MessageDto::new(format!(
            "Region added with NOC {}",
            region.noc
        ))),
    ))
}

/// Delete a region.
///
/// Regions still referenced by events cannot be deleted.
///
/// # Access Control
/// - Requires a valid access token
///
/// # Returns
/// - `200 OK` - Region deleted
/// - `401 Unauthorized` - Missing, invalid or expired token
/// - `404 Not Found` - No region with that code
/// - `409 Conflict` - Events still reference the region
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/regions/{code}",
    tag = REGION_TAG,
    params(
        ("code" = String, Path, description = "Three letter NOC code")
    ),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Successfully deleted region", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Region not found", body = ErrorDto),
        (status = 409, description = "Region has events", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_region(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    AppPath(code): AppPath<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = RegionService::new(&state.db);

    service.delete(&code).await?;

    tracing::info!("User {} deleted region {}", user.id, code);

    Ok((
        StatusCode::OK,
        Json(MessageDto::new(format!("Region {} deleted.", code))),
    ))
}

/// Partially update a region.
///
/// Only supplied fields change; `notes: null` clears the notes. The NOC code cannot
/// be changed.
///
/// # Access Control
/// - Requires a valid access token
///
/// # Returns
/// - `200 OK` - Region updated
/// - `400 Bad Request` - Malformed body, invalid fields or changed NOC
/// - `401 Unauthorized` - Missing, invalid or expired token
/// - `404 Not Found` - No region with that code
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/regions/{code}",
    tag = REGION_TAG,
    params(
        ("code" = String, Path, description = "Three letter NOC code")
    ),
    request_body = UpdateRegionDto,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Successfully updated region", body = MessageDto),
        (status = 400, description = "Invalid region data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Region not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_region(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    AppPath(code): AppPath<String>,
    AppJson(payload): AppJson<UpdateRegionDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = RegionService::new(&state.db);

    let params = UpdateRegionParam::from_dto(&code, payload)?;

    let region = service.update(&code, params).await?;

    tracing::info!("User {} updated region {}", user.id, region.noc);

    Ok((
        StatusCode::OK,
        Json(MessageDto::new(format!("Region {} updated.", region.noc))),
    ))
}
