use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        event::{CreateEventDto, EventDto, UpdateEventDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthUser,
        model::event::{EventParam, UpdateEventParam},
        service::event::EventService,
        state::AppState,
        util::extract::{AppJson, AppPath},
    },
};

/// Tag for grouping event endpoints in OpenAPI documentation
pub static EVENT_TAG: &str = "event";

/// List all events.
///
/// # Returns
/// - `200 OK` - All events ordered by year, then ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/events",
    tag = EVENT_TAG,
    responses(
        (status = 200, description = "Successfully retrieved events", body = Vec<EventDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_events(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = EventService::new(&state.db);

    let events = service.get_all().await?;

    let dtos: Vec<EventDto> = events.into_iter().map(|e| e.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get an event by ID.
///
/// # Returns
/// - `200 OK` - The event
/// - `400 Bad Request` - ID is not an integer
/// - `404 Not Found` - No event with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/events/{id}",
    tag = EVENT_TAG,
    params(
        ("id" = i32, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved event", body = EventDto),
        (status = 400, description = "Invalid event ID", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_event(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = EventService::new(&state.db);

    let event = service.get_by_id(id).await?;

    Ok((StatusCode::OK, Json(event.into_dto())))
}

/// Create a new event.
///
/// Any `id` or `duration` in the body is ignored; the ID is assigned by the database
/// and the duration is derived from `start` and `end`.
///
/// # Access Control
/// - Requires a valid access token
///
/// # Returns
/// - `201 Created` - Event created, message names the new ID
/// - `400 Bad Request` - Malformed body, invalid fields or unknown `NOC`
/// - `401 Unauthorized` - Missing, invalid or expired token
/// - `409 Conflict` - An event for the same country and year exists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/events",
    tag = EVENT_TAG,
    request_body = CreateEventDto,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Successfully created event", body = MessageDto),
        (status = 400, description = "Invalid event data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 409, description = "Event already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_event(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    AppJson(payload): AppJson<CreateEventDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = EventService::new(&state.db);

    let params = EventParam::from_dto(payload)?;

    let event = service.create(params).await?;

    tracing::info!(
        "User {} created event {} ({} {})",
        user.id,
        event.id,
        event.country,
        event.year
    );

    Ok((
        StatusCode::CREATED,
        Json(MessageDto::new(format!("Event added with id {}", event.id))),
    ))
}

/// Delete an event.
///
/// # Access Control
/// - Requires a valid access token
///
/// # Returns
/// - `200 OK` - Event deleted
/// - `401 Unauthorized` - Missing, invalid or expired token
/// - `404 Not Found` - No event with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/events/{id}",
    tag = EVENT_TAG,
    params(
        ("id" = i32, Path, description = "Event ID")
    ),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Successfully deleted event", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_event(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = EventService::new(&state.db);

    service.delete(id).await?;

    tracing::info!("User {} deleted event {}", user.id, id);

    Ok((
        StatusCode::OK,
        Json(MessageDto::new(format!("Event {} deleted.", id))),
    ))
}

/// Partially update an event.
///
/// Only supplied fields change and `null` clears an optional field. The merged event is
/// validated as a whole and its duration re-derived.
///
/// # Access Control
/// - Requires a valid access token
///
/// # Returns
/// - `200 OK` - Event updated
/// - `400 Bad Request` - Malformed body, invalid fields or unknown `NOC`
/// - `401 Unauthorized` - Missing, invalid or expired token
/// - `404 Not Found` - No event with that ID
/// - `409 Conflict` - Another event has the resulting country and year
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/events/{id}",
    tag = EVENT_TAG,
    params(
        ("id" = i32, Path, description = "Event ID")
    ),
    request_body = UpdateEventDto,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Successfully updated event", body = MessageDto),
        (status = 400, description = "Invalid event data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 409, description = "Event already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_event(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    AppPath(id): AppPath<i32>,
    AppJson(payload): AppJson<UpdateEventDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = EventService::new(&state.db);

    let params = UpdateEventParam::from_dto(payload)?;

    let event = service.update(id, params).await?;

    tracing::info!("User {} updated event {}", user.id, event.id);

    Ok((
        StatusCode::OK,
        Json(MessageDto::new(format!("Event {} updated.", event.id))),
    ))
}
