use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        user::{CredentialsDto, TokenDto},
    },
    server::{
        error::AppError,
        model::user::{LoginParam, RegisterUserParam},
        service::auth::AuthService,
        state::AppState,
        util::extract::AppJson,
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new user.
///
/// # Returns
/// - `201 Created` - User registered
/// - `400 Bad Request` - Malformed body, invalid email or empty password
/// - `409 Conflict` - Email already registered
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    post,
    path = "/register",
    tag = AUTH_TAG,
    request_body = CredentialsDto,
    responses(
        (status = 201, description = "Successfully registered", body = MessageDto),
        (status = 400, description = "Invalid registration data", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CredentialsDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = AuthService::new(&state.db, &state.tokens);

    let params = RegisterUserParam::from_dto(payload)?;

    auth_service.register(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageDto::new("Successfully registered.")),
    ))
}

/// Log in and receive an access token.
///
/// The token is valid for five minutes. A missing or unreadable body is treated the
/// same as missing credentials.
///
/// # Returns
/// - `201 Created` - Token issued
/// - `401 Unauthorized` - Missing credentials, unknown email or wrong password
/// - `500 Internal Server Error` - Database or token encoding error
#[utoipa::path(
    post,
    path = "/login",
    tag = AUTH_TAG,
    request_body = CredentialsDto,
    responses(
        (status = 201, description = "Successfully logged in", body = TokenDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<CredentialsDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = AuthService::new(&state.db, &state.tokens);

    let params = LoginParam::from_dto(payload.ok().map(|Json(dto)| dto))?;

    let token = auth_service.login(params).await?;

    Ok((StatusCode::CREATED, Json(token.into_dto())))
}
