use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    error::{auth::AuthError, Error},
    model::{
        api::{ErrorDto, LoginDto, UserDto},
        app::AppState,
        auth::LoginCredentials,
        session::SessionUser,
    },
    service::auth::login::{AuthenticatedUser, LoginService},
};

pub static AUTH_TAG: &str = "auth";

fn user_dto(user: &AuthenticatedUser) -> UserDto {
    UserDto {
        id: user.user_id,
        role: user.role.as_str().to_string(),
        username: user.username.clone(),
        name: user.name.clone(),
    }
}

/// Log in as an admin or student
///
/// Validates the submitted credentials, runs the role-specific login flow
/// (including the lockout state machine for students), and establishes the
/// session before responding.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Login succeeded", body = UserDto),
        (status = 400, description = "Missing or malformed credentials", body = ErrorDto),
        (status = 401, description = "Unknown identifier or wrong password", body = ErrorDto),
        (status = 403, description = "Account locked or inactive", body = ErrorDto),
        (status = 503, description = "System under maintenance", body = ErrorDto),
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<LoginDto>,
) -> Result<impl IntoResponse, Error> {
    let credentials = LoginCredentials::parse(dto)?;

    let user = LoginService::new(&state.db, &state.config)
        .login(&credentials)
        .await?;

    SessionUser::insert(&session, &user).await?;
    // Persist before responding so the cookie is valid on the very next
    // request
    session.save().await?;

    Ok(Json(user_dto(&user)))
}

/// Get the currently logged-in user
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "The logged-in user", body = UserDto),
        (status = 401, description = "No active session", body = ErrorDto),
    ),
)]
pub async fn get_user(session: Session) -> Result<impl IntoResponse, Error> {
    let user = SessionUser::get(&session)
        .await?
        .ok_or(AuthError::NotLoggedIn)?;

    Ok(Json(UserDto {
        id: user.user_id,
        role: user.role.as_str().to_string(),
        username: user.username,
        name: user.name,
    }))
}

/// Log out the current user
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Session cleared"),
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, Error> {
    session.flush().await?;

    Ok(StatusCode::OK)
}
