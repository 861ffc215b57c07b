use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{debug, info, instrument, warn};

use crate::{
    auth::{
        dto::{LoginRequest, RegisterRequest, TokenResponse},
        jwt::{AuthUser, JwtKeys},
        password::{hash_password, verify_password},
    },
    error::ApiError,
    state::AppState,
    users::repo::User,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/protected", get(protected))
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, &'static str), ApiError> {
    if payload.username.is_empty() || payload.password.is_empty() {
        warn!("register with missing username or password");
        return Err(ApiError::MissingCredentials);
    }

    let hash = hash_password(&payload.password)?;

    // Single atomic insert; a duplicate username surfaces as a
    // unique-violation and becomes UserExists in the sqlx conversion.
    let user = User::insert(&state.db, &payload.username, &hash).await?;

    info!(user_id = %user.id, username = %user.username, "user registered");
    Ok((StatusCode::CREATED, "User registered"))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let user = User::find_by_username(&state.db, &payload.username)
        .await?
        .ok_or_else(|| {
            warn!(username = %payload.username, "login unknown username");
            ApiError::UnknownUser
        })?;

    if !verify_password(&payload.password, &user.password_hash)? {
        warn!(user_id = %user.id, "login invalid password");
        return Err(ApiError::WrongPassword);
    }

    let keys = JwtKeys::from_ref(&state);
    let token = keys.sign(user.id)?;

    info!(user_id = %user.id, username = %user.username, "user logged in");
    Ok(Json(TokenResponse { token }))
}

#[instrument(skip_all)]
pub async fn protected(AuthUser(user_id): AuthUser) -> &'static str {
    debug!(user_id = %user_id, "protected route accessed");
    "This is a protected route"
}
