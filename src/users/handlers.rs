use axum::{extract::State, routing::get, Json, Router};
use tracing::instrument;

use crate::{error::ApiError, state::AppState, users::repo::User};

pub fn user_routes() -> Router<AppState> {
    Router::new().route("/api", get(list_users))
}

/// Full dump of every user record, no auth and no projection. The
/// response includes the password_hash field; see the note on `User`.
#[instrument(skip(state))]
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    let users = User::list_all(&state.db).await?;
    Ok(Json(users))
}
