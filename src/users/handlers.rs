use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::get,
    Json, Router,
};
use tracing::{info, instrument, warn};

use super::{dto::UpdateUserRequest, parse_user_id, repo_types::UserProfile};
use crate::{
    auth::dto::{normalize_email, present},
    error::{json_body, ApiError, MessageBody},
    state::AppState,
};

pub fn user_routes() -> Router<AppState> {
    Router::new().route("/user/:id", get(get_user).put(update_user))
}

const UPDATE_REQUIRED: &str = "Name and Email are required";

fn user_not_found() -> ApiError {
    ApiError::NotFound("User not found".into())
}

/// Any caller may read any profile; there is no ownership check.
#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<UserProfile>, ApiError> {
    let user_id = parse_user_id(&id).ok_or_else(user_not_found)?;
    let profile = state
        .store
        .find_profile(user_id)
        .await?
        .ok_or_else(|| {
            warn!(%user_id, "user not found");
            user_not_found()
        })?;
    Ok(Json(profile))
}

#[instrument(skip(state, payload))]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateUserRequest>, JsonRejection>,
) -> Result<Json<MessageBody>, ApiError> {
    let payload = json_body(payload, UPDATE_REQUIRED)?;
    let profile = payload.profile_text();
    let email = present(payload.email.map(|e| normalize_email(&e)));
    let (Some(name), Some(email)) = (present(payload.name), email) else {
        warn!("update with missing fields");
        return Err(ApiError::Validation(UPDATE_REQUIRED.into()));
    };

    let user_id = parse_user_id(&id).ok_or_else(user_not_found)?;
    let affected = state
        .store
        .update_user(user_id, &name, &email, profile.as_deref())
        .await?;
    if affected == 0 {
        warn!(%user_id, "update for unknown user");
        return Err(user_not_found());
    }

    info!(%user_id, "profile updated");
    Ok(Json(MessageBody::new("Profile updated successfully")))
}
