use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{delete, post},
    Json, Router,
};
use tracing::{info, instrument, warn};

use super::dto::{MealIdInput, SaveMealRequest, SavedMealsResponse};
use crate::{
    error::{created, json_body, ApiError, MessageBody},
    state::AppState,
    store::StoreError,
    users::parse_user_id,
};

const MEAL_ID_REQUIRED: &str = "Meal ID is required";

pub fn saved_meal_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/user/:id/saved-meals",
            post(save_meal).get(list_saved_meals),
        )
        .route("/user/:id/saved-meals/:meal_id", delete(remove_saved_meal))
}

/// Check-then-insert without a transaction or unique index: two concurrent
/// requests for the same pair can both get past the lookup.
#[instrument(skip(state, payload))]
pub async fn save_meal(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<SaveMealRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageBody>), ApiError> {
    let payload = json_body(payload, MEAL_ID_REQUIRED)?;
    let Some(meal_id) = payload.meal_id.and_then(MealIdInput::into_meal_id) else {
        warn!("save meal without meal id");
        return Err(ApiError::Validation(MEAL_ID_REQUIRED.into()));
    };
    let user_not_found = || ApiError::NotFound("User not found".into());
    let user_id = parse_user_id(&id).ok_or_else(user_not_found)?;

    if state.store.saved_meal_exists(user_id, &meal_id).await? {
        warn!(%user_id, %meal_id, "meal already saved");
        return Err(ApiError::Conflict("Meal already saved".into()));
    }

    match state.store.insert_saved_meal(user_id, &meal_id).await {
        Ok(()) => {
            info!(%user_id, %meal_id, "meal saved");
            Ok(created("Meal saved successfully"))
        }
        Err(StoreError::ForeignKeyViolation(_)) => {
            warn!(%user_id, "save meal for unknown user");
            Err(user_not_found())
        }
        Err(e) => Err(e.into()),
    }
}

#[instrument(skip(state))]
pub async fn list_saved_meals(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SavedMealsResponse>, ApiError> {
    let meal_ids = match parse_user_id(&id) {
        Some(user_id) => state.store.list_saved_meals(user_id).await?,
        None => Vec::new(),
    };
    Ok(Json(SavedMealsResponse { meal_ids }))
}

#[instrument(skip(state))]
pub async fn remove_saved_meal(
    State(state): State<AppState>,
    Path((id, meal_id)): Path<(String, String)>,
) -> Result<Json<MessageBody>, ApiError> {
    let not_saved = || ApiError::NotFound("Meal not found in saved list".into());
    let user_id = parse_user_id(&id).ok_or_else(not_saved)?;
    let meal_id = meal_id.trim();

    let removed = state.store.delete_saved_meal(user_id, meal_id).await?;
    if removed == 0 {
        warn!(%user_id, %meal_id, "meal not in saved list");
        return Err(not_saved());
    }

    info!(%user_id, %meal_id, removed, "meal removed from saved list");
    Ok(Json(MessageBody::new("Meal removed from saved list")))
}
