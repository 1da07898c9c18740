use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        dto::{normalize_email, present, LoginRequest, LoginResponse, PublicUser, SignupRequest},
        jwt::JwtKeys,
        password::{hash_password_async, verify_password_async},
    },
    error::{created, json_body, ApiError, MessageBody},
    state::AppState,
    store::StoreError,
};

const SIGNUP_REQUIRED: &str = "All fields are required";
const LOGIN_REQUIRED: &str = "Email and password are required";

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
}

#[instrument(skip(state, payload))]
pub async fn signup(
    State(state): State<AppState>,
    payload: Result<Json<SignupRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageBody>), ApiError> {
    let payload = json_body(payload, SIGNUP_REQUIRED)?;
    let email = present(payload.email.map(|e| normalize_email(&e)));
    let (Some(name), Some(email), Some(password)) =
        (present(payload.name), email, present(payload.password))
    else {
        warn!("signup with missing fields");
        return Err(ApiError::Validation(SIGNUP_REQUIRED.into()));
    };

    let hash = hash_password_async(password, state.config.bcrypt_cost).await?;

    match state.store.create_user(&name, &email, &hash).await {
        Ok(user_id) => {
            info!(user_id = %user_id, email = %email, "user registered");
            Ok(created("Registered successfully"))
        }
        Err(StoreError::UniqueViolation(_)) => {
            warn!(email = %email, "email already registered");
            Err(ApiError::Conflict("Email already registered".into()))
        }
        Err(e) => Err(e.into()),
    }
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, ApiError> {
    let payload = json_body(payload, LOGIN_REQUIRED)?;
    let email = present(payload.email.map(|e| normalize_email(&e)));
    let (Some(email), Some(password)) = (email, present(payload.password)) else {
        warn!("login with missing fields");
        return Err(ApiError::Validation(LOGIN_REQUIRED.into()));
    };

    let Some(user) = state.store.find_user_by_email(&email).await? else {
        warn!(email = %email, "login unknown email");
        return Err(ApiError::Auth("Invalid email".into()));
    };

    if !verify_password_async(password, user.password_hash).await? {
        warn!(user_id = %user.id, "login wrong password");
        return Err(ApiError::Auth("Wrong password".into()));
    }

    // Keys are built per request so a missing secret only fails logins.
    let keys = JwtKeys::from_config(&state.config.jwt)?;
    let token = keys.sign(user.id)?;

    info!(user_id = %user.id, "user logged in");
    Ok(Json(LoginResponse {
        message: "Login successful".into(),
        token,
        user: PublicUser {
            id: user.id,
            name: user.name,
            email: user.email,
        },
    }))
}
