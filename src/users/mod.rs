use axum::Router;
use uuid::Uuid;

use crate::state::AppState;

mod dto;
pub mod handlers;
pub mod repo;
pub mod repo_types;

pub fn router() -> Router<AppState> {
    handlers::user_routes()
}

/// Path ids that are not UUIDs cannot match any row.
pub(crate) fn parse_user_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw.trim()).ok()
}
