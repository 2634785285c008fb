use crate::state::AppState;
use axum::Router;

mod dto;
pub mod handlers;
pub mod password;
pub mod repo;
pub mod repo_types;
pub mod seed;
pub(crate) mod services;

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::user_routes())
}
