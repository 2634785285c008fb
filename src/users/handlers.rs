use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    error::ApiError,
    response::ApiResponse,
    state::AppState,
    users::{
        dto::{CreateUserRequest, UpdateUserRequest},
        repo_types::{NewUser, User, UserChanges},
    },
};

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/:id",
            get(get_user).put(update_user).delete(delete_user),
        )
}

fn parse_id(raw: &str) -> Result<u64, ApiError> {
    raw.trim()
        .parse::<u64>()
        .map_err(|_| ApiError::InvalidId(raw.to_string()))
}

fn body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    payload
        .map(|Json(p)| p)
        .map_err(|e| ApiError::InvalidBody(e.body_text()))
}

#[instrument(skip(state))]
pub async fn list_users(State(state): State<AppState>) -> Json<ApiResponse<Vec<User>>> {
    let users = state.directory.read().await.list();
    let message = format!("Retrieved {} users", users.len());
    Json(ApiResponse::ok(users, message))
}

#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<User>>, ApiError> {
    let id = parse_id(&id)?;
    let user = state.directory.read().await.get_by_id(id)?;
    Ok(Json(ApiResponse::ok(user, "User retrieved successfully")))
}

#[instrument(skip(state, payload))]
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<User>>), ApiError> {
    let input = NewUser::from(body(payload)?);
    state.simulate_latency().await;

    let created = state.directory.write().await.create(&input);
    match created {
        Ok(user) => {
            info!(user_id = user.id, username = %user.username, role = %user.role, "user created");
            Ok((
                StatusCode::CREATED,
                Json(ApiResponse::ok(user, "User created successfully")),
            ))
        }
        Err(e) => {
            warn!(error = %e, username = %input.username, "create user rejected");
            Err(e.into())
        }
    }
}

#[instrument(skip(state, payload))]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateUserRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<User>>, ApiError> {
    let id = parse_id(&id)?;
    let changes = UserChanges::from(body(payload)?);
    state.simulate_latency().await;

    let updated = state.directory.write().await.update(id, &changes);
    match updated {
        Ok(user) => {
            info!(user_id = user.id, role = %user.role, "user updated");
            Ok(Json(ApiResponse::ok(user, "User updated successfully")))
        }
        Err(e) => {
            warn!(error = %e, user_id = id, "update user rejected");
            Err(e.into())
        }
    }
}

#[instrument(skip(state))]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<User>>, ApiError> {
    let id = parse_id(&id)?;
    state.simulate_latency().await;

    let removed = state.directory.write().await.delete(id);
    match removed {
        Ok(user) => {
            info!(user_id = user.id, username = %user.username, "user deleted");
            let message = format!("User \"{}\" deleted successfully", user.username);
            Ok(Json(ApiResponse::ok(user, message)))
        }
        Err(e) => {
            warn!(error = %e, user_id = id, "delete user rejected");
            Err(e.into())
        }
    }
}
