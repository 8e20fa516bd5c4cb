use axum::{
    Form, Json,
    extract::{FromRequest, Path, Request, State},
    http::{StatusCode, header},
};
use std::sync::Arc;
use tracing::{debug, info};

use crate::api::errors::{ApiError, USERNAME_REQUIRED};
use crate::api::server::AppState;
use crate::store::{NewUser, User};

/// Create-user body, read as a URL-encoded form when the request says so and
/// as JSON otherwise.
#[derive(Debug)]
pub struct NewUserBody(pub NewUser);

impl<S> FromRequest<S> for NewUserBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("application/x-www-form-urlencoded"));

        let user = if is_form {
            let Form(user) = Form::<NewUser>::from_request(req, state)
                .await
                .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
            user
        } else {
            let Json(user) = Json::<NewUser>::from_request(req, state)
                .await
                .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
            user
        };

        Ok(Self(user))
    }
}

/// Reads the leading decimal digits of `raw` the way a lenient integer parse
/// would: `"1abc"` is 1, `"abc"` matches nothing.
fn parse_id(raw: &str) -> Result<u64, ApiError> {
    let trimmed = raw.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());

    unsigned[..digits_end]
        .parse()
        .map_err(|_| ApiError::UserNotFound)
}

pub async fn list_users(State(state): State<Arc<AppState>>) -> Json<Vec<User>> {
    let users = state.users.list().await;
    debug!(count = users.len(), "listing users");
    Json(users)
}

pub async fn create_user(
    State(state): State<Arc<AppState>>,
    NewUserBody(payload): NewUserBody,
) -> Result<(StatusCode, Json<User>), ApiError> {
    if payload.username.is_empty() {
        return Err(ApiError::BadRequest(USERNAME_REQUIRED.to_string()));
    }

    let user = state.users.create(payload.username).await;
    info!(id = user.id, username = %user.username, "user created");
    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<User>, ApiError> {
    let id = parse_id(&id)?;
    debug!(id, "fetching user");
    state
        .users
        .get(id)
        .await
        .map(Json)
        .ok_or(ApiError::UserNotFound)
}

pub async fn delete_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    let user = state.users.delete(id).await.ok_or(ApiError::UserNotFound)?;
    info!(id = user.id, username = %user.username, "user deleted");
    Ok(StatusCode::NO_CONTENT)
}
