//! User handlers.

use axum::{
    extract::{Extension, State},
    response::Json,
    routing::{get, patch},
    Router,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

use common::{AppResult, Payload};
use todo_service_lib::port::dto::{ChangeUserInfoCommand, ChangeUserPasswordCommand, UserDto};

use crate::extractors::ValidatedJson;
use crate::middleware::CurrentUser;
use crate::state::AppState;

/// Public user representation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserData {
    pub id: String,
    pub username: String,
    pub email: String,
}

impl From<UserDto> for UserData {
    fn from(user: UserDto) -> Self {
        Self {
            id: user.id,
            username: user.user_name,
            email: user.email,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, message = "username is required"))]
    pub username: String,
    #[validate(email(message = "email is invalid"))]
    pub email: String,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    #[validate(length(min = 1, message = "newPassword is required"))]
    pub new_password: String,
    #[validate(length(min = 1, message = "oldPassword is required"))]
    pub old_password: String,
}

/// Create user routes. Mounted behind the auth middleware.
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/:userId", get(get_user).put(update_user))
        .route("/:userId/password", patch(change_password))
}

pub async fn get_user(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
) -> AppResult<Json<Payload<UserData>>> {
    let payload = match state.app.get_user().get(&current_user.id).await? {
        Some(user) => Payload::success(UserData::from(user)).with_message("user found"),
        None => Payload::empty().with_message("no user found"),
    };

    Ok(Json(payload))
}

pub async fn update_user(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<UpdateUserRequest>,
) -> AppResult<Json<Payload<()>>> {
    state
        .app
        .change_user_info()
        .change_info(ChangeUserInfoCommand {
            id: current_user.id,
            user_name: body.username,
            email: body.email,
        })
        .await?;

    Ok(Json(Payload::empty().with_message("user updated successfully")))
}

pub async fn change_password(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<ChangePasswordRequest>,
) -> AppResult<Json<Payload<()>>> {
    state
        .app
        .change_user_password()
        .change_password(ChangeUserPasswordCommand {
            user_id: current_user.id,
            new_password: body.new_password,
            old_password: body.old_password,
        })
        .await?;

    Ok(Json(Payload::empty().with_message("password successfully changed")))
}
