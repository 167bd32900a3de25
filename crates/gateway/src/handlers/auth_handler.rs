//! Sign-up and login handlers.

use axum::{extract::State, http::StatusCode, response::Json, routing::post, Router};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::{Deserialize, Serialize};
use validator::Validate;

use common::{AppResult, Payload};
use todo_service_lib::port::dto::{AddUserCommand, LoginCommand};

use super::UserData;
use crate::extractors::ValidatedJson;
use crate::state::AppState;

#[derive(Debug, Deserialize, Validate)]
pub struct SignUpRequest {
    #[validate(length(min = 1, message = "username is required"))]
    pub username: String,
    #[validate(email(message = "email is invalid"))]
    pub email: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "email is invalid"))]
    pub email: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

/// Token returned alongside the session cookie
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginData {
    pub access_token: String,
    pub token_type: &'static str,
    pub expires_in: i64,
    pub user: UserData,
}

/// Create auth routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(sign_up))
        .route("/login", post(login))
}

pub async fn sign_up(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<SignUpRequest>,
) -> AppResult<(StatusCode, Json<Payload<UserData>>)> {
    let user = state
        .app
        .add_user()
        .add(AddUserCommand {
            user_name: body.username,
            email: body.email,
            password: body.password,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(Payload::success(UserData::from(user)).with_message("user created successfully")),
    ))
}

pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(body): ValidatedJson<LoginRequest>,
) -> AppResult<(CookieJar, Json<Payload<LoginData>>)> {
    let user = state
        .app
        .login()
        .login(LoginCommand {
            email: body.email,
            password: body.password,
        })
        .await?;

    let token = state.tokens.issue(&user)?;
    let cookie = Cookie::build((state.config.session_cookie_name.clone(), token.clone()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax);

    let data = LoginData {
        access_token: token,
        token_type: "Bearer",
        expires_in: state.tokens.expires_in(),
        user: UserData::from(user),
    };

    Ok((
        jar.add(cookie),
        Json(Payload::success(data).with_message("user logged in successfully")),
    ))
}
