//! Authentication middleware.
//!
//! The session token is read from the session cookie, falling back to an
//! `Authorization: Bearer` header. When the matched route has a `userId`
//! segment the token subject must equal it.

use std::collections::HashMap;

use axum::{
    body::Body,
    extract::{Path, State},
    http::{header::AUTHORIZATION, HeaderMap, Request},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::CookieJar;

use common::{AppError, AppResult};

use crate::state::AppState;

/// Route segment naming the user a request acts on
pub const USER_ID_PARAM: &str = "userId";

/// Current authenticated user extracted from the session token.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: String,
}

/// Authentication middleware that validates session tokens.
pub async fn auth_middleware(
    State(state): State<AppState>,
    Path(params): Path<HashMap<String, String>>,
    jar: CookieJar,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let token = extract_token(&jar, request.headers(), &state.config.session_cookie_name)?;
    let claims = state.tokens.verify(&token)?;

    if let Some(user_id) = params.get(USER_ID_PARAM) {
        if user_id != &claims.sub {
            tracing::warn!(caller = %claims.sub, requested = %user_id, "Session does not match user in path");
            return Err(AppError::Forbidden);
        }
    }

    request
        .extensions_mut()
        .insert(CurrentUser { id: claims.sub });

    Ok(next.run(request).await)
}

/// Session cookie first, then bearer header.
fn extract_token(jar: &CookieJar, headers: &HeaderMap, cookie_name: &str) -> AppResult<String> {
    if let Some(cookie) = jar.get(cookie_name) {
        return Ok(cookie.value().to_string());
    }

    let auth_header = headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or(AppError::Unauthorized)?;

    auth_header
        .strip_prefix("Bearer ")
        .map(str::to_string)
        .ok_or(AppError::Unauthorized)
}
