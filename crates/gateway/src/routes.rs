//! Route configuration.

use axum::{middleware, Router};

use crate::handlers::{auth_routes, health_routes, todo_routes, user_routes};
use crate::middleware::auth_middleware;
use crate::state::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check (no auth)
        .merge(health_routes())
        // Sign-up and login (no auth)
        .nest("/auth", auth_routes())
        // Everything acting on a user requires that user's session
        .nest(
            "/user",
            user_routes()
                .merge(todo_routes())
                .route_layer(middleware::from_fn_with_state(
                    state.clone(),
                    auth_middleware,
                )),
        )
        .with_state(state)
}
