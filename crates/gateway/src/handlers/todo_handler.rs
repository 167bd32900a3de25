//! Todo item handlers.
//!
//! The acting user is always the authenticated one; the `userId` path
//! segment has already been matched against it by the auth middleware.

use axum::{
    extract::{Extension, Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, patch, post, put},
    Router,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

use common::{AppResult, Payload};
use todo_service_lib::port::dto::{AddTodoCommand, TodoItemDto, UpdateTodoCommand};

use crate::extractors::ValidatedJson;
use crate::middleware::CurrentUser;
use crate::state::AppState;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TodoData {
    pub id: String,
    pub title: String,
    pub description: String,
    pub is_done: bool,
}

impl From<TodoItemDto> for TodoData {
    fn from(item: TodoItemDto) -> Self {
        Self {
            id: item.id,
            title: item.title,
            description: item.description,
            is_done: item.is_done,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TodoList {
    pub todos: Vec<TodoData>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct TodoRequest {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,
}

type TodoPath = Path<(String, String)>;

/// Create todo routes. Mounted behind the auth middleware.
pub fn todo_routes() -> Router<AppState> {
    Router::new()
        .route("/:userId/todo-items", get(list_todo_items))
        .route("/:userId/todo-item", post(add_todo_item))
        .route(
            "/:userId/todo-item/:todoItemId",
            put(update_todo_item).delete(delete_todo_item),
        )
        .route("/:userId/todo-item/:todoItemId/complete", patch(complete_todo_item))
        .route(
            "/:userId/todo-item/:todoItemId/uncomplete",
            patch(uncomplete_todo_item),
        )
}

pub async fn list_todo_items(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
) -> AppResult<Json<Payload<TodoList>>> {
    let todos = state.app.list_todo().list(&current_user.id).await?;
    let list = TodoList {
        todos: todos.into_iter().map(TodoData::from).collect(),
    };

    Ok(Json(Payload::success(list)))
}

pub async fn add_todo_item(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<TodoRequest>,
) -> AppResult<(StatusCode, Json<Payload<TodoData>>)> {
    let item = state
        .app
        .add_todo()
        .add(AddTodoCommand {
            user_id: current_user.id,
            title: body.title,
            description: body.description,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(Payload::success(TodoData::from(item)).with_message("todo item created")),
    ))
}

pub async fn update_todo_item(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path((_, todo_item_id)): TodoPath,
    ValidatedJson(body): ValidatedJson<TodoRequest>,
) -> AppResult<(StatusCode, Json<Payload<()>>)> {
    state
        .app
        .update_todo()
        .update(UpdateTodoCommand {
            id: todo_item_id,
            user_id: current_user.id,
            title: body.title,
            description: body.description,
        })
        .await?;

    Ok(accepted("todo item updated"))
}

pub async fn complete_todo_item(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path((_, todo_item_id)): TodoPath,
) -> AppResult<(StatusCode, Json<Payload<()>>)> {
    state
        .app
        .complete_todo()
        .complete(&current_user.id, &todo_item_id)
        .await?;

    Ok(accepted("todo item completed"))
}

pub async fn uncomplete_todo_item(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path((_, todo_item_id)): TodoPath,
) -> AppResult<(StatusCode, Json<Payload<()>>)> {
    state
        .app
        .uncomplete_todo()
        .uncomplete(&current_user.id, &todo_item_id)
        .await?;

    Ok(accepted("todo item uncompleted"))
}

pub async fn delete_todo_item(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path((_, todo_item_id)): TodoPath,
) -> AppResult<(StatusCode, Json<Payload<()>>)> {
    state
        .app
        .delete_todo()
        .delete(&current_user.id, &todo_item_id)
        .await?;

    Ok(accepted("todo item deleted"))
}

fn accepted(message: &str) -> (StatusCode, Json<Payload<()>>) {
    (StatusCode::ACCEPTED, Json(Payload::empty().with_message(message)))
}
