use std::sync::Arc;

use mockall::predicate::eq;

use common::AppError;
use domain::{TodoItem, TodoItemId, UserId, ValidationError};

use super::{todo, OTHER_ID, OWNER_ID, TODO_ID};
use crate::port::dto::{AddTodoCommand, UpdateTodoCommand};
use crate::port::usecase::{
    AddTodoUseCase, CompleteTodoUseCase, DeleteTodoUseCase, GetTodoUseCase, ListTodoUseCase,
    UncompleteTodoUseCase, UpdateTodoUseCase,
};
use crate::port::MockTodoItemPersistence;
use crate::service::{
    AddTodoService, CompleteTodoService, DeleteTodoService, GetTodoService, ListTodoService,
    UncompleteTodoService, UpdateTodoService,
};

fn update_command(user_id: &str, title: &str) -> UpdateTodoCommand {
    UpdateTodoCommand {
        id: TODO_ID.to_string(),
        user_id: user_id.to_string(),
        title: title.to_string(),
        description: "Oat milk".to_string(),
    }
}

fn expect_stored(repo: &mut MockTodoItemPersistence, item: TodoItem) {
    repo.expect_get()
        .with(eq(TodoItemId::new(TODO_ID).unwrap()))
        .returning(move |_| Ok(Some(item.clone())));
}

fn expect_missing(repo: &mut MockTodoItemPersistence) {
    repo.expect_get().returning(|_| Ok(None));
}

#[tokio::test]
async fn test_add_todo_stores_trimmed_item_not_done() {
    let mut repo = MockTodoItemPersistence::new();
    repo.expect_create()
        .withf(|cmd| {
            cmd.title.value() == "Buy milk" && cmd.user_id.value() == OWNER_ID
        })
        .times(1)
        .returning(|cmd| {
            Ok(TodoItem::new(
                TodoItemId::new(TODO_ID).unwrap(),
                cmd.title,
                cmd.description,
                false,
                cmd.user_id,
            ))
        });

    let service = AddTodoService::new(Arc::new(repo));
    let dto = service
        .add(AddTodoCommand {
            user_id: OWNER_ID.to_string(),
            title: "  Buy milk ".to_string(),
            description: "Two litres".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(dto.id, TODO_ID);
    assert_eq!(dto.title, "Buy milk");
    assert!(!dto.is_done);
}

#[tokio::test]
async fn test_add_todo_rejects_blank_title() {
    let mut repo = MockTodoItemPersistence::new();
    repo.expect_create().times(0);

    let service = AddTodoService::new(Arc::new(repo));
    let err = service
        .add(AddTodoCommand {
            user_id: OWNER_ID.to_string(),
            title: "   ".to_string(),
            description: "Two litres".to_string(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::InvalidInput(e) if e.field() == "title"));
}

#[tokio::test]
async fn test_get_todo_missing_is_none() {
    let mut repo = MockTodoItemPersistence::new();
    expect_missing(&mut repo);

    let service = GetTodoService::new(Arc::new(repo));
    assert!(service.get(TODO_ID).await.unwrap().is_none());
}

#[tokio::test]
async fn test_list_todo_maps_every_item() {
    let mut repo = MockTodoItemPersistence::new();
    repo.expect_list()
        .with(eq(UserId::new(OWNER_ID).unwrap()))
        .returning(|_| Ok(vec![todo("a", OWNER_ID, false), todo("b", OWNER_ID, true)]));

    let service = ListTodoService::new(Arc::new(repo));
    let items = service.list(OWNER_ID).await.unwrap();

    assert_eq!(items.len(), 2);
    assert!(items[1].is_done);
}

#[tokio::test]
async fn test_update_todo_by_owner() {
    let mut repo = MockTodoItemPersistence::new();
    expect_stored(&mut repo, todo(TODO_ID, OWNER_ID, true));
    repo.expect_update()
        .withf(|item| item.title().value() == "Buy oat milk" && item.is_done())
        .times(1)
        .returning(|_| Ok(()));

    let service = UpdateTodoService::new(Arc::new(repo));
    service
        .update(update_command(OWNER_ID, "Buy oat milk"))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_update_todo_by_other_user_is_rejected() {
    let mut repo = MockTodoItemPersistence::new();
    expect_stored(&mut repo, todo(TODO_ID, OWNER_ID, false));
    repo.expect_update().times(0);

    let service = UpdateTodoService::new(Arc::new(repo));
    let err = service
        .update(update_command(OTHER_ID, "Buy oat milk"))
        .await
        .unwrap_err();

    assert_eq!(err.business_error(), Some(ValidationError::InvalidUser));
}

#[tokio::test]
async fn test_update_todo_with_blank_title_writes_nothing() {
    let mut repo = MockTodoItemPersistence::new();
    expect_stored(&mut repo, todo(TODO_ID, OWNER_ID, false));
    repo.expect_update().times(0);

    let service = UpdateTodoService::new(Arc::new(repo));
    let err = service.update(update_command(OWNER_ID, "  ")).await.unwrap_err();

    assert!(matches!(err, AppError::InvalidInput(_)));
}

#[tokio::test]
async fn test_update_missing_todo() {
    let mut repo = MockTodoItemPersistence::new();
    expect_missing(&mut repo);
    repo.expect_update().times(0);

    let service = UpdateTodoService::new(Arc::new(repo));
    let err = service
        .update(update_command(OWNER_ID, "Buy oat milk"))
        .await
        .unwrap_err();

    assert_eq!(err.business_error(), Some(ValidationError::TodoNotFound));
}

#[tokio::test]
async fn test_complete_todo_sets_done() {
    let mut repo = MockTodoItemPersistence::new();
    expect_stored(&mut repo, todo(TODO_ID, OWNER_ID, false));
    repo.expect_update()
        .withf(|item| item.is_done())
        .times(1)
        .returning(|_| Ok(()));

    let service = CompleteTodoService::new(Arc::new(repo));
    service.complete(OWNER_ID, TODO_ID).await.unwrap();
}

#[tokio::test]
async fn test_complete_todo_of_other_user_is_rejected() {
    let mut repo = MockTodoItemPersistence::new();
    expect_stored(&mut repo, todo(TODO_ID, OWNER_ID, false));
    repo.expect_update().times(0);

    let service = CompleteTodoService::new(Arc::new(repo));
    let err = service.complete(OTHER_ID, TODO_ID).await.unwrap_err();

    assert_eq!(err.business_error(), Some(ValidationError::InvalidUser));
}

#[tokio::test]
async fn test_complete_missing_todo() {
    let mut repo = MockTodoItemPersistence::new();
    expect_missing(&mut repo);
    repo.expect_update().times(0);

    let service = CompleteTodoService::new(Arc::new(repo));
    let err = service.complete(OWNER_ID, TODO_ID).await.unwrap_err();

    assert_eq!(err.business_error(), Some(ValidationError::TodoNotFound));
}

#[tokio::test]
async fn test_uncomplete_todo_clears_done() {
    let mut repo = MockTodoItemPersistence::new();
    expect_stored(&mut repo, todo(TODO_ID, OWNER_ID, true));
    repo.expect_update()
        .withf(|item| !item.is_done())
        .times(1)
        .returning(|_| Ok(()));

    let service = UncompleteTodoService::new(Arc::new(repo));
    service.uncomplete(OWNER_ID, TODO_ID).await.unwrap();
}

#[tokio::test]
async fn test_uncomplete_todo_of_other_user_is_rejected() {
    let mut repo = MockTodoItemPersistence::new();
    expect_stored(&mut repo, todo(TODO_ID, OWNER_ID, true));
    repo.expect_update().times(0);

    let service = UncompleteTodoService::new(Arc::new(repo));
    let err = service.uncomplete(OTHER_ID, TODO_ID).await.unwrap_err();

    assert_eq!(err.business_error(), Some(ValidationError::InvalidUser));
}

#[tokio::test]
async fn test_uncomplete_missing_todo() {
    let mut repo = MockTodoItemPersistence::new();
    expect_missing(&mut repo);

    let service = UncompleteTodoService::new(Arc::new(repo));
    let err = service.uncomplete(OWNER_ID, TODO_ID).await.unwrap_err();

    assert_eq!(err.business_error(), Some(ValidationError::TodoNotFound));
}

#[tokio::test]
async fn test_delete_todo_by_owner() {
    let mut repo = MockTodoItemPersistence::new();
    expect_stored(&mut repo, todo(TODO_ID, OWNER_ID, false));
    repo.expect_delete()
        .with(eq(TodoItemId::new(TODO_ID).unwrap()))
        .times(1)
        .returning(|_| Ok(()));

    let service = DeleteTodoService::new(Arc::new(repo));
    service.delete(OWNER_ID, TODO_ID).await.unwrap();
}

#[tokio::test]
async fn test_delete_todo_of_other_user_is_rejected() {
    let mut repo = MockTodoItemPersistence::new();
    expect_stored(&mut repo, todo(TODO_ID, OWNER_ID, false));
    repo.expect_delete().times(0);

    let service = DeleteTodoService::new(Arc::new(repo));
    let err = service.delete(OTHER_ID, TODO_ID).await.unwrap_err();

    assert_eq!(err.business_error(), Some(ValidationError::InvalidUser));
}

#[tokio::test]
async fn test_delete_missing_todo() {
    let mut repo = MockTodoItemPersistence::new();
    expect_missing(&mut repo);
    repo.expect_delete().times(0);

    let service = DeleteTodoService::new(Arc::new(repo));
    let err = service.delete(OWNER_ID, TODO_ID).await.unwrap_err();

    assert_eq!(err.business_error(), Some(ValidationError::TodoNotFound));
}
