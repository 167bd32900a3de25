use std::sync::Arc;

use mockall::predicate::eq;

use common::AppError;
use domain::{Email, User, UserId, ValidationError};

use super::{user, OTHER_ID, OWNER_ID};
use crate::port::dto::{AddUserCommand, ChangeUserInfoCommand, ChangeUserPasswordCommand};
use crate::port::usecase::{
    AddUserUseCase, ChangeUserInfoUseCase, ChangeUserPasswordUseCase, GetUserUseCase,
};
use crate::port::{MockPasswordHasher, MockUserPersistence};
use crate::service::{
    AddUserService, ChangeUserInfoService, ChangeUserPasswordService, GetUserService,
};

fn prefixing_hasher() -> MockPasswordHasher {
    let mut hasher = MockPasswordHasher::new();
    hasher
        .expect_hash()
        .returning(|password| Ok(format!("hashed:{password}")));
    hasher
        .expect_verify()
        .returning(|password, hash| hash == format!("hashed:{password}"));
    hasher
}

fn add_command(email: &str) -> AddUserCommand {
    AddUserCommand {
        user_name: " Jane ".to_string(),
        email: email.to_string(),
        password: "secret".to_string(),
    }
}

#[tokio::test]
async fn test_add_user_hashes_password_and_returns_id() {
    let mut repo = MockUserPersistence::new();
    repo.expect_get_by_email().returning(|_| Ok(None));
    repo.expect_create()
        .withf(|cmd| cmd.password.value() == "hashed:secret" && cmd.user_name.value() == "Jane")
        .times(1)
        .returning(|cmd| {
            Ok(User::new(
                UserId::new(OWNER_ID).unwrap(),
                cmd.user_name,
                cmd.email,
                cmd.password,
            ))
        });

    let service = AddUserService::new(Arc::new(repo), Arc::new(prefixing_hasher()));
    let dto = service.add(add_command("jane@example.com")).await.unwrap();

    assert_eq!(dto.id, OWNER_ID);
    assert_eq!(dto.user_name, "Jane");
    assert_eq!(dto.email, "jane@example.com");
}

#[tokio::test]
async fn test_add_user_hashes_password_untrimmed() {
    let mut repo = MockUserPersistence::new();
    repo.expect_get_by_email().returning(|_| Ok(None));
    repo.expect_create()
        .withf(|cmd| cmd.password.value() == "hashed:  secret  ")
        .times(1)
        .returning(|cmd| {
            Ok(User::new(
                UserId::new(OWNER_ID).unwrap(),
                cmd.user_name,
                cmd.email,
                cmd.password,
            ))
        });

    let service = AddUserService::new(Arc::new(repo), Arc::new(prefixing_hasher()));
    let mut command = add_command("jane@example.com");
    command.password = "  secret  ".to_string();
    service.add(command).await.unwrap();
}

#[tokio::test]
async fn test_add_user_with_blank_password() {
    let mut repo = MockUserPersistence::new();
    repo.expect_get_by_email().times(0);
    repo.expect_create().times(0);

    let mut hasher = MockPasswordHasher::new();
    hasher.expect_hash().times(0);

    let service = AddUserService::new(Arc::new(repo), Arc::new(hasher));
    let mut command = add_command("jane@example.com");
    command.password = "   ".to_string();
    let err = service.add(command).await.unwrap_err();

    assert!(matches!(err, AppError::InvalidInput(e) if e.field() == "password"));
}

#[tokio::test]
async fn test_add_user_with_taken_email() {
    let mut repo = MockUserPersistence::new();
    repo.expect_get_by_email()
        .with(eq(Email::new("jane@example.com").unwrap()))
        .returning(|_| Ok(Some(user(OTHER_ID, "jane@example.com"))));
    repo.expect_create().times(0);

    let service = AddUserService::new(Arc::new(repo), Arc::new(prefixing_hasher()));
    let err = service.add(add_command("jane@example.com")).await.unwrap_err();

    assert_eq!(err.business_error(), Some(ValidationError::EmailAlreadyExists));
}

#[tokio::test]
async fn test_add_user_with_malformed_email() {
    let mut repo = MockUserPersistence::new();
    repo.expect_get_by_email().times(0);
    repo.expect_create().times(0);

    let service = AddUserService::new(Arc::new(repo), Arc::new(prefixing_hasher()));
    let err = service.add(add_command("not-an-email")).await.unwrap_err();

    assert!(matches!(err, AppError::InvalidInput(e) if e.field() == "email"));
}

#[tokio::test]
async fn test_add_user_with_empty_hash_is_internal() {
    let mut repo = MockUserPersistence::new();
    repo.expect_get_by_email().returning(|_| Ok(None));
    repo.expect_create().times(0);

    let mut hasher = MockPasswordHasher::new();
    hasher.expect_hash().returning(|_| Ok(String::new()));

    let service = AddUserService::new(Arc::new(repo), Arc::new(hasher));
    let err = service.add(add_command("jane@example.com")).await.unwrap_err();

    assert!(matches!(err, AppError::Internal(_)));
}

#[tokio::test]
async fn test_get_user() {
    let mut repo = MockUserPersistence::new();
    repo.expect_get_by_id()
        .with(eq(UserId::new(OWNER_ID).unwrap()))
        .returning(|id| Ok(Some(user(id.value(), "jane@example.com"))));

    let service = GetUserService::new(Arc::new(repo));
    let dto = service.get(OWNER_ID).await.unwrap().unwrap();

    assert_eq!(dto.email, "jane@example.com");
}

#[tokio::test]
async fn test_get_missing_user_is_none() {
    let mut repo = MockUserPersistence::new();
    repo.expect_get_by_id().returning(|_| Ok(None));

    let service = GetUserService::new(Arc::new(repo));
    assert!(service.get(OWNER_ID).await.unwrap().is_none());
}

#[tokio::test]
async fn test_change_info_keeping_own_email() {
    let mut repo = MockUserPersistence::new();
    repo.expect_get_by_email()
        .returning(|_| Ok(Some(user(OWNER_ID, "jane@example.com"))));
    repo.expect_get_by_id()
        .returning(|id| Ok(Some(user(id.value(), "jane@example.com"))));
    repo.expect_update()
        .withf(|u| u.user_name().value() == "Janet" && u.password().value() == "hashed:secret")
        .times(1)
        .returning(|_| Ok(()));

    let service = ChangeUserInfoService::new(Arc::new(repo));
    service
        .change_info(ChangeUserInfoCommand {
            id: OWNER_ID.to_string(),
            user_name: "Janet".to_string(),
            email: "jane@example.com".to_string(),
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn test_change_info_to_email_of_another_user() {
    let mut repo = MockUserPersistence::new();
    repo.expect_get_by_email()
        .returning(|_| Ok(Some(user(OTHER_ID, "john@example.com"))));
    repo.expect_update().times(0);

    let service = ChangeUserInfoService::new(Arc::new(repo));
    let err = service
        .change_info(ChangeUserInfoCommand {
            id: OWNER_ID.to_string(),
            user_name: "Jane".to_string(),
            email: "john@example.com".to_string(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.business_error(), Some(ValidationError::EmailAlreadyExists));
}

#[tokio::test]
async fn test_change_info_of_missing_user() {
    let mut repo = MockUserPersistence::new();
    repo.expect_get_by_email().returning(|_| Ok(None));
    repo.expect_get_by_id().returning(|_| Ok(None));
    repo.expect_update().times(0);

    let service = ChangeUserInfoService::new(Arc::new(repo));
    let err = service
        .change_info(ChangeUserInfoCommand {
            id: OWNER_ID.to_string(),
            user_name: "Jane".to_string(),
            email: "jane@example.com".to_string(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.business_error(), Some(ValidationError::UserNotFound));
}

#[tokio::test]
async fn test_change_password() {
    let mut repo = MockUserPersistence::new();
    repo.expect_get_by_id()
        .returning(|id| Ok(Some(user(id.value(), "jane@example.com"))));
    repo.expect_update()
        .withf(|u| u.password().value() == "hashed:new-secret")
        .times(1)
        .returning(|_| Ok(()));

    let service = ChangeUserPasswordService::new(Arc::new(repo), Arc::new(prefixing_hasher()));
    service
        .change_password(ChangeUserPasswordCommand {
            user_id: OWNER_ID.to_string(),
            new_password: "new-secret".to_string(),
            old_password: "secret".to_string(),
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn test_change_password_with_wrong_old_password() {
    let mut repo = MockUserPersistence::new();
    repo.expect_get_by_id()
        .returning(|id| Ok(Some(user(id.value(), "jane@example.com"))));
    repo.expect_update().times(0);

    let mut hasher = MockPasswordHasher::new();
    hasher
        .expect_verify()
        .withf(|password, _| password == "wrong")
        .returning(|_, _| false);
    hasher.expect_hash().times(0);

    let service = ChangeUserPasswordService::new(Arc::new(repo), Arc::new(hasher));
    let err = service
        .change_password(ChangeUserPasswordCommand {
            user_id: OWNER_ID.to_string(),
            new_password: "new-secret".to_string(),
            old_password: "wrong".to_string(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.business_error(), Some(ValidationError::InvalidPassword));
}

#[tokio::test]
async fn test_change_password_of_missing_user() {
    let mut repo = MockUserPersistence::new();
    repo.expect_get_by_id().returning(|_| Ok(None));

    let service = ChangeUserPasswordService::new(Arc::new(repo), Arc::new(prefixing_hasher()));
    let err = service
        .change_password(ChangeUserPasswordCommand {
            user_id: OWNER_ID.to_string(),
            new_password: "new-secret".to_string(),
            old_password: "secret".to_string(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.business_error(), Some(ValidationError::UserNotFound));
}
