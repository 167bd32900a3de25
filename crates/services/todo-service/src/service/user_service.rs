//! User use cases: registration, lookup and profile changes.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, warn};

use common::{AppError, AppResult, OptionExt};
use domain::{Email, Password, User, UserId, UserName, ValidationError};

use crate::port::dto::{AddUserCommand, ChangeUserInfoCommand, ChangeUserPasswordCommand, UserDto};
use crate::port::usecase::{
    AddUserUseCase, ChangeUserInfoUseCase, ChangeUserPasswordUseCase, GetUserUseCase,
};
use crate::port::{CreateUserCommand, PasswordHasher, UserPersistence};

/// Hash a raw password and wrap the result for storage.
///
/// Callers check the password with `Password::new` first, but the untrimmed
/// string is what gets hashed.
fn hash_password(hasher: &dyn PasswordHasher, password: &str) -> AppResult<Password> {
    let hash = hasher.hash(password)?;
    Password::new(hash).map_err(|_| AppError::internal("password hasher returned an empty hash"))
}

// =============================================================================
// AddUser
// =============================================================================

pub struct AddUserService {
    users: Arc<dyn UserPersistence>,
    hasher: Arc<dyn PasswordHasher>,
}

impl AddUserService {
    pub fn new(users: Arc<dyn UserPersistence>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { users, hasher }
    }
}

#[async_trait]
impl AddUserUseCase for AddUserService {
    async fn add(&self, command: AddUserCommand) -> AppResult<UserDto> {
        let user_name = UserName::new(&command.user_name)?;
        let email = Email::new(&command.email)?;
        Password::new(&command.password)?;

        if self.users.get_by_email(&email).await?.is_some() {
            warn!(email = %email, "Registration rejected, email already in use");
            return Err(ValidationError::EmailAlreadyExists.into());
        }

        let password = hash_password(self.hasher.as_ref(), &command.password)?;
        let user = self
            .users
            .create(CreateUserCommand {
                user_name,
                email,
                password,
            })
            .await?;

        info!(user_id = %user.id(), "User registered");
        Ok(UserDto::from(&user))
    }
}

// =============================================================================
// GetUser
// =============================================================================

pub struct GetUserService {
    users: Arc<dyn UserPersistence>,
}

impl GetUserService {
    pub fn new(users: Arc<dyn UserPersistence>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl GetUserUseCase for GetUserService {
    async fn get(&self, user_id: &str) -> AppResult<Option<UserDto>> {
        let user_id = UserId::new(user_id)?;
        let user = self.users.get_by_id(&user_id).await?;
        debug!(user_id = %user_id, found = user.is_some(), "Looked up user");

        Ok(user.as_ref().map(UserDto::from))
    }
}

// =============================================================================
// ChangeUserInfo
// =============================================================================

pub struct ChangeUserInfoService {
    users: Arc<dyn UserPersistence>,
}

impl ChangeUserInfoService {
    pub fn new(users: Arc<dyn UserPersistence>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl ChangeUserInfoUseCase for ChangeUserInfoService {
    async fn change_info(&self, command: ChangeUserInfoCommand) -> AppResult<()> {
        let user_id = UserId::new(&command.id)?;
        let user_name = UserName::new(&command.user_name)?;
        let email = Email::new(&command.email)?;

        // Keeping one's own email is not a collision
        if let Some(owner) = self.users.get_by_email(&email).await? {
            if owner.id() != &user_id {
                warn!(user_id = %user_id, "Email change rejected, address belongs to another user");
                return Err(ValidationError::EmailAlreadyExists.into());
            }
        }

        let current = self
            .users
            .get_by_id(&user_id)
            .await?
            .ok_or_validation(ValidationError::UserNotFound)?;

        let updated = User::new(user_id, user_name, email, current.password().clone());
        self.users.update(&updated).await?;

        info!(user_id = %updated.id(), "User info changed");
        Ok(())
    }
}

// =============================================================================
// ChangeUserPassword
// =============================================================================

pub struct ChangeUserPasswordService {
    users: Arc<dyn UserPersistence>,
    hasher: Arc<dyn PasswordHasher>,
}

impl ChangeUserPasswordService {
    pub fn new(users: Arc<dyn UserPersistence>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { users, hasher }
    }
}

#[async_trait]
impl ChangeUserPasswordUseCase for ChangeUserPasswordService {
    async fn change_password(&self, command: ChangeUserPasswordCommand) -> AppResult<()> {
        let user_id = UserId::new(&command.user_id)?;
        Password::new(&command.new_password)?;
        Password::new(&command.old_password)?;

        let mut user = self
            .users
            .get_by_id(&user_id)
            .await?
            .ok_or_validation(ValidationError::UserNotFound)?;

        if !self.hasher.verify(&command.old_password, user.password().value()) {
            warn!(user_id = %user_id, "Password change rejected, old password mismatch");
            return Err(ValidationError::InvalidPassword.into());
        }

        let hashed = hash_password(self.hasher.as_ref(), &command.new_password)?;
        user.change_password(hashed.value())?;
        self.users.update(&user).await?;

        info!(user_id = %user_id, "User password changed");
        Ok(())
    }
}
