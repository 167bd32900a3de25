//! Login use case.
//!
//! Credentials are checked against the hasher port only; issuing session
//! tokens is the transport adapter's job.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

use common::{AppResult, OptionExt};
use domain::{Email, Password, ValidationError};

use crate::port::dto::{LoginCommand, UserDto};
use crate::port::usecase::LoginUseCase;
use crate::port::{PasswordHasher, UserPersistence};

pub struct LoginService {
    users: Arc<dyn UserPersistence>,
    hasher: Arc<dyn PasswordHasher>,
}

impl LoginService {
    pub fn new(users: Arc<dyn UserPersistence>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { users, hasher }
    }
}

#[async_trait]
impl LoginUseCase for LoginService {
    async fn login(&self, command: LoginCommand) -> AppResult<UserDto> {
        let email = Email::new(&command.email)?;
        Password::new(&command.password)?;

        let user = self
            .users
            .get_by_email(&email)
            .await?
            .ok_or_validation(ValidationError::UserNotFound)?;

        if !self.hasher.verify(&command.password, user.password().value()) {
            warn!(user_id = %user.id(), "Login failed, wrong password");
            return Err(ValidationError::InvalidPassword.into());
        }

        info!(user_id = %user.id(), "User logged in");
        Ok(UserDto::from(&user))
    }
}
