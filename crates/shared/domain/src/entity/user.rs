use crate::error::InputResult;
use crate::value::{Email, Password, UserId, UserName};

/// Application user. `password` holds the stored hash, never plain text.
#[derive(Debug, Clone)]
pub struct User {
    id: UserId,
    user_name: UserName,
    email: Email,
    password: Password,
}

impl User {
    pub fn new(id: UserId, user_name: UserName, email: Email, password: Password) -> Self {
        Self {
            id,
            user_name,
            email,
            password,
        }
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn user_name(&self) -> &UserName {
        &self.user_name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn password(&self) -> &Password {
        &self.password
    }

    pub fn rename(&mut self, user_name: &str) -> InputResult<()> {
        self.user_name = UserName::new(user_name)?;
        Ok(())
    }

    pub fn change_email(&mut self, email: &str) -> InputResult<()> {
        self.email = Email::new(email)?;
        Ok(())
    }

    /// Replace the stored password hash
    pub fn change_password(&mut self, password: &str) -> InputResult<()> {
        self.password = Password::new(password)?;
        Ok(())
    }

    /// Same user iff both identifier and email match.
    ///
    /// A record read before an email change compares unequal to the same
    /// account read after it.
    pub fn is(&self, other: &User) -> bool {
        self.id == other.id && self.email == other.email
    }
}
