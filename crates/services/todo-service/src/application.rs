//! Wiring of ports into use cases.
//!
//! [`ApplicationBuilder`] collects the driven ports once at startup and
//! hands back an [`Application`]. Transport adapters hold the application
//! and ask it for the use cases they call.

use std::sync::Arc;

use common::{AppError, AppResult};

use crate::port::usecase::{
    AddTodoUseCase, AddUserUseCase, ChangeUserInfoUseCase, ChangeUserPasswordUseCase,
    CompleteTodoUseCase, DeleteTodoUseCase, GetTodoUseCase, GetUserUseCase, ListTodoUseCase,
    LoginUseCase, UncompleteTodoUseCase, UpdateTodoUseCase,
};
use crate::port::{PasswordHasher, TodoItemPersistence, UserPersistence};
use crate::service::{
    AddTodoService, AddUserService, ChangeUserInfoService, ChangeUserPasswordService,
    CompleteTodoService, DeleteTodoService, GetTodoService, GetUserService, ListTodoService,
    LoginService, UncompleteTodoService, UpdateTodoService,
};

/// Collects the driven ports. Every port is required.
#[derive(Default)]
pub struct ApplicationBuilder {
    todos: Option<Arc<dyn TodoItemPersistence>>,
    users: Option<Arc<dyn UserPersistence>>,
    hasher: Option<Arc<dyn PasswordHasher>>,
}

impl ApplicationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn todo_persistence(mut self, todos: Arc<dyn TodoItemPersistence>) -> Self {
        self.todos = Some(todos);
        self
    }

    pub fn user_persistence(mut self, users: Arc<dyn UserPersistence>) -> Self {
        self.users = Some(users);
        self
    }

    pub fn password_hasher(mut self, hasher: Arc<dyn PasswordHasher>) -> Self {
        self.hasher = Some(hasher);
        self
    }

    /// Fails if any port was not supplied
    pub fn build(self) -> AppResult<Application> {
        let todos = self
            .todos
            .ok_or_else(|| AppError::internal("todo persistence not configured"))?;
        let users = self
            .users
            .ok_or_else(|| AppError::internal("user persistence not configured"))?;
        let hasher = self
            .hasher
            .ok_or_else(|| AppError::internal("password hasher not configured"))?;

        Ok(Application {
            add_user: Arc::new(AddUserService::new(users.clone(), hasher.clone())),
            get_user: Arc::new(GetUserService::new(users.clone())),
            change_user_info: Arc::new(ChangeUserInfoService::new(users.clone())),
            change_user_password: Arc::new(ChangeUserPasswordService::new(
                users.clone(),
                hasher.clone(),
            )),
            login: Arc::new(LoginService::new(users, hasher)),
            add_todo: Arc::new(AddTodoService::new(todos.clone())),
            get_todo: Arc::new(GetTodoService::new(todos.clone())),
            list_todo: Arc::new(ListTodoService::new(todos.clone())),
            update_todo: Arc::new(UpdateTodoService::new(todos.clone())),
            complete_todo: Arc::new(CompleteTodoService::new(todos.clone())),
            uncomplete_todo: Arc::new(UncompleteTodoService::new(todos.clone())),
            delete_todo: Arc::new(DeleteTodoService::new(todos)),
        })
    }
}

/// All use cases, built once and shared.
#[derive(Clone)]
pub struct Application {
    add_user: Arc<dyn AddUserUseCase>,
    get_user: Arc<dyn GetUserUseCase>,
    change_user_info: Arc<dyn ChangeUserInfoUseCase>,
    change_user_password: Arc<dyn ChangeUserPasswordUseCase>,
    login: Arc<dyn LoginUseCase>,
    add_todo: Arc<dyn AddTodoUseCase>,
    get_todo: Arc<dyn GetTodoUseCase>,
    list_todo: Arc<dyn ListTodoUseCase>,
    update_todo: Arc<dyn UpdateTodoUseCase>,
    complete_todo: Arc<dyn CompleteTodoUseCase>,
    uncomplete_todo: Arc<dyn UncompleteTodoUseCase>,
    delete_todo: Arc<dyn DeleteTodoUseCase>,
}

impl Application {
    pub fn builder() -> ApplicationBuilder {
        ApplicationBuilder::new()
    }

    pub fn add_user(&self) -> Arc<dyn AddUserUseCase> {
        self.add_user.clone()
    }

    pub fn get_user(&self) -> Arc<dyn GetUserUseCase> {
        self.get_user.clone()
    }

    pub fn change_user_info(&self) -> Arc<dyn ChangeUserInfoUseCase> {
        self.change_user_info.clone()
    }

    pub fn change_user_password(&self) -> Arc<dyn ChangeUserPasswordUseCase> {
        self.change_user_password.clone()
    }

    pub fn login(&self) -> Arc<dyn LoginUseCase> {
        self.login.clone()
    }

    pub fn add_todo(&self) -> Arc<dyn AddTodoUseCase> {
        self.add_todo.clone()
    }

    pub fn get_todo(&self) -> Arc<dyn GetTodoUseCase> {
        self.get_todo.clone()
    }

    pub fn list_todo(&self) -> Arc<dyn ListTodoUseCase> {
        self.list_todo.clone()
    }

    pub fn update_todo(&self) -> Arc<dyn UpdateTodoUseCase> {
        self.update_todo.clone()
    }

    pub fn complete_todo(&self) -> Arc<dyn CompleteTodoUseCase> {
        self.complete_todo.clone()
    }

    pub fn uncomplete_todo(&self) -> Arc<dyn UncompleteTodoUseCase> {
        self.uncomplete_todo.clone()
    }

    pub fn delete_todo(&self) -> Arc<dyn DeleteTodoUseCase> {
        self.delete_todo.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::port::{MockPasswordHasher, MockTodoItemPersistence, MockUserPersistence};

    #[test]
    fn test_build_with_all_ports() {
        let app = Application::builder()
            .todo_persistence(Arc::new(MockTodoItemPersistence::new()))
            .user_persistence(Arc::new(MockUserPersistence::new()))
            .password_hasher(Arc::new(MockPasswordHasher::new()))
            .build();

        assert!(app.is_ok());
    }

    #[test]
    fn test_build_without_hasher_fails() {
        let result = Application::builder()
            .todo_persistence(Arc::new(MockTodoItemPersistence::new()))
            .user_persistence(Arc::new(MockUserPersistence::new()))
            .build();

        match result {
            Err(AppError::Internal(msg)) => assert!(msg.contains("password hasher")),
            _ => panic!("expected a missing port error"),
        }
    }
}
