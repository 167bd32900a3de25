//! User database entity for SeaORM.

use sea_orm::entity::prelude::*;

use common::AppError;
use domain::{Email, Password, User, UserId, UserName};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub user_name: String,
    #[sea_orm(unique)]
    pub email: String,
    /// Argon2 PHC string
    pub password: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for User {
    type Error = AppError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let corrupt = |e: domain::InvalidInputError| {
            AppError::internal(format!("Corrupt users row {}: {}", model.id, e))
        };

        Ok(User::new(
            UserId::new(&model.id).map_err(corrupt)?,
            UserName::new(&model.user_name).map_err(corrupt)?,
            Email::new(&model.email).map_err(corrupt)?,
            Password::new(&model.password).map_err(corrupt)?,
        ))
    }
}
