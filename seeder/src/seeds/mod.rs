pub mod chatbot;
pub mod comment;
pub mod post;
pub mod user;

use db::models::user::{Entity as UserEntity, Model as UserModel};
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, SqlErr};

/// `Ok(None)` when the insert only failed on a unique column, so seeding
/// twice is harmless.
pub(crate) fn skip_duplicate<T>(result: Result<T, DbErr>) -> Result<Option<T>, DbErr> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => Ok(None),
        Err(e) => Err(e),
    }
}

pub(crate) async fn all_users(db: &DatabaseConnection) -> Result<Vec<UserModel>, DbErr> {
    UserEntity::find().all(db).await
}
