use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
};
use chrono::{DateTime, Utc};
use rand::rngs::OsRng;
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::Set, PaginatorTrait, QuerySelect};
use serde::Serialize;

use super::{Page, SortOrder};

pub const DEFAULT_PROFILE_PICTURE: &str =
    "https://cdn.pixabay.com/photo/2015/10/05/22/37/blank-profile-picture-973460_1280.png";

/// Represents a user in the `users` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// Primary key (uuid string).
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// Unique display name.
    pub username: String,
    /// Unique email address, used to sign in.
    pub email: String,
    /// Argon2 PHC string. Never serialized.
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub profile_picture: String,
    /// Whether the user has admin privileges.
    pub admin: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::post::Entity")]
    Post,
    #[sea_orm(has_many = "super::comment::Entity")]
    Comment,
}

impl Related<super::post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Post.def()
    }
}

impl Related<super::comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Partial update of a user profile. `None` leaves the field untouched.
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub profile_picture: Option<String>,
}

impl Model {
    pub async fn create(
        db: &DbConn,
        username: &str,
        email: &str,
        password: &str,
        admin: bool,
    ) -> Result<Model, DbErr> {
        let now = Utc::now();
        let user = ActiveModel {
            id: Set(crate::new_id()),
            username: Set(username.to_owned()),
            email: Set(email.to_owned()),
            password_hash: Set(Self::hash_password(password)?),
            profile_picture: Set(DEFAULT_PROFILE_PICTURE.to_owned()),
            admin: Set(admin),
            created_at: Set(now),
            updated_at: Set(now),
        };

        user.insert(db).await
    }

    pub async fn find_by_id(db: &DbConn, id: &str) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id.to_owned()).one(db).await
    }

    pub async fn find_by_email(db: &DbConn, email: &str) -> Result<Option<Model>, DbErr> {
        Entity::find()
            .filter(Column::Email.eq(email.trim()))
            .one(db)
            .await
    }

    /// Looks the user up by email and checks the password.
    ///
    /// Returns `Ok(None)` for an unknown email or a wrong password alike.
    pub async fn authenticate(
        db: &DbConn,
        email: &str,
        password: &str,
    ) -> Result<Option<Model>, DbErr> {
        Ok(Self::find_by_email(db, email)
            .await?
            .filter(|user| user.verify_password(password)))
    }

    pub fn verify_password(&self, password: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(&self.password_hash) else {
            return false;
        };

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    }

    pub fn hash_password(password: &str) -> Result<String, DbErr> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| DbErr::Custom(format!("password hashing failed: {e}")))
    }

    pub async fn update(db: &DbConn, id: &str, changes: UserChanges) -> Result<Model, DbErr> {
        let mut user = ActiveModel {
            id: Set(id.to_owned()),
            updated_at: Set(Utc::now()),
            ..Default::default()
        };

        if let Some(username) = changes.username {
            user.username = Set(username);
        }
        if let Some(email) = changes.email {
            user.email = Set(email);
        }
        if let Some(password) = changes.password {
            user.password_hash = Set(Self::hash_password(&password)?);
        }
        if let Some(picture) = changes.profile_picture {
            user.profile_picture = Set(picture);
        }

        user.update(db).await
    }

    /// Deletes the user. Returns `false` when no row matched.
    pub async fn delete(db: &DbConn, id: &str) -> Result<bool, DbErr> {
        let res = Entity::delete_by_id(id.to_owned()).exec(db).await?;
        Ok(res.rows_affected > 0)
    }

    pub async fn list(db: &DbConn, page: Page, sort: SortOrder) -> Result<Vec<Model>, DbErr> {
        sort.apply(Entity::find(), Column::CreatedAt)
            .offset(page.start_index)
            .limit(page.limit)
            .all(db)
            .await
    }

    pub async fn count(db: &DbConn) -> Result<u64, DbErr> {
        Entity::find().count(db).await
    }

    pub async fn count_created_since(db: &DbConn, since: DateTime<Utc>) -> Result<u64, DbErr> {
        Entity::find()
            .filter(Column::CreatedAt.gte(since))
            .count(db)
            .await
    }
}
