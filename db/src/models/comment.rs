use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::Set, FromJsonQueryResult, IntoActiveModel, PaginatorTrait, QuerySelect};
use serde::{Deserialize, Serialize};

use super::{Page, SortOrder};

/// Ids of the users who liked a comment, stored as a JSON array.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
#[serde(transparent)]
pub struct Likes(pub Vec<String>);

impl Likes {
    /// Adds `user_id` if absent, removes it otherwise.
    pub fn toggle(&mut self, user_id: &str) {
        match self.0.iter().position(|id| id == user_id) {
            Some(index) => {
                self.0.remove(index);
            }
            None => self.0.push(user_id.to_owned()),
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "comments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    pub user_id: String,
    pub post_id: String,

    pub content: String,
    #[sea_orm(column_type = "Json")]
    pub likes: Likes,
    pub number_of_likes: i32,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::post::Entity",
        from = "Column::PostId",
        to = "super::post::Column::Id",
        on_delete = "Cascade"
    )]
    Post,

    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Post.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(
        db: &DbConn,
        user_id: &str,
        post_id: &str,
        content: &str,
    ) -> Result<Model, DbErr> {
        let now = Utc::now();
        let comment = ActiveModel {
            id: Set(crate::new_id()),
            user_id: Set(user_id.to_owned()),
            post_id: Set(post_id.to_owned()),
            content: Set(content.to_owned()),
            likes: Set(Likes::default()),
            number_of_likes: Set(0),
            created_at: Set(now),
            updated_at: Set(now),
        };

        comment.insert(db).await
    }

    pub async fn find_by_id(db: &DbConn, id: &str) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id.to_owned()).one(db).await
    }

    /// All comments on a post, newest first.
    pub async fn for_post(db: &DbConn, post_id: &str) -> Result<Vec<Model>, DbErr> {
        SortOrder::Desc
            .apply(
                Entity::find().filter(Column::PostId.eq(post_id)),
                Column::CreatedAt,
            )
            .all(db)
            .await
    }

    /// Toggles `user_id` in the like list and keeps `number_of_likes` in step.
    ///
    /// Read-modify-write; concurrent toggles on the same comment are
    /// last-write-wins.
    pub async fn toggle_like(self, db: &DbConn, user_id: &str) -> Result<Model, DbErr> {
        let mut likes = self.likes.clone();
        likes.toggle(user_id);

        let mut active = self.into_active_model();
        active.number_of_likes = Set(likes.len() as i32);
        active.likes = Set(likes);
        active.update(db).await
    }

    pub async fn edit(db: &DbConn, id: &str, content: &str) -> Result<Model, DbErr> {
        let comment = ActiveModel {
            id: Set(id.to_owned()),
            content: Set(content.to_owned()),
            updated_at: Set(Utc::now()),
            ..Default::default()
        };

        comment.update(db).await
    }

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
