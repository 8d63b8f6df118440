use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::Set, Condition, PaginatorTrait, QuerySelect};
use serde::{Deserialize, Serialize};

use super::{Page, SortOrder};

pub const DEFAULT_IMAGE: &str =
    "https://www.hostinger.com/tutorials/wp-content/uploads/sites/2/2021/09/how-to-write-a-blog-post.png";
pub const DEFAULT_CATEGORY: &str = "uncategorized";

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    pub user_id: String,

    pub title: String,
    pub content: String,
    pub image: String,
    pub category: String,
    pub slug: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    User,

    #[sea_orm(has_many = "super::comment::Entity")]
    Comment,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Fields accepted when creating a post. Empty optional fields fall back to
/// the defaults.
#[derive(Debug, Clone, Default)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub category: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct PostChanges {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub image: Option<String>,
}

/// Query filters for the public post listing. All filters are conjunctive.
#[derive(Debug, Clone, Default)]
pub struct PostFilter {
    pub user_id: Option<String>,
    pub category: Option<String>,
    pub slug: Option<String>,
    pub post_id: Option<String>,
    /// Case-insensitive substring match against title or content.
    pub search_term: Option<String>,
}

impl PostFilter {
    fn condition(&self) -> Condition {
        let mut cond = Condition::all();
        if let Some(user_id) = &self.user_id {
            cond = cond.add(Column::UserId.eq(user_id.as_str()));
        }
        if let Some(category) = &self.category {
            cond = cond.add(Column::Category.eq(category.as_str()));
        }
        if let Some(slug) = &self.slug {
            cond = cond.add(Column::Slug.eq(slug.as_str()));
        }
        if let Some(post_id) = &self.post_id {
            cond = cond.add(Column::Id.eq(post_id.as_str()));
        }
        if let Some(term) = self.search_term.as_deref().filter(|t| !t.trim().is_empty()) {
            cond = cond.add(
                Condition::any()
                    .add(Column::Title.contains(term))
                    .add(Column::Content.contains(term)),
            );
        }
        cond
    }
}

/// Lowercases the title, joins words with `-` and drops everything that is
/// not alphanumeric or a dash.
pub fn slugify(title: &str) -> String {
    title
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-')
        .collect()
}

/// Slug stored for a post: `slugify(title)`, or `post-<id>` when the title has
/// no ASCII letters or digits to build one from.
fn slug_for(title: &str, id: &str) -> String {
    let slug = slugify(title);
    if slug.chars().any(|c| c.is_ascii_alphanumeric()) {
        slug
    } else {
        format!("post-{id}")
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl Model {
    pub async fn create(db: &DbConn, user_id: &str, post: NewPost) -> Result<Model, DbErr> {
        let now = Utc::now();
        let id = crate::new_id();
        let model = ActiveModel {
            slug: Set(slug_for(&post.title, &id)),
            id: Set(id),
            user_id: Set(user_id.to_owned()),
            title: Set(post.title),
            content: Set(post.content),
            image: Set(non_empty(post.image).unwrap_or_else(|| DEFAULT_IMAGE.to_owned())),
            category: Set(non_empty(post.category).unwrap_or_else(|| DEFAULT_CATEGORY.to_owned())),
            created_at: Set(now),
            updated_at: Set(now),
        };

        model.insert(db).await
    }

    pub async fn find_by_id(db: &DbConn, id: &str) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id.to_owned()).one(db).await
    }

    /// Returns one page of posts matching `filter`, ordered by `updated_at`.
    pub async fn filter(
        db: &DbConn,
        filter: &PostFilter,
        page: Page,
        sort: SortOrder,
    ) -> Result<Vec<Model>, DbErr> {
        sort.apply(Entity::find().filter(filter.condition()), Column::UpdatedAt)
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

    pub async fn update(db: &DbConn, id: &str, changes: PostChanges) -> Result<Model, DbErr> {
        let mut post = ActiveModel {
            id: Set(id.to_owned()),
            updated_at: Set(Utc::now()),
            ..Default::default()
        };

        if let Some(title) = non_empty(changes.title) {
            post.slug = Set(slug_for(&title, id));
            post.title = Set(title);
        }
        if let Some(content) = non_empty(changes.content) {
            post.content = Set(content);
        }
        if let Some(category) = non_empty(changes.category) {
            post.category = Set(category);
        }
        if let Some(image) = non_empty(changes.image) {
            post.image = Set(image);
        }

        post.update(db).await
    }

    /// Deletes the post (and, through the foreign key, its comments).
    pub async fn delete(db: &DbConn, id: &str) -> Result<bool, DbErr> {
        let res = Entity::delete_by_id(id.to_owned()).exec(db).await?;
        Ok(res.rows_affected > 0)
    }
}
