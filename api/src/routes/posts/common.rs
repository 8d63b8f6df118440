use db::models::post::{Model as PostModel, PostFilter};
use db::models::{Page, SortOrder};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub content: String,
    pub image: String,
    pub category: String,
    pub slug: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<PostModel> for PostResponse {
    fn from(post: PostModel) -> Self {
        Self {
            id: post.id,
            user_id: post.user_id,
            title: post.title,
            content: post.content,
            image: post.image,
            category: post.category,
            slug: post.slug,
            created_at: post.created_at.to_rfc3339(),
            updated_at: post.updated_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostsListResponse {
    pub posts: Vec<PostResponse>,
    pub total_posts: u64,
    pub last_month_posts: u64,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreatePostRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Please provide all required fields"))]
    pub title: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Please provide all required fields"))]
    pub content: String,

    pub category: Option<String>,

    #[validate(url(message = "Image must be a URL"))]
    pub image: Option<String>,
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    #[validate(url(message = "Image must be a URL"))]
    pub image: Option<String>,
}

/// Filters and paging for the public post listing.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetPostsQuery {
    pub user_id: Option<String>,
    pub category: Option<String>,
    pub slug: Option<String>,
    pub post_id: Option<String>,
    pub search_term: Option<String>,
    pub start_index: Option<u64>,
    pub limit: Option<u64>,
    pub order: Option<String>,
}

impl GetPostsQuery {
    pub fn filter(&self) -> PostFilter {
        PostFilter {
            user_id: self.user_id.clone(),
            category: self.category.clone(),
            slug: self.slug.clone(),
            post_id: self.post_id.clone(),
            search_term: self.search_term.clone(),
        }
    }

    pub fn page(&self) -> Page {
        Page::new(self.start_index, self.limit)
    }

    pub fn order(&self) -> SortOrder {
        SortOrder::parse(self.order.as_deref())
    }
}
