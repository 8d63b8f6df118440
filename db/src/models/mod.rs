pub mod chatbot;
pub mod comment;
pub mod post;
pub mod prompt;
pub mod user;

pub use chatbot::Entity as Chatbot;
pub use comment::Entity as Comment;
pub use post::Entity as Post;
pub use prompt::Entity as Prompt;
pub use user::Entity as User;

use sea_orm::{ColumnTrait, EntityTrait, Order, QueryOrder, Select};

/// Sort direction accepted by the listing endpoints (`asc` / `desc`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    /// Anything other than `asc` (case-insensitive) sorts newest first.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.eq_ignore_ascii_case("asc") => SortOrder::Asc,
            _ => SortOrder::Desc,
        }
    }

    pub(crate) fn apply<E, C>(self, query: Select<E>, column: C) -> Select<E>
    where
        E: EntityTrait,
        C: ColumnTrait,
    {
        let order = match self {
            SortOrder::Asc => Order::Asc,
            SortOrder::Desc => Order::Desc,
        };
        query.order_by(column, order)
    }
}

/// Offset/limit window shared by the paginated listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub start_index: u64,
    pub limit: u64,
}

impl Page {
    pub const DEFAULT_LIMIT: u64 = 9;
    pub const MAX_LIMIT: u64 = 50;

    pub fn new(start_index: Option<u64>, limit: Option<u64>) -> Self {
        Self {
            start_index: start_index.unwrap_or(0),
            limit: limit
                .unwrap_or(Self::DEFAULT_LIMIT)
                .clamp(1, Self::MAX_LIMIT),
        }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new(None, None)
    }
}
