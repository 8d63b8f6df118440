use crate::seed::{SeedContext, Seeder};
use crate::seeds::all_users;
use async_trait::async_trait;
use db::models::comment::Model as CommentModel;
use db::models::post::{Model as PostModel, PostFilter};
use db::models::{Page, SortOrder};
use fake::{Fake, faker::lorem::en::Sentence};
use sea_orm::DbErr;

pub struct CommentSeeder;

#[async_trait]
impl Seeder for CommentSeeder {
    async fn seed(&self, ctx: &SeedContext<'_>) -> Result<(), DbErr> {
        let readers: Vec<_> = all_users(ctx.db)
            .await?
            .into_iter()
            .filter(|u| !u.admin)
            .collect();
        if readers.is_empty() {
            return Ok(());
        }

        let page = Page::new(None, Some(Page::MAX_LIMIT));
        let posts = PostModel::filter(ctx.db, &PostFilter::default(), page, SortOrder::Desc).await?;

        for post in posts {
            for _ in 0..fastrand::usize(0..4) {
                let author = &readers[fastrand::usize(..readers.len())];
                let text: String = Sentence(4..12).fake();
                let text: String = text.chars().take(200).collect();
                let mut comment = CommentModel::create(ctx.db, &author.id, &post.id, &text).await?;

                for reader in readers.iter().filter(|_| fastrand::bool()) {
                    comment = comment.toggle_like(ctx.db, &reader.id).await?;
                }
            }
        }

        Ok(())
    }
}
