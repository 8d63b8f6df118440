use crate::seed::{SeedContext, Seeder};
use crate::seeds::skip_duplicate;
use async_trait::async_trait;
use db::models::post::{Model as PostModel, NewPost};
use db::models::user::Model as UserModel;
use fake::{
    Fake,
    faker::lorem::en::{Paragraph, Sentence},
};
use sea_orm::DbErr;

const CATEGORIES: [&str; 4] = ["rust", "databases", "devops", "uncategorized"];

pub struct PostSeeder;

#[async_trait]
impl Seeder for PostSeeder {
    async fn seed(&self, ctx: &SeedContext<'_>) -> Result<(), DbErr> {
        let Some(admin) = UserModel::find_by_email(ctx.db, &ctx.config.admin_email).await? else {
            return Err(DbErr::Custom("admin user missing; run the user seeder first".into()));
        };

        for i in 1..=8 {
            let sentence: String = Sentence(3..6).fake();
            let content: String = Paragraph(3..6).fake();
            let post = NewPost {
                title: format!("{} {i}", sentence.trim_end_matches('.')),
                content,
                category: Some(CATEGORIES[fastrand::usize(..CATEGORIES.len())].to_owned()),
                image: None,
            };

            skip_duplicate(PostModel::create(ctx.db, &admin.id, post).await)?;
        }

        Ok(())
    }
}
