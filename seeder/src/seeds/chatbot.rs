use crate::seed::{SeedContext, Seeder};
use async_trait::async_trait;
use db::models::chatbot::Model as ChatbotModel;
use db::models::prompt::Model as PromptModel;
use db::models::user::Model as UserModel;
use sea_orm::DbErr;

/// A default prompt and one knowledge entry, owned by the admin.
pub struct ChatbotSeeder;

#[async_trait]
impl Seeder for ChatbotSeeder {
    async fn seed(&self, ctx: &SeedContext<'_>) -> Result<(), DbErr> {
        let Some(admin) = UserModel::find_by_email(ctx.db, &ctx.config.admin_email).await? else {
            return Err(DbErr::Custom("admin user missing; run the user seeder first".into()));
        };

        if PromptModel::all(ctx.db).await?.is_empty() {
            PromptModel::create(
                ctx.db,
                &admin.id,
                "Default tone",
                "You answer questions about this blog. Keep replies short and friendly.",
            )
            .await?;
        }

        if ChatbotModel::all(ctx.db).await?.is_empty() {
            ChatbotModel::create(ctx.db, &admin.id, "About the blog", "about.txt").await?;
        }

        Ok(())
    }
}
