use crate::seed::{SeedContext, Seeder};
use crate::seeds::skip_duplicate;
use async_trait::async_trait;
use db::models::user::Model;
use fake::{Fake, faker::internet::en::SafeEmail};
use sea_orm::DbErr;

pub struct UserSeeder;

#[async_trait]
impl Seeder for UserSeeder {
    async fn seed(&self, ctx: &SeedContext<'_>) -> Result<(), DbErr> {
        let db = ctx.db;
        let config = ctx.config;

        // Admin from configuration
        skip_duplicate(
            Model::create(
                db,
                &config.admin_username,
                &config.admin_email,
                &config.admin_password,
                true,
            )
            .await,
        )?;

        // Fixed regular user
        skip_duplicate(Model::create(db, "reader01", "user@example.com", "password123", false).await)?;

        // Random readers
        for _ in 0..10 {
            let username = format!("reader{:04}", fastrand::u32(..10_000));
            let email: String = SafeEmail().fake();
            skip_duplicate(Model::create(db, &username, &email, "password123", false).await)?;
        }

        Ok(())
    }
}
