use std::process::ExitCode;

use migration::Migrator;
use sea_orm_migration::MigratorTrait;
use util::config::AppConfig;

use crate::seed::{SeedContext, Seeder, run_seeder};
use crate::seeds::{
    chatbot::ChatbotSeeder, comment::CommentSeeder, post::PostSeeder, user::UserSeeder,
};

mod seed;
mod seeds;

#[tokio::main]
async fn main() -> ExitCode {
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    let db = match db::connect(&config).await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("Failed to open database at {}: {e}", config.database_path);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = Migrator::up(&db, None).await {
        eprintln!("Failed to apply migrations: {e}");
        return ExitCode::FAILURE;
    }

    let ctx = SeedContext {
        db: &db,
        config: &config,
    };

    let seeders: [(Box<dyn Seeder>, &str); 4] = [
        (Box::new(UserSeeder), "User"),
        (Box::new(PostSeeder), "Post"),
        (Box::new(CommentSeeder), "Comment"),
        (Box::new(ChatbotSeeder), "Chatbot"),
    ];

    for (seeder, name) in seeders {
        if let Err(e) = run_seeder(seeder.as_ref(), name, &ctx).await {
            eprintln!("{name} seeder failed: {e}");
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
