use async_trait::async_trait;
use colored::*;
use futures::FutureExt;
use sea_orm::{DatabaseConnection, DbErr};
use std::io::{self, Write};
use std::time::Instant;
use util::config::AppConfig;

const STATUS_COLUMN: usize = 80;

/// Everything a seeder may need.
pub struct SeedContext<'a> {
    pub db: &'a DatabaseConnection,
    pub config: &'a AppConfig,
}

#[async_trait]
pub trait Seeder: Send + Sync {
    async fn seed(&self, ctx: &SeedContext<'_>) -> Result<(), DbErr>;
}

/// Runs one seeder and prints a `Seeding <name>....... done (12ms)` line.
pub async fn run_seeder(seeder: &dyn Seeder, name: &str, ctx: &SeedContext<'_>) -> Result<(), DbErr> {
    let base_msg = format!("Seeding {}", name.bold());
    let dots = ".".repeat(STATUS_COLUMN.saturating_sub(base_msg.len()));
    print!("{}{} ", base_msg, dots);
    io::stdout().flush().ok();

    let start = Instant::now();
    let result = std::panic::AssertUnwindSafe(seeder.seed(ctx))
        .catch_unwind()
        .await;

    match result {
        Ok(Ok(())) => {
            let time_str = format!("({:.2?})", start.elapsed()).dimmed();
            println!("{} {}", "done".green(), time_str);
            Ok(())
        }
        Ok(Err(err)) => {
            println!("{}", "failed".red());
            Err(err)
        }
        Err(_) => {
            println!("{}", "failed".red());
            Err(DbErr::Custom(format!("{name} seeder panicked")))
        }
    }
}
