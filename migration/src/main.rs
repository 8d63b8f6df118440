use migration::Migrator;
use std::{env, fs, path::Path, process::ExitCode};
use util::config::{database_url, sqlite_file};

mod runner;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let Ok(db_path) = env::var("DATABASE_PATH") else {
        eprintln!("DATABASE_PATH must be set");
        return ExitCode::FAILURE;
    };
    let url = database_url(&db_path);
    let db_file = sqlite_file(&db_path);
    let args: Vec<String> = env::args().collect();

    let result = match args.get(1).map(|s| s.as_str()) {
        Some("clean") => {
            remove_db_file(db_file);
            Ok(())
        }
        Some("fresh") => {
            remove_db_file(db_file);
            create_db_dir(db_file);
            runner::run_all_migrations(&url).await
        }
        _ => {
            create_db_dir(db_file);
            runner::run_all_migrations(&url).await
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Migration failed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn remove_db_file(db_file: Option<&Path>) {
    let Some(db_path) = db_file else {
        println!("Not a SQLite file database, nothing to delete");
        return;
    };
    if !db_path.exists() {
        println!("DB file does not exist: {}", db_path.display());
        return;
    }

    match fs::remove_file(db_path) {
        Ok(()) => println!("Deleted DB: {}", db_path.display()),
        Err(err) => eprintln!("Failed to delete {}: {err}", db_path.display()),
    }
}

fn create_db_dir(db_file: Option<&Path>) {
    if let Some(parent) = db_file.and_then(Path::parent) {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).ok();
        }
    }
}
