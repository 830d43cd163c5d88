use anyhow::{Context, Result};
use config::Config;

pub mod cli;
pub mod display;
pub mod error;
pub mod export;
pub mod manager;
pub mod models;
pub mod report;
pub mod schema;

use crate::manager::AttendanceManager;

/// Creates an [`AttendanceManager`] from ambient configuration: the
/// `database.url` key of `config.toml` if present, otherwise the
/// `DATABASE_URL` environment variable (a `.env` file works too).
pub fn create_default_manager() -> Result<AttendanceManager> {
    dotenvy::dotenv().ok();

    let settings = Config::builder()
        .add_source(config::File::with_name("config").required(false))
        .build()?;

    let database_url = match settings.get_string("database.url") {
        Ok(url) => url,
        Err(_) => std::env::var("DATABASE_URL")
            .context("set database.url in config.toml or the DATABASE_URL environment variable")?,
    };

    Ok(AttendanceManager::connect(&database_url)?)
}
