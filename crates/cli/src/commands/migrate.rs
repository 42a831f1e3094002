//! Apply the PostgreSQL schema without starting the server.

use anyhow::Result;
use school_locator_storage::{PgPoolConfig, PgStorage};

use crate::get_database_url;

pub(crate) async fn run() -> Result<()> {
    let url = get_database_url()?;
    // `PgStorage::new` runs the migrations before returning.
    let storage = PgStorage::new(&url, PgPoolConfig::from_env()).await?;
    storage.close().await;
    println!("Migrations applied");
    Ok(())
}
