use std::sync::Arc;

use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use tracing::{info, warn};

use crate::auth::store::{MemoryUserStore, PgUserStore, UserStore};

const MAX_CONNECTIONS: u32 = 10;

/// Picks the account store: PostgreSQL when a database URL is configured,
/// otherwise an in-process store that forgets accounts on restart.
pub async fn connect_user_store(database_url: Option<&str>) -> Result<Arc<dyn UserStore>> {
    let Some(database_url) = database_url else {
        warn!("DATABASE_URL not set; accounts are kept in memory only");
        return Ok(Arc::new(MemoryUserStore::new()));
    };

    info!("Connecting to PostgreSQL...");
    let pool = PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect(database_url)
        .await
        .context("Failed to connect to PostgreSQL")?;
    info!("PostgreSQL connection pool established");

    let store = PgUserStore::new(pool);
    store
        .ensure_schema()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to prepare users table: {e}"))?;
    Ok(Arc::new(store))
}
