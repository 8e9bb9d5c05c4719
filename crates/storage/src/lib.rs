use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

pub mod dto;
pub mod error;
pub mod memory;
pub mod models;
pub mod query;
pub mod repository;
pub mod services;
pub mod store;

pub use memory::MemoryStore;
pub use store::{Session, Store};

use error::Result;
use repository::PgSession;

/// Default maximum connections for the pool
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Postgres-backed store
#[derive(Debug, Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub async fn new(database_url: &str) -> Result<Self> {
        Self::with_max_connections(database_url, DEFAULT_MAX_CONNECTIONS).await
    }

    pub async fn with_max_connections(database_url: &str, max_connections: u32) -> Result<Self> {
        tracing::debug!(max_connections, "Opening Postgres pool");
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl Store for Database {
    type Session = PgSession;

    async fn begin(&self) -> Result<PgSession> {
        let tx = self.pool.begin().await?;
        Ok(PgSession::new(tx))
    }
}
