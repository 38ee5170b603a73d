use crate::config::Config;
use crate::error::DBError;
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgConnection, PgPool, Postgres, Transaction};

macro_rules! sql_stmnt {
    ($ret:ident, $stmt:expr) => {
        sqlx::query_as::<_, $ret>($stmt)
    };
    ($ret:ident, $stmt:expr, $($bind:expr),*) => {
        sqlx::query_as::<_, $ret>($stmt)$(.bind($bind))*
    };
}

/// Hands out request scoped database sessions from one shared pool
///
/// The pool connects lazily, a dead database surfaces on the first
/// session instead of preventing startup.
#[derive(Clone, Debug)]
pub struct SessionProvider {
    pool: PgPool,
}

impl SessionProvider {
    pub fn new(config: &Config) -> Result<Self, DBError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.db_max_connections())
            .acquire_timeout(config.db_acquire_timeout())
            .connect_lazy(config.database_url())?;
        Ok(SessionProvider { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn session(&self) -> Result<Session, DBError> {
        let tx = self.pool.begin().await?;
        Ok(Session { tx })
    }
}

/// A pooled connection with an open transaction
///
/// Dropping it without `commit` rolls back and returns the connection to the pool.
pub struct Session {
    tx: Transaction<'static, Postgres>,
}

impl Session {
    pub fn conn(&mut self) -> &mut PgConnection {
        &mut self.tx
    }

    pub async fn commit(self) -> Result<(), DBError> {
        self.tx.commit().await?;
        Ok(())
    }
}

pub async fn run_migrations(pool: &PgPool) -> Result<(), DBError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

pub mod catalog;
pub mod config;
pub mod measurement;
