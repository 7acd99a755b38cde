//! `PostgreSQL` connection pooling and schema bootstrap.
//!
//! Both listing repositories share one r2d2 pool. The schema is applied with
//! idempotent DDL at startup, so a fresh database needs no separate migration
//! step.

use diesel::connection::SimpleConnection;
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use thiserror::Error;

/// `PostgreSQL` connection pool type used by listing adapters.
pub type ListingPgPool = Pool<ConnectionManager<PgConnection>>;

/// DDL creating the `posts` table.
pub const CREATE_POSTS_SQL: &str =
    include_str!("../migrations/2025-10-01-000000_create_posts/up.sql");

/// DDL creating the `adoptions` table.
pub const CREATE_ADOPTIONS_SQL: &str =
    include_str!("../migrations/2025-10-01-000001_create_adoptions/up.sql");

/// Errors raised while preparing the database.
#[derive(Debug, Error)]
pub enum DatabaseSetupError {
    /// The pool could not be built or a connection could not be checked out.
    #[error("database pool error: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),

    /// Applying the schema failed.
    #[error("schema bootstrap failed: {0}")]
    Schema(#[from] diesel::result::Error),

    /// The blocking task running the bootstrap panicked or was cancelled.
    #[error("schema bootstrap task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Builds a connection pool for `database_url`.
///
/// # Errors
///
/// Returns [`DatabaseSetupError::Pool`] when the initial connections cannot
/// be established.
pub fn connect(database_url: &str, max_size: u32) -> Result<ListingPgPool, DatabaseSetupError> {
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    Ok(Pool::builder().max_size(max_size).build(manager)?)
}

/// Creates the listing tables if they do not exist yet.
///
/// # Errors
///
/// Returns [`DatabaseSetupError`] when a connection cannot be obtained or the
/// DDL fails.
pub async fn apply_schema(pool: &ListingPgPool) -> Result<(), DatabaseSetupError> {
    let worker_pool = pool.clone();
    tokio::task::spawn_blocking(move || -> Result<(), DatabaseSetupError> {
        let mut connection = worker_pool.get()?;
        connection.batch_execute(CREATE_POSTS_SQL)?;
        connection.batch_execute(CREATE_ADOPTIONS_SQL)?;
        Ok(())
    })
    .await?
}
