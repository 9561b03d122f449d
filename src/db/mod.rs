//! Database module - AppState and store operations.
//!
//! One submodule per entity group, each adding an `impl AppState` block:
//! - `users` - account lookup for the auth flow
//! - `projects` - portfolio projects
//! - `coming_soon` - teaser projects and email subscribers
//! - `team` - team member listings
//! - `org` - organization chart positions
//! - `about` - about sections, company values, achievements, partners
//! - `contact` - contact info and contact form messages
//! - `settings` - key/value site settings
//!
//! Reads degrade to empty results when the store cannot be reached so public
//! pages render with no content instead of failing. Writes propagate the
//! store error; a mutation must never appear to succeed against nothing.

mod about;
mod coming_soon;
mod contact;
mod org;
mod projects;
mod settings;
mod team;
mod users;

use anyhow::Context;
use dotenvy::dotenv;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::env;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        dotenv().ok();
        let database_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

        let pool = PgPoolOptions::new()
            .max_connections(20)
            .min_connections(2)
            .acquire_timeout(std::time::Duration::from_secs(30))
            .idle_timeout(std::time::Duration::from_secs(900))
            .max_lifetime(std::time::Duration::from_secs(1800))
            .connect(&database_url)
            .await
            .context("failed to connect to database")?;

        Ok(AppState { pool })
    }

    /// Build state around an existing pool. Used by tests.
    pub fn with_pool(pool: PgPool) -> Self {
        AppState { pool }
    }
}

/// Degrade a failed list read to an empty collection.
pub(crate) fn degrade_list<T>(result: Result<Vec<T>, sqlx::Error>, what: &str) -> Vec<T> {
    match result {
        Ok(rows) => rows,
        Err(e) => {
            log::warn!("[db] {} read failed, returning empty list: {}", what, e);
            Vec::new()
        }
    }
}

/// Degrade a failed single-record read to an absent value.
pub(crate) fn degrade_opt<T>(result: Result<Option<T>, sqlx::Error>, what: &str) -> Option<T> {
    match result {
        Ok(row) => row,
        Err(e) => {
            log::warn!("[db] {} read failed, returning none: {}", what, e);
            None
        }
    }
}
