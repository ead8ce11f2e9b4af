//! Infrastructure Database Layer
//!
//! This crate provides the PostgreSQL infrastructure for the referral
//! commission tracker, implemented with SQLx.
//!
//! # Architecture
//!
//! Repositories hide SQL and row mapping from the domain layer; the
//! [`engine::LedgerEngine`] is the transactional core that keeps the
//! bills table and the points ledger consistent. Every engine operation
//! runs inside a single database transaction: the bill write and the
//! compensating ledger write commit together or not at all.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{create_pool, DatabaseConfig, LedgerEngine};
//!
//! let pool = create_pool(DatabaseConfig::new("postgres://localhost/referral")).await?;
//! infra_db::MIGRATOR.run(&pool).await?;
//! let engine = LedgerEngine::new(pool);
//! ```

pub mod engine;
pub mod error;
pub mod pool;
pub mod repositories;

pub use engine::{EngineError, LedgerEngine};
pub use error::DatabaseError;
pub use pool::{create_pool, create_pool_from_url, DatabaseConfig, DatabasePool};

/// Embedded schema migrations, applied at server startup and by the test
/// harness
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");
