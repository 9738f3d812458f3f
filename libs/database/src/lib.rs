//! PostgreSQL connectivity for the inventory workspace.
//!
//! Wraps SeaORM connection setup behind a small API: tuned pool options,
//! initial-connection retry with backoff, migration running, and a health
//! ping for readiness probes.
//!
//! # Example
//!
//! ```ignore
//! use app_config::FromEnv;
//! use database::postgres::{self, PostgresConfig};
//! use migration::Migrator;
//!
//! let config = PostgresConfig::from_env()?;
//! let db = postgres::connect_from_config_with_retry(config, None).await?;
//! postgres::run_migrations::<Migrator>(&db, "inventory_api").await?;
//! ```

pub mod postgres;
pub mod retry;
