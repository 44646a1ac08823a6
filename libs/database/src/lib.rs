//! Redis connectivity for the found-report search service.
//!
//! Provides connection management (a single `ConnectionManager` handle opened
//! at startup and cloned into request handlers), startup retry with backoff,
//! and health checks for the readiness endpoint.
//!
//! # Example
//!
//! ```ignore
//! use database::redis;
//! use core_config::FromEnv;
//!
//! let config = redis::RedisConfig::from_env()?;
//! let conn = redis::connect_from_config_with_retry(config, None).await?;
//! ```

pub mod common;
pub mod redis;

pub use common::{DatabaseError, DatabaseResult};
