//! Application state management.
//!
//! The shared state passed to all request handlers:
//! - Configuration
//! - Redis connection manager (the single handle opened at startup)
//! - The search service (embedding provider + report index behind Arcs)

use database::redis::ConnectionManager;
use domain_lostfound::SearchService;

/// Shared application state.
///
/// Cloned per handler; all clones are cheap (Arc and handle clones).
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// Redis connection manager, used directly by the readiness check
    pub redis: ConnectionManager,
    /// Search orchestrator (embed -> KNN -> ranked hits)
    pub service: SearchService,
}
