use core_config::{AppInfo, FromEnv, app_info, server::ServerConfig};
use database::redis::RedisConfig;
use domain_lostfound::{EmbeddingConfig, IndexConfig, PartnerSet};

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Application-specific configuration
/// Composes shared config components from the workspace libraries
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub redis: RedisConfig,
    pub embedding: EmbeddingConfig,
    pub index: IndexConfig,
    pub partners: PartnerSet,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?; // Defaults: HOST=0.0.0.0, PORT=8501
        let redis = RedisConfig::from_env()?; // Required - will fail if not set
        let embedding = EmbeddingConfig::from_env()?; // Required - will fail if not set
        let index = IndexConfig::from_env()?; // Required - will fail if not set
        let partners = PartnerSet::from_env()?; // Defaults to the demo partner pair

        Ok(Self {
            app: app_info!(),
            server,
            redis,
            embedding,
            index,
            partners,
            environment,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_full_env(f: impl FnOnce()) {
        temp_env::with_vars(
            [
                ("REDIS_URL", Some("redis://localhost:6379")),
                ("INDEX_NAME", Some("found_reports")),
                ("EMBEDDING_MODEL", Some("text-embedding-ada-002")),
                ("API_KEY", Some("secret")),
                ("API_BASE", Some("https://myresource.openai.azure.com")),
                ("PARTNER_IDS", None::<&str>),
                ("PORT", None::<&str>),
            ],
            f,
        );
    }

    #[test]
    fn test_config_from_env_complete() {
        with_full_env(|| {
            let config = Config::from_env().unwrap();
            assert_eq!(config.app.name, "found_api");
            assert_eq!(config.index.name, "found_reports");
            assert_eq!(config.server.port, 8501);
            assert!(config.partners.contains("6392"));
        });
    }

    #[test]
    fn test_config_missing_index_name_fails() {
        temp_env::with_vars(
            [
                ("REDIS_URL", Some("redis://localhost:6379")),
                ("INDEX_NAME", None::<&str>),
                ("EMBEDDING_MODEL", Some("ada")),
                ("API_KEY", Some("secret")),
                ("API_BASE", Some("https://example.com")),
            ],
            || {
                let result = Config::from_env();
                assert!(result.is_err());
                assert!(result.unwrap_err().to_string().contains("INDEX_NAME"));
            },
        );
    }
}
