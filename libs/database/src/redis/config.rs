use core_config::{ConfigError, FromEnv};

/// Redis connection settings for the report index
///
/// Can be constructed manually or loaded from environment variables.
///
/// # Example
///
/// ```ignore
/// use database::redis::RedisConfig;
/// use core_config::FromEnv;
///
/// // Manual construction
/// let config = RedisConfig::new("redis://127.0.0.1:6379");
///
/// // From environment variables
/// let config = RedisConfig::from_env()?;
///
/// let conn = database::redis::connect(&config.url).await?;
/// ```
#[derive(Clone, Debug)]
pub struct RedisConfig {
    /// Redis connection URL (required)
    pub url: String,
}

impl RedisConfig {
    /// Create a new RedisConfig from a full connection URL
    ///
    /// # Arguments
    /// * `url` - Redis connection string (e.g., "redis://127.0.0.1:6379")
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Create a RedisConfig from a bare host and port
    ///
    /// # Example
    /// ```ignore
    /// let config = RedisConfig::from_host_port("search-redis", 6379);
    /// assert_eq!(config.url, "redis://search-redis:6379");
    /// ```
    pub fn from_host_port(host: &str, port: u16) -> Self {
        Self {
            url: format!("redis://{}:{}", host, port),
        }
    }

    /// Get a reference to the Redis URL
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            url: "redis://127.0.0.1:6379".to_string(),
        }
    }
}

/// Load RedisConfig from environment variables
///
/// Environment variables:
/// - `REDIS_URL` (preferred) - full Redis connection string
/// - `REDIS_HOST` + optional `REDIS_PORT` (default 6379) - bare host/port,
///   matching the variables the original demo deployment used
///
/// One of `REDIS_URL` or `REDIS_HOST` is required; startup fails otherwise.
impl FromEnv for RedisConfig {
    fn from_env() -> Result<Self, ConfigError> {
        if let Ok(url) = std::env::var("REDIS_URL") {
            return Ok(Self::new(url));
        }

        let host = std::env::var("REDIS_HOST")
            .map_err(|_| ConfigError::MissingEnvVar("REDIS_URL or REDIS_HOST".to_string()))?;

        // REDIS_HOST may already be a full URL; pass it through untouched
        if host.starts_with("redis://") || host.starts_with("rediss://") {
            return Ok(Self::new(host));
        }

        let port: u16 = match std::env::var("REDIS_PORT") {
            Ok(port_str) => port_str.parse().map_err(|e| ConfigError::ParseError {
                key: "REDIS_PORT".to_string(),
                details: format!("{}", e),
            })?,
            Err(_) => 6379,
        };

        Ok(Self::from_host_port(&host, port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redis_config_new() {
        let config = RedisConfig::new("redis://localhost:6379");
        assert_eq!(config.url, "redis://localhost:6379");
    }

    #[test]
    fn test_redis_config_from_host_port() {
        let config = RedisConfig::from_host_port("search-redis", 6380);
        assert_eq!(config.url, "redis://search-redis:6380");
    }

    #[test]
    fn test_redis_config_default() {
        let config = RedisConfig::default();
        assert_eq!(config.url, "redis://127.0.0.1:6379");
    }

    #[test]
    fn test_redis_config_from_env_with_redis_url() {
        temp_env::with_vars(
            [
                ("REDIS_URL", Some("redis://localhost:6379")),
                ("REDIS_HOST", None::<&str>),
            ],
            || {
                let config = RedisConfig::from_env().unwrap();
                assert_eq!(config.url, "redis://localhost:6379");
            },
        );
    }

    #[test]
    fn test_redis_config_from_env_with_host_and_port() {
        temp_env::with_vars(
            [
                ("REDIS_URL", None::<&str>),
                ("REDIS_HOST", Some("prod-redis")),
                ("REDIS_PORT", Some("6380")),
            ],
            || {
                let config = RedisConfig::from_env().unwrap();
                assert_eq!(config.url, "redis://prod-redis:6380");
            },
        );
    }

    #[test]
    fn test_redis_config_from_env_host_defaults_port() {
        temp_env::with_vars(
            [
                ("REDIS_URL", None::<&str>),
                ("REDIS_HOST", Some("prod-redis")),
                ("REDIS_PORT", None::<&str>),
            ],
            || {
                let config = RedisConfig::from_env().unwrap();
                assert_eq!(config.url, "redis://prod-redis:6379");
            },
        );
    }

    #[test]
    fn test_redis_config_from_env_host_is_full_url() {
        temp_env::with_vars(
            [
                ("REDIS_URL", None::<&str>),
                ("REDIS_HOST", Some("redis://prod:6379")),
            ],
            || {
                let config = RedisConfig::from_env().unwrap();
                assert_eq!(config.url, "redis://prod:6379");
            },
        );
    }

    #[test]
    fn test_redis_config_from_env_missing() {
        temp_env::with_vars(
            [("REDIS_URL", None::<&str>), ("REDIS_HOST", None::<&str>)],
            || {
                let config = RedisConfig::from_env();
                assert!(config.is_err());
                let err = config.unwrap_err();
                assert!(err.to_string().contains("REDIS"));
            },
        );
    }

    #[test]
    fn test_redis_config_from_env_invalid_port() {
        temp_env::with_vars(
            [
                ("REDIS_URL", None::<&str>),
                ("REDIS_HOST", Some("localhost")),
                ("REDIS_PORT", Some("invalid")),
            ],
            || {
                let config = RedisConfig::from_env();
                assert!(config.is_err());
                let err = config.unwrap_err();
                assert!(err.to_string().contains("REDIS_PORT"));
            },
        );
    }
}
