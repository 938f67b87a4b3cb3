use std::env;
use std::str::FromStr;
use std::time::Duration;

use redis::{ConnectionInfo, IntoConnectionInfo, RedisResult};
use thiserror::Error;

/// One hundred years.
const MAX_JWT_EXPIRATION_HOURS: i64 = 24 * 365 * 100;

/// Errors raised while reading configuration from the environment.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
    #[error("environment variable {key} has an invalid value: {value}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub node_env: String,
    pub service_name: String,
    pub server_host: String,
    pub port: u16,
    pub service_secret: String,
    pub mongodb_url: String,
    pub mongodb_name: String,
    pub redis_host: String,
    pub redis_port: u16,
    pub redis_password: Option<String>,
    pub jwt_expiration_hours: i64,
    pub bcrypt_cost: u32,
    pub write_timeout_secs: u64,
    pub shutdown_grace_secs: u64,
}

impl Config {
    /// Load `.env` (if present) and read the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| -> Result<String, ConfigError> {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::Missing(key))
        };
        let optional = |key: &'static str, default: &str| -> String {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let bcrypt_cost: u32 = parse("BCRYPT_COST", optional("BCRYPT_COST", "10"))?;
        if !(4..=31).contains(&bcrypt_cost) {
            return Err(ConfigError::Invalid {
                key: "BCRYPT_COST",
                value: bcrypt_cost.to_string(),
            });
        }

        let jwt_expiration_hours: i64 =
            parse("JWT_EXPIRATION_HOURS", optional("JWT_EXPIRATION_HOURS", "24"))?;
        if !(0..=MAX_JWT_EXPIRATION_HOURS).contains(&jwt_expiration_hours) {
            return Err(ConfigError::Invalid {
                key: "JWT_EXPIRATION_HOURS",
                value: jwt_expiration_hours.to_string(),
            });
        }

        let write_timeout_secs: u64 =
            parse("WRITE_TIMEOUT_SECS", optional("WRITE_TIMEOUT_SECS", "10"))?;
        if write_timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                key: "WRITE_TIMEOUT_SECS",
                value: write_timeout_secs.to_string(),
            });
        }

        Ok(Self {
            node_env: optional("NODE_ENV", "dev"),
            service_name: required("SERVICE_NAME")?,
            server_host: optional("SERVER_HOST", "0.0.0.0"),
            port: parse("PORT", required("PORT")?)?,
            service_secret: required("SERVICE_SECRET")?,
            mongodb_url: required("MONGODB_URL")?,
            mongodb_name: required("MONGODB_NAME")?,
            redis_host: required("REDIS_HOST")?,
            redis_port: parse("REDIS_PORT", required("REDIS_PORT")?)?,
            redis_password: lookup("REDIS_PASSWORD").filter(|v| !v.is_empty()),
            jwt_expiration_hours,
            bcrypt_cost,
            write_timeout_secs,
            shutdown_grace_secs: parse(
                "SHUTDOWN_GRACE_SECS",
                optional("SHUTDOWN_GRACE_SECS", "5"),
            )?,
        })
    }

    /// Connection settings for database 0. The password is set on the parsed
    /// info rather than in the URL so it needs no escaping.
    pub fn redis_connection_info(&self) -> RedisResult<ConnectionInfo> {
        let mut info = (self.redis_host.as_str(), self.redis_port).into_connection_info()?;
        info.redis.db = 0;
        info.redis.password = self.redis_password.clone();
        Ok(info)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.port)
    }

    pub fn write_timeout(&self) -> Duration {
        Duration::from_secs(self.write_timeout_secs)
    }
}

fn parse<T: FromStr>(key: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid { key, value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use redis::ConnectionAddr;
    use rstest::rstest;
    use std::collections::HashMap;

    fn base_env() -> HashMap<&'static str, String> {
        HashMap::from([
            ("SERVICE_NAME", "premier-league".to_string()),
            ("PORT", "8080".to_string()),
            ("SERVICE_SECRET", "s3cret".to_string()),
            ("MONGODB_URL", "mongodb://localhost:27017".to_string()),
            ("MONGODB_NAME", "premier_league".to_string()),
            ("REDIS_HOST", "localhost".to_string()),
            ("REDIS_PORT", "6379".to_string()),
        ])
    }

    fn load(env: &HashMap<&'static str, String>) -> Result<Config, ConfigError> {
        Config::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn applies_defaults_for_optional_values() {
        let config = load(&base_env()).expect("config loads");

        assert_eq!(config.node_env, "dev");
        assert_eq!(config.server_host, "0.0.0.0");
        assert_eq!(config.jwt_expiration_hours, 24);
        assert_eq!(config.bcrypt_cost, 10);
        assert_eq!(config.shutdown_grace_secs, 5);
        assert_eq!(config.write_timeout(), Duration::from_secs(10));
        let redis = config.redis_connection_info().expect("redis info");
        assert_eq!(
            redis.addr,
            ConnectionAddr::Tcp("localhost".to_string(), 6379)
        );
        assert_eq!(redis.redis.password, None);
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
    }

    #[rstest]
    #[case("SERVICE_NAME")]
    #[case("PORT")]
    #[case("SERVICE_SECRET")]
    #[case("MONGODB_URL")]
    #[case("MONGODB_NAME")]
    #[case("REDIS_HOST")]
    #[case("REDIS_PORT")]
    fn reports_missing_required_variable(#[case] key: &'static str) {
        let mut env = base_env();
        env.remove(key);

        assert_eq!(load(&env).unwrap_err(), ConfigError::Missing(key));
    }

    #[rstest]
    #[case("PORT", "eighty")]
    #[case("BCRYPT_COST", "3")]
    #[case("BCRYPT_COST", "32")]
    #[case("JWT_EXPIRATION_HOURS", "-1")]
    #[case("JWT_EXPIRATION_HOURS", "876001")]
    #[case("JWT_EXPIRATION_HOURS", "9223372036854775807")]
    #[case("WRITE_TIMEOUT_SECS", "0")]
    fn rejects_invalid_values(#[case] key: &'static str, #[case] value: &str) {
        let mut env = base_env();
        env.insert(key, value.to_string());

        assert!(matches!(
            load(&env),
            Err(ConfigError::Invalid { key: k, .. }) if k == key
        ));
    }

    #[test]
    fn accepts_longest_token_lifetime() {
        let mut env = base_env();
        env.insert("JWT_EXPIRATION_HOURS", MAX_JWT_EXPIRATION_HOURS.to_string());

        let config = load(&env).expect("config loads");
        assert_eq!(config.jwt_expiration_hours, MAX_JWT_EXPIRATION_HOURS);
    }

    #[rstest]
    #[case("hunter2")]
    #[case("p@ss:w/rd#1")]
    fn carries_redis_password_verbatim(#[case] password: &str) {
        let mut env = base_env();
        env.insert("REDIS_PASSWORD", password.to_string());

        let redis = load(&env)
            .expect("config loads")
            .redis_connection_info()
            .expect("redis info");
        assert_eq!(redis.redis.password.as_deref(), Some(password));
        assert_eq!(
            redis.addr,
            ConnectionAddr::Tcp("localhost".to_string(), 6379)
        );
    }
}
