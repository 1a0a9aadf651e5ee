use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_ENVIRONMENT: &str = "development";

pub struct Config {
    pub database_url: String,

    pub host: String,
    pub port: u16,

    /// `development` or `production`
    pub environment: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let port = match std::env::var("PORT") {
            Ok(value) => value.parse::<u16>().map_err(|_| ConfigError::InvalidEnvVar {
                name: "PORT".to_string(),
                value,
            })?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            host: std::env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port,
            environment: std::env::var("APP_ENV")
                .unwrap_or_else(|_| DEFAULT_ENVIRONMENT.to_string()),
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment.eq_ignore_ascii_case("production")
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(environment: &str) -> Config {
        Config {
            database_url: "sqlite::memory:".to_string(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            environment: environment.to_string(),
        }
    }

    #[test]
    fn production_is_detected_ignoring_case() {
        assert!(config("production").is_production());
        assert!(config("Production").is_production());
        assert!(!config(DEFAULT_ENVIRONMENT).is_production());
    }

    #[test]
    fn bind_address_joins_host_and_port() {
        assert_eq!(config("development").bind_address(), "0.0.0.0:3000");
    }
}
