use std::net::SocketAddr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:5000";

pub struct Config {
    pub database_url: String,
    /// HMAC secret used to sign access tokens.
    pub secret_key: String,
    pub bind_address: SocketAddr,
    /// Whether empty tables are filled with the packaged reference data at startup.
    pub seed_reference_data: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let required = |name: &str| {
            lookup(name)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        let database_url = required("DATABASE_URL")?;
        let secret_key = required("SECRET_KEY")?;

        let bind_address =
            lookup("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());
        let bind_address: SocketAddr = bind_address
            .parse()
            .map_err(|_| invalid("BIND_ADDRESS", &bind_address))?;

        let seed_reference_data = match lookup("SEED_REFERENCE_DATA") {
            None => true,
            Some(value) => {
                parse_bool(&value).ok_or_else(|| invalid("SEED_REFERENCE_DATA", &value))?
            }
        };

        Ok(Self {
            database_url,
            secret_key,
            bind_address,
            seed_reference_data,
        })
    }
}

fn invalid(name: &str, value: &str) -> ConfigError {
    ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value: value.to_string(),
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
