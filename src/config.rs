use std::{env, net::SocketAddr};

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub debug: bool,
    pub bind_addr: String,
    pub bind_port: u16,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("BIND_PORT must be a valid u16")]
    InvalidPort,
    #[error("APP_DEBUG must be one of 1/0, true/false, yes/no, on/off")]
    InvalidDebugFlag,
    #[error("invalid bind address or port")]
    InvalidSocket,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let debug = lookup("APP_DEBUG")
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .map(|value| parse_flag(&value).ok_or(ConfigError::InvalidDebugFlag))
            .transpose()?
            .unwrap_or(false);
        let bind_addr = lookup("BIND_ADDR")
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| "0.0.0.0".to_string());
        let bind_port = lookup("BIND_PORT")
            .map(|value| {
                value
                    .trim()
                    .parse::<u16>()
                    .map_err(|_| ConfigError::InvalidPort)
            })
            .transpose()?
            .unwrap_or(5000);

        let config = Self {
            debug,
            bind_addr,
            bind_port,
        };

        let _ = config.bind_socket()?;
        Ok(config)
    }

    pub fn bind_socket(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.bind_addr, self.bind_port)
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidSocket)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn parse(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn parse_defaults() {
        let config = parse(&[]).expect("config should parse");
        assert!(!config.debug);
        assert_eq!(config.bind_addr, "0.0.0.0");
        assert_eq!(config.bind_port, 5000);
        assert_eq!(
            config.bind_socket().expect("socket"),
            "0.0.0.0:5000".parse().expect("valid socket")
        );
    }

    #[test]
    fn parse_overrides() {
        let config = parse(&[
            ("APP_DEBUG", "True"),
            ("BIND_ADDR", "127.0.0.1"),
            ("BIND_PORT", "8080"),
        ])
        .expect("config should parse");
        assert!(config.debug);
        assert_eq!(config.bind_addr, "127.0.0.1");
        assert_eq!(config.bind_port, 8080);
    }

    #[test]
    fn debug_flag_accepts_off() {
        let config = parse(&[("APP_DEBUG", "off")]).expect("config should parse");
        assert!(!config.debug);
    }

    #[test]
    fn invalid_debug_flag_fails() {
        let err = parse(&[("APP_DEBUG", "maybe")]).expect_err("expected invalid flag");
        assert!(matches!(err, ConfigError::InvalidDebugFlag));
    }

    #[test]
    fn invalid_port_fails() {
        let err = parse(&[("BIND_PORT", "70000")]).expect_err("expected invalid port");
        assert!(matches!(err, ConfigError::InvalidPort));
    }

    #[test]
    fn invalid_address_fails() {
        let err = parse(&[("BIND_ADDR", "not an address")]).expect_err("expected invalid socket");
        assert!(matches!(err, ConfigError::InvalidSocket));
    }
}
