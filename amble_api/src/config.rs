use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Missing environment variable {0}")]
    Missing(&'static str),
    #[error("Invalid value '{value}' for environment variable {name}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub graph_path: PathBuf,
    pub host: String,
    pub port: u16,
    pub request_timeout: Duration,
    pub debug: bool,
}

impl Config {
    pub fn from_env() -> Result<Config, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Config, ConfigError> {
        let graph_path = lookup("AMBLE_GRAPH_PATH")
            .map(PathBuf::from)
            .ok_or(ConfigError::Missing("AMBLE_GRAPH_PATH"))?;

        let host = lookup("AMBLE_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = parse_or(&lookup, "PORT", DEFAULT_PORT)?;
        let timeout_secs = parse_or(
            &lookup,
            "AMBLE_REQUEST_TIMEOUT_SECS",
            DEFAULT_REQUEST_TIMEOUT_SECS,
        )?;
        let debug = lookup("AMBLE_DEBUG")
            .is_some_and(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes"));

        Ok(Config {
            graph_path,
            host,
            port,
            request_timeout: Duration::from_secs(timeout_secs),
            debug,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(name) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[("AMBLE_GRAPH_PATH", "./data/munich.geojson")]).unwrap();

        assert_eq!(config.graph_path, PathBuf::from("./data/munich.geojson"));
        assert_eq!(config.bind_address(), "0.0.0.0:5000");
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert!(!config.debug);
    }

    #[test]
    fn test_overrides() {
        let config = config(&[
            ("AMBLE_GRAPH_PATH", "roads.geojson"),
            ("AMBLE_HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("AMBLE_REQUEST_TIMEOUT_SECS", "5"),
            ("AMBLE_DEBUG", "true"),
        ])
        .unwrap();

        assert_eq!(config.bind_address(), "127.0.0.1:8080");
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert!(config.debug);
    }

    #[test]
    fn test_missing_graph_path() {
        assert_eq!(config(&[]), Err(ConfigError::Missing("AMBLE_GRAPH_PATH")));
    }

    #[test]
    fn test_invalid_port() {
        assert_eq!(
            config(&[("AMBLE_GRAPH_PATH", "roads.geojson"), ("PORT", "http")]),
            Err(ConfigError::Invalid {
                name: "PORT",
                value: "http".to_string()
            })
        );
    }
}
